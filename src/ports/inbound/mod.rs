/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod catalog_search_port;
pub mod performance_analysis_port;

pub use catalog_search_port::CatalogSearchPort;
pub use performance_analysis_port::PerformanceAnalysisPort;

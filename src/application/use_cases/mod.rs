/// Use cases module containing application business logic orchestration
mod analyze_performance;
mod search_catalog;

pub use analyze_performance::AnalyzePerformanceUseCase;
pub use search_catalog::SearchCatalogUseCase;

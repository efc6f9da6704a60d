/// Application layer - Use cases, DTOs, read models and the search session
///
/// This layer orchestrates the performance and catalog domains and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod session;
pub mod use_cases;

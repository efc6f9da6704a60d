/// Data Transfer Objects for application layer
///
/// DTOs carry raw caller input into the use cases, keeping the domain
/// layer free of "maybe unset" values.
mod output_format;
mod profile_draft;
mod search_request;

pub use output_format::OutputFormat;
pub use profile_draft::ProfileDraft;
pub use search_request::SearchRequest;

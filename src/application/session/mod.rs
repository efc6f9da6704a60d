/// Search session state and debounced scheduling
mod debouncer;
mod search_session;

pub use debouncer::Debouncer;
pub use search_session::{SearchSession, SearchSnapshot, SessionSettings};

/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports. The CLI in `cli.rs`
/// plays the inbound adapter.
pub mod outbound;

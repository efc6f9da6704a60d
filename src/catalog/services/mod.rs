mod listing_filter;
mod listing_generator;

pub use listing_filter::ListingFilter;
pub use listing_generator::{ListingGenerator, VARIANTS_PER_PLATFORM};

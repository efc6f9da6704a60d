pub mod criteria;
pub mod listing;
pub mod platform;

pub use criteria::{FilterCriteria, SortKey};
pub use listing::{ListingId, ProductListing, ProductVariant, Rating};
pub use platform::Platform;

use crate::catalog::domain::{Platform, ProductListing, ProductVariant, Rating};
use crate::ports::outbound::RandomSource;
use crate::shared::error::RigcheckError;
use crate::shared::Result;

pub const VARIANTS_PER_PLATFORM: usize = ProductVariant::ALL.len();

/// ListingGenerator - stands in for the price-comparison backend
///
/// Produces one listing per (platform, variant) pair. Prices and ratings are
/// drawn from the injected [`RandomSource`], so only the shape of the result
/// is stable: counts, ranges and links.
pub struct ListingGenerator;

impl ListingGenerator {
    /// Generates five listings per distinct platform for `query`
    ///
    /// Repeated platforms are skipped after their first occurrence.
    ///
    /// # Errors
    /// Returns [`RigcheckError::EmptyQuery`] if the query is empty or whitespace
    pub fn generate<R>(query: &str, platforms: &[Platform], rng: &mut R) -> Result<Vec<ProductListing>>
    where
        R: RandomSource + ?Sized,
    {
        let query = query.trim();
        if query.is_empty() {
            return Err(RigcheckError::EmptyQuery.into());
        }

        let platforms = Platform::distinct(platforms);
        let mut listings = Vec::with_capacity(platforms.len() * VARIANTS_PER_PLATFORM);
        for &platform in &platforms {
            for variant in ProductVariant::ALL {
                let discount = rng.int_inclusive(
                    u32::from(ProductListing::MIN_DISCOUNT_PERCENT),
                    u32::from(ProductListing::MAX_DISCOUNT_PERCENT),
                );
                let rating = rng.int_inclusive(
                    u32::from(Rating::MIN_TENTHS),
                    u32::from(Rating::MAX_TENTHS),
                );
                listings.push(ProductListing::new(
                    query,
                    platform,
                    variant,
                    discount as u8,
                    Rating::from_tenths(rating as u8),
                ));
            }
        }

        tracing::debug!(
            query,
            platforms = platforms.len(),
            listings = listings.len(),
            "generated listings"
        );

        Ok(listings)
    }
}

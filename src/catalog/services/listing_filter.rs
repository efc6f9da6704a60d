use crate::catalog::domain::{FilterCriteria, ProductListing, SortKey};

/// ListingFilter - platform, price range and sort, applied in that order
///
/// Never mutates its input. Sorting is stable so equal keys keep generation
/// order across repeated re-filters.
pub struct ListingFilter;

impl ListingFilter {
    pub fn apply(listings: &[ProductListing], criteria: &FilterCriteria) -> Vec<ProductListing> {
        let floor = criteria.price_floor();
        let ceiling = criteria.price_ceiling();

        let mut visible: Vec<ProductListing> = listings
            .iter()
            .filter(|l| criteria.admits_platform(l.platform))
            .filter(|l| floor.is_none_or(|min| f64::from(l.price) >= min))
            .filter(|l| ceiling.is_none_or(|max| f64::from(l.price) <= max))
            .cloned()
            .collect();

        match criteria.sort {
            SortKey::None => {}
            SortKey::PriceLow => visible.sort_by_key(|l| l.price),
            SortKey::PriceHigh => visible.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Discount => {
                visible.sort_by(|a, b| b.discount_percent.cmp(&a.discount_percent))
            }
        }

        tracing::debug!(
            input = listings.len(),
            visible = visible.len(),
            sort = %criteria.sort,
            "applied listing filter"
        );

        visible
    }
}

use super::platform::Platform;
use serde::{Serialize, Serializer};
use std::fmt;

/// The five product variants every search expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProductVariant {
    PremiumEdition,
    Standard,
    ProSeries,
    Compact,
    Deluxe,
}

impl ProductVariant {
    pub const ALL: [ProductVariant; 5] = [
        ProductVariant::PremiumEdition,
        ProductVariant::Standard,
        ProductVariant::ProSeries,
        ProductVariant::Compact,
        ProductVariant::Deluxe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductVariant::PremiumEdition => "Premium Edition",
            ProductVariant::Standard => "Standard",
            ProductVariant::ProSeries => "Pro Series",
            ProductVariant::Compact => "Compact",
            ProductVariant::Deluxe => "Deluxe",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            ProductVariant::PremiumEdition => "premium-edition",
            ProductVariant::Standard => "standard",
            ProductVariant::ProSeries => "pro-series",
            ProductVariant::Compact => "compact",
            ProductVariant::Deluxe => "deluxe",
        }
    }

    /// List price before discount, in whole currency units
    pub fn base_price(&self) -> u32 {
        match self {
            ProductVariant::PremiumEdition => 4999,
            ProductVariant::Standard => 1999,
            ProductVariant::ProSeries => 3499,
            ProductVariant::Compact => 1499,
            ProductVariant::Deluxe => 5999,
        }
    }
}

/// Listing identifier, unique per platform and variant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(platform: Platform, variant: ProductVariant) -> Self {
        Self(format!("{}-{}", platform.slug(), variant.slug()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating held in tenths so it always renders with one decimal in [4.0, 5.0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN_TENTHS: u8 = 40;
    pub const MAX_TENTHS: u8 = 49;

    /// Clamps into the supported range
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.clamp(Self::MIN_TENTHS, Self::MAX_TENTHS))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// ProductListing - one synthetic offer for a query on one platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub id: ListingId,
    pub name: String,
    pub platform: Platform,
    pub price: u32,
    pub original_price: u32,
    pub discount_percent: u8,
    pub rating: Rating,
    pub url: String,
}

impl ProductListing {
    pub const MIN_DISCOUNT_PERCENT: u8 = 5;
    pub const MAX_DISCOUNT_PERCENT: u8 = 44;

    /// Builds a listing; `price` is the base price with the discount taken off,
    /// rounded down
    ///
    /// The discount is clamped into 5..=44 so `price` always stays below
    /// `original_price`.
    pub fn new(
        query: &str,
        platform: Platform,
        variant: ProductVariant,
        discount_percent: u8,
        rating: Rating,
    ) -> Self {
        let discount_percent =
            discount_percent.clamp(Self::MIN_DISCOUNT_PERCENT, Self::MAX_DISCOUNT_PERCENT);
        let original_price = variant.base_price();
        let price = original_price * (100 - u32::from(discount_percent)) / 100;

        Self {
            id: ListingId::new(platform, variant),
            name: format!("{} {}", query.trim(), variant.label()),
            platform,
            price,
            original_price,
            discount_percent,
            rating,
            url: platform.search_url(query.trim()),
        }
    }

    pub fn savings(&self) -> u32 {
        self.original_price - self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_floored() {
        // 1999 * 0.93 = 1859.07
        let listing = ProductListing::new(
            "mouse",
            Platform::Amazon,
            ProductVariant::Standard,
            7,
            Rating::from_tenths(42),
        );
        assert_eq!(listing.original_price, 1999);
        assert_eq!(listing.price, 1859);
        assert_eq!(listing.savings(), 140);
    }

    #[test]
    fn test_discount_clamped_and_stored() {
        for (requested, stored) in [(0, 5), (3, 5), (44, 44), (90, 44), (255, 44)] {
            let listing = ProductListing::new(
                "cable",
                Platform::Meesho,
                ProductVariant::Compact,
                requested,
                Rating::from_tenths(40),
            );
            assert_eq!(listing.discount_percent, stored);
            assert_eq!(
                listing.price,
                listing.original_price * (100 - u32::from(stored)) / 100
            );
            assert!(listing.price < listing.original_price);
            assert_eq!(listing.savings(), listing.original_price - listing.price);
        }
    }

    #[test]
    fn test_listing_identity_and_link() {
        let listing = ProductListing::new(
            "  headphones ",
            Platform::Flipkart,
            ProductVariant::ProSeries,
            20,
            Rating::from_tenths(45),
        );
        assert_eq!(listing.id.as_str(), "flipkart-pro-series");
        assert_eq!(listing.name, "headphones Pro Series");
        assert_eq!(
            listing.url,
            "https://www.flipkart.com/search?q=headphones"
        );
    }

    #[test]
    fn test_rating_display_one_decimal() {
        assert_eq!(Rating::from_tenths(40).to_string(), "4.0");
        assert_eq!(Rating::from_tenths(47).to_string(), "4.7");
    }

    #[test]
    fn test_rating_clamped_below_five() {
        assert_eq!(Rating::from_tenths(50).tenths(), 49);
        assert_eq!(Rating::from_tenths(12).tenths(), 40);
        assert!(Rating::from_tenths(99).as_f64() < 5.0);
    }

    #[test]
    fn test_listing_serializes_rating_as_number() {
        let listing = ProductListing::new(
            "lamp",
            Platform::Ajio,
            ProductVariant::Compact,
            10,
            Rating::from_tenths(43),
        );
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["rating"], serde_json::json!(4.3));
        assert_eq!(json["id"], "ajio-compact");
        assert_eq!(json["platform"], "ajio");
    }

    #[test]
    fn test_variant_base_prices_are_fixed() {
        let prices: Vec<u32> = ProductVariant::ALL.iter().map(|v| v.base_price()).collect();
        assert_eq!(prices, vec![4999, 1999, 3499, 1499, 5999]);
    }
}

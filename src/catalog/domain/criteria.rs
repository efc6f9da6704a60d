use super::platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep generation order
    #[default]
    None,
    PriceLow,
    PriceHigh,
    Discount,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "discount" => Ok(SortKey::Discount),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify 'none', 'price-low', 'price-high' or 'discount'",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::None => write!(f, "none"),
            SortKey::PriceLow => write!(f, "price-low"),
            SortKey::PriceHigh => write!(f, "price-high"),
            SortKey::Discount => write!(f, "discount"),
        }
    }
}

/// FilterCriteria - the filter panel state
///
/// An empty platform selection means no platform restriction. Price bounds
/// that are not finite numbers are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub selected_platforms: BTreeSet<Platform>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.selected_platforms = platforms.into_iter().collect();
        self
    }

    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Lower price bound, if it is a usable number
    pub fn price_floor(&self) -> Option<f64> {
        self.min_price.filter(|v| v.is_finite())
    }

    /// Upper price bound, if it is a usable number
    pub fn price_ceiling(&self) -> Option<f64> {
        self.max_price.filter(|v| v.is_finite())
    }

    pub fn admits_platform(&self, platform: Platform) -> bool {
        self.selected_platforms.is_empty() || self.selected_platforms.contains(&platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("price-low").unwrap(), SortKey::PriceLow);
        assert_eq!(SortKey::from_str("PRICE-HIGH").unwrap(), SortKey::PriceHigh);
        assert_eq!(SortKey::from_str("discount").unwrap(), SortKey::Discount);
        assert_eq!(SortKey::from_str("").unwrap(), SortKey::None);
        assert!(SortKey::from_str("rating").is_err());
    }

    #[test]
    fn test_sort_key_display_round_trips() {
        for key in [
            SortKey::None,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Discount,
        ] {
            assert_eq!(SortKey::from_str(&key.to_string()).unwrap(), key);
        }
    }

    #[test]
    fn test_non_finite_bounds_are_ignored() {
        let criteria = FilterCriteria::new().with_price_range(Some(f64::NAN), Some(f64::INFINITY));
        assert!(criteria.price_floor().is_none());
        assert!(criteria.price_ceiling().is_none());

        let criteria = FilterCriteria::new().with_price_range(Some(100.0), None);
        assert_eq!(criteria.price_floor(), Some(100.0));
    }

    #[test]
    fn test_empty_selection_admits_everything() {
        let criteria = FilterCriteria::new();
        assert!(Platform::ALL.iter().all(|p| criteria.admits_platform(*p)));

        let criteria = FilterCriteria::new().with_platforms([Platform::Ajio]);
        assert!(criteria.admits_platform(Platform::Ajio));
        assert!(!criteria.admits_platform(Platform::Amazon));
    }

    #[test]
    fn test_sort_key_deserialize_kebab_case() {
        let key: SortKey = serde_json::from_str("\"price-low\"").unwrap();
        assert_eq!(key, SortKey::PriceLow);
    }
}

use crate::catalog::domain::FilterCriteria;
use crate::shared::error::RigcheckError;
use crate::shared::Result;

/// SearchRequest - one query plus the filter panel state to apply to it
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub criteria: FilterCriteria,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, criteria: FilterCriteria) -> Self {
        Self {
            query: query.into(),
            criteria,
        }
    }

    /// Rejects a price range whose minimum exceeds its maximum
    ///
    /// # Errors
    /// Returns [`RigcheckError::InvalidPriceRange`]
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.criteria.price_floor(), self.criteria.price_ceiling())
        {
            if min > max {
                return Err(RigcheckError::InvalidPriceRange { min, max }.into());
            }
        }
        Ok(())
    }
}

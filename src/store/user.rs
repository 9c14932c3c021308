use super::error::{StoreError, StoreResult};

/// A single directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
    age: f64,
}

impl User {
    pub fn new(name: impl Into<String>, age: f64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    /// Check the record can be inserted: non-empty name first, then a positive age.
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        if !(self.age.is_finite() && self.age > 0.0) {
            return Err(StoreError::InvalidAge);
        }

        Ok(())
    }
}

/// Interpret a numeric prompt answer. Non-numeric and non-finite input yields `None`.
pub fn parse_age(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
}

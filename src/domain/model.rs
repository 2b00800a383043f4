use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub country: String,
}

impl PersonProfile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
            country: country.into(),
        }
    }
}

impl Validate for PersonProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_range("age", self.age, 0, MAX_AGE)?;
        validate_non_empty_string("city", &self.city)?;
        validate_non_empty_string("country", &self.country)?;
        Ok(())
    }
}

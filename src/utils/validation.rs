use crate::utils::error::{ProxyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProxyError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Profile field cannot be blank".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProxyError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Profile value must be between {} and {} inclusive", min, max),
        });
    }
    Ok(())
}

use crate::domain::model::PersonProfile;
use crate::domain::ports::{Console, Person};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// The real subject behind the proxy.
///
/// Call arguments are used as given; `introduce` does not compare its
/// argument with the stored profile name.
pub struct Man {
    profile: PersonProfile,
    console: Arc<dyn Console>,
}

impl Man {
    pub fn new(profile: PersonProfile, console: Arc<dyn Console>) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile, console })
    }

    pub fn profile(&self) -> &PersonProfile {
        &self.profile
    }
}

impl std::fmt::Debug for Man {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Man").field("profile", &self.profile).finish()
    }
}

impl Person for Man {
    fn introduce(&self, name: &str) -> Result<()> {
        self.console
            .write_line(&format!("Hello, my name is {}", name))
    }

    fn say_age(&self, age: u32) -> Result<()> {
        self.console.write_line(&format!("I am {} years old", age))
    }

    fn say_where_from(&self, city: &str, country: &str) -> Result<()> {
        self.console
            .write_line(&format!("I am from {}, {}", city, country))
    }
}

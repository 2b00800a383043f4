use crate::utils::error::Result;

/// Capability interface shared by the subject and its proxy.
pub trait Person: Send + Sync {
    fn introduce(&self, name: &str) -> Result<()>;
    fn say_age(&self, age: u32) -> Result<()>;
    fn say_where_from(&self, city: &str, country: &str) -> Result<()>;
}

/// Line-oriented output sink.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;
}

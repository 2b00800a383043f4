pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{MemoryConsole, StdoutConsole};
pub use crate::core::{
    demo::{demo_subject, run_demo},
    invocation::{Call, Method},
    proxy::PersonProxy,
    subject::Man,
};
pub use crate::domain::{
    model::PersonProfile,
    ports::{Console, Person},
};
pub use crate::utils::error::{ProxyError, Result};

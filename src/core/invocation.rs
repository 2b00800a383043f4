//! Name-based dispatch onto the [`Person`] capability set.
//!
//! A [`Call`] is a method identifier plus typed arguments, decoded from JSON
//! values. Anything outside the capability set is rejected here, before a
//! proxy records or forwards anything.

use crate::domain::ports::Person;
use crate::utils::error::{ProxyError, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Introduce,
    SayAge,
    SayWhereFrom,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Introduce, Method::SayAge, Method::SayWhereFrom];

    /// Stable identifier used in observation records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Introduce => "introduce",
            Method::SayAge => "sayAge",
            Method::SayWhereFrom => "sayWhereFrom",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Method::Introduce | Method::SayAge => 1,
            Method::SayWhereFrom => 2,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ProxyError::UnsupportedOperation {
                operation: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Introduce { name: String },
    SayAge { age: u32 },
    SayWhereFrom { city: String, country: String },
}

impl Call {
    pub fn parse(operation: &str, args: &[Value]) -> Result<Self> {
        let method: Method = operation.parse()?;

        if args.len() != method.arity() {
            return Err(ProxyError::invalid_arguments(
                method.as_str(),
                format!("expected {} argument(s), got {}", method.arity(), args.len()),
            ));
        }

        let call = match method {
            Method::Introduce => Call::Introduce {
                name: string_arg(method, args, 0)?,
            },
            Method::SayAge => Call::SayAge {
                age: u32_arg(method, args, 0)?,
            },
            Method::SayWhereFrom => Call::SayWhereFrom {
                city: string_arg(method, args, 0)?,
                country: string_arg(method, args, 1)?,
            },
        };
        Ok(call)
    }

    pub fn method(&self) -> Method {
        match self {
            Call::Introduce { .. } => Method::Introduce,
            Call::SayAge { .. } => Method::SayAge,
            Call::SayWhereFrom { .. } => Method::SayWhereFrom,
        }
    }

    pub fn apply(&self, person: &dyn Person) -> Result<()> {
        match self {
            Call::Introduce { name } => person.introduce(name),
            Call::SayAge { age } => person.say_age(*age),
            Call::SayWhereFrom { city, country } => person.say_where_from(city, country),
        }
    }
}

fn string_arg(method: Method, args: &[Value], index: usize) -> Result<String> {
    args[index]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ProxyError::invalid_arguments(
                method.as_str(),
                format!("argument {} must be a string, got {}", index, args[index]),
            )
        })
}

fn u32_arg(method: Method, args: &[Value], index: usize) -> Result<u32> {
    args[index]
        .as_u64()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| {
            ProxyError::invalid_arguments(
                method.as_str(),
                format!(
                    "argument {} must be an unsigned 32-bit integer, got {}",
                    index, args[index]
                ),
            )
        })
}

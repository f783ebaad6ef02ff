//! Command handlers for the receipt-processor CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod points;
mod schema;
mod serve;

use serde::Serialize;
use std::fmt::Debug;
use tracing::info;

pub use points::points;
pub use schema::schema;
pub use serve::serve;

/// The output type for a command. This allows each command to return a consistent message and,
/// optionally, structured data that is printed for the user.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as pretty JSON to
    /// stdout, so that it can be piped into other tools.
    pub fn print(&self) -> crate::Result<()> {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            println!("{}", serde_json::to_string_pretty(structure)?);
        }
        Ok(())
    }
}

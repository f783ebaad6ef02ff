pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod points;
pub mod server;
pub mod store;


pub use config::Config;
pub use error::Error;
pub use error::Result;

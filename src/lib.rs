pub mod api;
pub mod config;
pub mod contract;
pub mod error;
pub mod scenario;

pub use error::{Error, Result};

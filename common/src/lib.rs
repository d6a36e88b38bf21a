pub mod config;
pub mod error;
pub mod utils;

pub use error::{FloristError, Result};

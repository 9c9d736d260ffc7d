pub mod config;
pub mod error;
pub mod lang;

pub use config::Config;
pub use error::RoastError;

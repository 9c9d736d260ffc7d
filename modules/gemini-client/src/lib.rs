pub mod error;

mod client;
mod types;

pub use client::{GeminiClient, DEFAULT_MODEL};
pub use error::{GeminiError, Result};

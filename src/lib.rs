pub mod config;
pub mod error;
pub mod form;
pub mod generation;
pub mod llm;
pub mod resolver;
pub mod server;

pub use error::{Error, Result};

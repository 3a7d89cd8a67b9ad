pub mod config;
pub mod dispatch;
pub mod error;
pub mod llm;
pub mod numeric;
pub mod server;

pub use error::{Error, Result};

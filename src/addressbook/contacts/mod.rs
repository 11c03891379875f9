pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod store;

pub use error::{ExportError, Result};

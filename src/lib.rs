pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod release;
pub mod ui;

pub use error::{RelverError, Result};
pub use release::ReleaseStatus;

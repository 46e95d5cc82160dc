#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod json;
pub mod log;
pub mod memory;
pub mod settings;

mod error;

pub use error::Error;

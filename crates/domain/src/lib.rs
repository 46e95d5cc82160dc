#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod exercise;
mod load;
mod muscle;
mod personal_record;
mod program;
mod recommendation;
mod settings;
mod templates;
mod user;
mod workout;

pub use catalog::*;
pub use error::*;
pub use exercise::*;
pub use load::*;
pub use muscle::*;
pub use personal_record::*;
pub use program::*;
pub use recommendation::*;
pub use settings::*;
pub use user::*;
pub use workout::*;

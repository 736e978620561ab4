#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod active;
mod catalog;
mod clock;
mod composer;
mod error;
mod history;
mod id;
mod name;
mod program;
pub mod seed;
mod service;
mod statistics;
mod workout;

pub use active::*;
pub use catalog::*;
pub use clock::*;
pub use composer::*;
pub use error::*;
pub use history::*;
pub use id::*;
pub use name::*;
pub use program::*;
pub use service::*;
pub use statistics::*;
pub use workout::*;

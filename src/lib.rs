extern crate derivative;
extern crate serde_derive;

#[macro_use]
extern crate log;

pub mod compiler;
pub mod configuration;
pub mod error;
pub mod journal;
pub mod time;
pub mod util;

pub use crate::error::{Error, Result};

#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
// Unused results is more often than not an error
#![deny(unused_must_use)]
#![cfg_attr(not(debug_assertions), deny(unused_extern_crates))]
#[macro_use]
extern crate log;
#[macro_use]
extern crate park_logging;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

pub mod config;
mod error;
pub mod models;
pub mod validators;

pub use error::ParkError;
pub use models::*;

pub type ParkResult<T> = Result<T, ParkError>;

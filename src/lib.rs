//! stepwise: render tutorial chapters and track the variables readers supply.
//!
//! The core is the render dispatcher ([`render`]) and the variable protocol:
//! [`control::VariableControl`] turns commits into events, and
//! [`model::set_value`] applies them to entries. [`session::ChapterSession`]
//! ties the two together for one loaded chapter.

pub mod cli;
pub mod config;
pub mod control;
pub mod document;
pub mod error;
pub mod interpolate;
pub mod logging;
pub mod model;
pub mod render;
pub mod session;

pub use error::{Error, Result};

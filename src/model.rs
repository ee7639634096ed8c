//! Core data model for stepwise.
//!
//! A chapter is an ordered list of entries, each one step of a tutorial.
//! Variable entries let the reader supply values that flow into other
//! entries through the variable events defined here.

mod chapter;
mod entry;
mod event;
mod store;

pub use chapter::Chapter;
pub use entry::{Entry, EntryKind};
pub use event::{VariableChange, VariableEvent, VariableInitialised, VariableUpdated};
pub use store::set_value;

//! Ports standing in for the document the front end is mounted in.
//!
//! Handlers never touch a concrete page: they read inputs through
//! [`FormSource`], write results through [`ResultSink`] and report failures
//! through [`Notifier`]. Any type implementing all three (and shareable across
//! tasks) is a [`Page`].

pub mod memory;
pub mod terminal;

use crate::models::page::{ContainerId, FieldId};
use crate::models::response::Rendering;

pub use memory::MemoryPage;
pub use terminal::TerminalPage;

pub trait FormSource {
    /// Current value of an input. Missing inputs read as the empty string.
    fn field_value(&self, field: FieldId) -> String;
}

pub trait ResultSink {
    /// Replaces the whole content of `container`.
    fn replace_content(&self, container: ContainerId, rendering: Rendering);
}

pub trait Notifier {
    fn alert(&self, message: &str);
}

pub trait Page: FormSource + ResultSink + Notifier + Send + Sync {}

impl<T> Page for T where T: FormSource + ResultSink + Notifier + Send + Sync {}

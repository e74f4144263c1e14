//! countryinfo-client - front end for the countryinfo web service
//!
//! This library reads lookup forms, validates them, calls the
//! `/countryinfo/v1` endpoints and renders the raw JSON answers into result
//! containers of an abstract page.

pub mod cli;
pub mod config;
pub mod models;
pub mod page;
pub mod services;

pub use models::page::{ContainerId, FieldId, TriggerId};
pub use page::{MemoryPage, Page, TerminalPage};
pub use services::adapter::{bind, AdapterError, Dispatcher, FormAdapter};
pub use services::lookup::Lookup;
pub use services::transport::{HttpTransport, RequestError, Transport};

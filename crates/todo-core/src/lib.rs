//! Core types and trait definitions for the TODO service.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! (`todo-store-sqlite`) and the HTTP layer (`todo-api`) both depend on it.

pub mod error;
pub mod store;
pub mod todo;

pub use error::{Error, Result};
pub use store::{Page, TodoStore};
pub use todo::{Todo, TodoId};

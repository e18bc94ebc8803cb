//! Core types and trait definitions for the skyatlas object database.
//!
//! This crate is deliberately free of HTTP and database dependencies. It holds
//! the catalog taxonomy, the static cross-reference tables, the name index and
//! the derivation rules applied to every object before it is stored.

pub mod catalog;
pub mod constellation;
pub mod error;
pub mod identifiers;
pub mod names;
pub mod object;
pub mod record;
pub mod store;
pub mod xref;

pub use error::{Error, Result};

//! Grocery purchase records and their flat-file representation.
//!
//! ## Core Types
//!
//! - [`Record`] — One row of the dataset: an id and its attribute vector
//! - [`RecordError`] — Everything that can go wrong reading or writing rows
//!
//! ## Files
//!
//! - [`load`] / [`read`] — Parse a headered CSV into records
//! - [`export`] / [`write`] — Write records back out as a headered CSV
mod error;
mod export;
mod loader;
mod record;

pub use error::*;
pub use export::*;
pub use loader::*;
pub use record::*;

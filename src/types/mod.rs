//! Type definitions module.
//!
//! Tool inputs double as the payloads forwarded to the exchange, so the wire
//! names here are the exchange's camelCase names.

pub mod account;
pub mod order;
pub mod query;
pub mod validate;

pub use account::*;
pub use order::*;
pub use query::*;

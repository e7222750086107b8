//! Request handlers, grouped by surface.

pub mod collect;
pub mod health;
pub mod query;

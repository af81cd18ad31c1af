//! Browser glue utilities.

pub mod cookies;

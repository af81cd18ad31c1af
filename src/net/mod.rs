//! Network boundary: wire types and the HTTP calls against the users API.

pub mod api;
pub mod types;

// HTTP API: fort catalogue endpoints and shared response types

pub mod common;
pub mod forts;

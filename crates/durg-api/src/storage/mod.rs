// Storage layer: in-memory document store and password hashing

mod memory;
pub mod models;
pub mod password;

pub use memory::Database;

// Durg client: typed API access and client-side session handling

pub mod api;
pub mod reader;
pub mod session;
pub mod store;

pub use api::{ApiClient, ApiError};
pub use reader::{ClientSession, SessionReader};
pub use session::Session;
pub use store::{SessionAccessor, SessionStore};

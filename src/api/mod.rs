mod auth;
pub mod client;
pub mod error;
pub mod types;
mod violations;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::*;

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::EnvironmentClient;
pub use error::ClientError;
pub use types::ApiResponse;

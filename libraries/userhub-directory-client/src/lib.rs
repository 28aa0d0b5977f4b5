//! Userhub Directory Client
//!
//! HTTP client library for the directory service API.
//!
//! # Features
//!
//! - **Users**: create, list, fetch, update and delete user records
//! - **Bounded calls**: every request carries the configured timeout
//! - **Typed failures**: not-found, unreachable and malformed responses are
//!   distinct error variants
//!
//! # Example
//!
//! ```ignore
//! use userhub_directory_client::{ClientConfig, DirectoryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectoryClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     let user = client.get_user(&"1".into()).await?;
//!     println!("{} <{}>", user.name, user.email);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::DirectoryClient;
pub use error::{DirectoryClientError, Result};
pub use types::{ClientConfig, HealthResponse, DEFAULT_TIMEOUT};

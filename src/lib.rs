//! # AgentBay Rust SDK
//!
//! Rust client for the AgentBay service: trigger context synchronization for a
//! remote session, poll the sync tasks it spawns, and report one aggregate
//! result either to an awaiting caller or through a callback.
//!
//! ## Features
//!
//! - **context** (default) - `ContextManager` with the HTTP transport
//! - **full** - Enables all features
//!
//! ## Example
//!
//! ```rust,no_run
//! use agentbay_sdk::agentbay_context::{ClientConfig, ContextManager, SyncRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let manager = ContextManager::connect(&config, "session-id")?;
//!
//!     let outcome = manager
//!         .sync(SyncRequest::for_context("context-id", "/home/wuying/data"))
//!         .await?;
//!     println!("synced: {}", outcome.success);
//!     Ok(())
//! }
//! ```

// Re-export core protocol types (always available)
pub use agentbay::*;

// Re-export optional components based on features
#[cfg(feature = "context")]
pub use agentbay_context;

// Re-export commonly used dependencies for convenience
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tokio;
pub use tracing;

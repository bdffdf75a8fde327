//! # CR Test Utilities
//!
//! Shared test utilities for the classroom (CR) service.
//!
//! This crate provides:
//! - Server test harness (`TestCrServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cr_test_utils::TestCrServer;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestCrServer::spawn().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(format!("{}/health", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

// Re-export commonly used items
pub use server_harness::*;

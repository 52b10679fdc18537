//! Device Registry Test Utils
//!
//! Provides shared testing utilities for the device registry. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and factories for
//! seeding stored records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting documents with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_record_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_document_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

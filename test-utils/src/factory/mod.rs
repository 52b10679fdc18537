//! Factory methods for creating test data.
//!
//! Each factory inserts rows directly through SeaORM with sensible defaults so tests can
//! arrange store state without going through the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let device = factory::create_device(&db).await?;
//! let account = factory::document::DocumentFactory::new(&db, "account")
//!     .field("username", "alice")
//!     .build()
//!     .await?;
//! ```

pub mod document;
pub mod helpers;

pub use document::{create_account, create_device};

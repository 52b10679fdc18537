//! Database repository layer.
//!
//! Repositories hold a database connection and perform all queries, inserts, updates and
//! deletes. They use SeaORM entity models internally and return domain models so the
//! service layer never sees storage details.

pub mod document;

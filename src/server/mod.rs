//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, record
//! services, data access and infrastructure. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and envelope rendering
//! - **Service Layer** (`service/`) - Query normalization and result classification
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, collections and operation parameters
//! - **Error Layer** (`error/`) - Application error types, reporting and HTTP response mapping
//! - **Utilities** (`util/`) - Identifier parsing and query normalization
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, error reporter)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts path, query and body, calls service
//! 3. **Service** normalizes input, calls the repository and builds the envelope
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts records to DTOs and mirrors the envelope status
//! 6. Failures returned as errors go to the **ErrorReporter**

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

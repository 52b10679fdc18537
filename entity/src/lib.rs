//! SeaORM entities for the device registry database.

pub mod prelude;

pub mod document;

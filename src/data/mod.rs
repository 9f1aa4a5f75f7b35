//! Database repository layer.
//!
//! Repositories wrap SeaORM queries and convert entity models into domain models at
//! the boundary, so services never handle string-encoded snowflakes.

pub mod antinuke;

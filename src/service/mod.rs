//! Business logic layer.

pub mod antinuke;

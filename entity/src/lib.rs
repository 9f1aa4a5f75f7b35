//! SeaORM entity models for the anti-nuke tables.

pub mod prelude;

pub mod antinuke_action;
pub mod antinuke_offense;
pub mod antinuke_settings;
pub mod antinuke_whitelist;

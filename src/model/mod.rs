//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that
//! SeaORM structures never leak into the service layer or the bot handlers. Discord
//! snowflakes are persisted as strings and surface here as `u64`.

pub mod antinuke;

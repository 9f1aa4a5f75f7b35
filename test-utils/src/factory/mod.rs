//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting anti-nuke rows with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Guild with anti-nuke turned on, default threshold and window
//!     let settings = factory::create_enabled_settings(&db).await?;
//!
//!     // Customized
//!     let settings = factory::settings::AntinukeSettingsFactory::new(&db)
//!         .enabled(true)
//!         .threshold(3)
//!         .time_window(60)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `settings` - Per-guild anti-nuke settings rows
//! - `action` - Action log records
//! - `whitelist` - Whitelisted users and roles
//! - `offense` - Offense ledger rows
//! - `helpers` - Unique id generation

pub mod action;
pub mod helpers;
pub mod offense;
pub mod settings;
pub mod whitelist;

pub use action::create_action;
pub use offense::create_offense;
pub use settings::{create_enabled_settings, create_settings};
pub use whitelist::{create_whitelisted_role, create_whitelisted_user};

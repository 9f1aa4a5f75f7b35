//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, so code that converts gateway and REST payloads
//! can be tested without a live connection.
//!
//! # Available Factories
//!
//! - `audit_log::create_test_audit_log_entry` - Create Serenity AuditLogEntry objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod audit_log;
pub mod member;
pub mod role;

pub use audit_log::create_test_audit_log_entry;
pub use member::create_test_member;
pub use role::create_test_role;

//! Testing infrastructure for Glotter.
//!
//! Fixtures build temporary source trees (language directories,
//! `testinfo.yml` files, `.glotter.yml` settings) so discovery and settings
//! loading can be exercised against real directories. [`CapturedLogs`]
//! records what was logged while a test ran. Test-only.

pub mod fixtures;
pub mod logs;

pub use fixtures::*;
pub use logs::CapturedLogs;

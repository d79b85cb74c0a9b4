//! OAK Console library exports.
//!
//! Headless client layer for the Open Agent Kit daemon: everything a
//! dashboard front end needs short of rendering. Network access goes
//! through [`api_client::ApiClient`]; all decision logic (validation,
//! draft editing, action gating) is synchronous and testable without a
//! daemon.

pub mod api_client;
pub mod config;
pub mod error;
pub mod exclusions;
pub mod form;
pub mod notifications;
pub mod runs;
pub mod tasks;

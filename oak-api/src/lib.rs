//! OAK API - Wire Contract
//!
//! Request/response types for the Open Agent Kit daemon's JSON-over-HTTP
//! API, the mapping between console field names and wire field names, and
//! the structured error envelope the daemon returns on failure. The daemon
//! itself lives elsewhere; this crate only describes the boundary.

pub mod error;
pub mod fields;
pub mod types;

pub use error::{ApiError, ApiResult, ErrorCode};
pub use fields::{ui_name, wire_name, FIELD_MAP};
pub use types::*;

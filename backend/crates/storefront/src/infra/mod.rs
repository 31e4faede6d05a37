//! Infrastructure Layer
//!
//! Catalog file access and the signed session cookie codec.

pub mod json_file;
pub mod session_cookie;

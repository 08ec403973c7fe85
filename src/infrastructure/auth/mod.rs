//! Authentication infrastructure module
//!
//! This module provides HS256 token issuance and validation.

mod authority;
mod header;

pub use authority::{TokenAuthority, TokenCodec};
pub use header::check_signing_method;

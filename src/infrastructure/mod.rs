//! Infrastructure layer - Signing and logging

pub mod auth;
pub mod logging;

//! HTTP handlers, one module per endpoint.

pub mod engine_template;
pub mod health;
pub mod root;

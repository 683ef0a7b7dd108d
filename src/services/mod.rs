//! Service layer: archive assembly lives here, behind the HTTP handlers.

pub mod template_service;

pub use template_service::{GeneratedArchive, TemplateService};

//! Request model for template generation.
//!
//! `EngineTemplateRequest` is the wire shape; `validate` turns it into the
//! normalized `TemplateParams` record the assembler works from. Validation
//! short-circuits before any filesystem access happens.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::templates::Framework;

#[derive(Debug, Clone, Deserialize)]
pub struct EngineTemplateRequest {
    pub engine_name: String,
    pub version: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_include_examples")]
    pub include_examples: bool,
    pub framework: String,
}

fn default_include_examples() -> bool {
    true
}

/// Normalized parameters: description defaulted, framework resolved.
#[derive(Debug, Clone)]
pub struct TemplateParams {
    pub engine_name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub include_examples: bool,
    /// Verbatim framework value from the request, echoed into metadata.json.
    pub framework_label: String,
    pub framework: Framework,
}

impl EngineTemplateRequest {
    pub fn validate(self) -> Result<TemplateParams, ValidationError> {
        let engine_name = non_empty("engine_name", self.engine_name)?;
        let version = non_empty("version", self.version)?;
        let author = non_empty("author", self.author)?;
        let framework_label = non_empty("framework", self.framework)?;

        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Game engine template for {engine_name}"));
        let framework = Framework::resolve(&framework_label);

        Ok(TemplateParams {
            engine_name,
            version,
            author,
            description,
            include_examples: self.include_examples,
            framework_label,
            framework,
        })
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError { field })
    } else {
        Ok(value)
    }
}

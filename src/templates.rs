//! Template content functions.
//!
//! Everything in this module is a pure `(params) -> content` function; the
//! resolved entry set is a deterministic function of the request plus the
//! creation timestamp the caller supplies. No I/O happens here, so the
//! archive layout is testable without touching the filesystem.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::model::TemplateParams;

/// Target framework for the generated source stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Unity,
    Unreal,
    Custom,
}

impl Framework {
    /// Case-insensitive resolution; unrecognized values get the custom stub.
    pub fn resolve(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "unity" => Framework::Unity,
            "unreal" => Framework::Unreal,
            _ => Framework::Custom,
        }
    }

    pub fn stub_path(&self) -> &'static str {
        match self {
            Framework::Unity => "src/UnityIntegration.cs",
            Framework::Unreal => "src/UnrealIntegration.cpp",
            Framework::Custom => "src/Engine.cpp",
        }
    }

    pub fn stub_contents(&self) -> &'static str {
        match self {
            Framework::Unity => {
                "// Unity-based game engine starter\n// This is a placeholder for your Unity integration code"
            }
            Framework::Unreal => {
                "// Unreal-based game engine starter\n// This is a placeholder for your Unreal Engine integration code"
            }
            Framework::Custom => {
                "// Custom game engine starter\n// This is a placeholder for your custom engine code"
            }
        }
    }
}

/// One resolved entry of the archive: a file with contents, or an empty
/// directory marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveEntry {
    File { path: String, contents: String },
    Directory { path: String },
}

const EXAMPLE_GAME: &str = "// Example game implementation\n\
// This is a placeholder for a simple game using this engine\n";

const EXAMPLE_ASSET: &str = "This is a placeholder for game assets.";

/// Resolve the full entry set for one request.
pub fn archive_entries(params: &TemplateParams, created_at: DateTime<Utc>) -> Vec<ArchiveEntry> {
    let mut entries = vec![
        file("metadata.json", metadata_json(params, created_at)),
        file("README.md", readme_md(params)),
        file("config.json", config_json(params)),
        directory("src"),
        directory("assets"),
        directory("docs"),
        file(
            params.framework.stub_path(),
            params.framework.stub_contents().to_string(),
        ),
    ];

    if params.include_examples {
        entries.push(file("examples/SimpleGame.cpp", EXAMPLE_GAME.to_string()));
        entries.push(file(
            "examples/assets/placeholder.txt",
            EXAMPLE_ASSET.to_string(),
        ));
    }

    entries
}

pub fn metadata_json(params: &TemplateParams, created_at: DateTime<Utc>) -> String {
    let metadata = json!({
        "name": params.engine_name,
        "version": params.version,
        "author": params.author,
        "description": params.description,
        "framework": params.framework_label,
        "created_at": created_at.to_rfc3339(),
        "include_examples": params.include_examples,
    });
    serde_json::to_string_pretty(&metadata).expect("metadata is valid JSON")
}

pub fn readme_md(params: &TemplateParams) -> String {
    format!(
        "# {name} Game Engine\n\
         \n\
         {description}\n\
         \n\
         ## Overview\n\
         \n\
         This is a game engine template for {name} version {version}.\n\
         \n\
         ## Installation\n\
         \n\
         Follow the instructions in the documentation to install this game engine.\n\
         \n\
         ## Author\n\
         \n\
         {author}\n",
        name = params.engine_name,
        description = params.description,
        version = params.version,
        author = params.author,
    )
}

pub fn config_json(params: &TemplateParams) -> String {
    let config = json!({
        "engine": {
            "name": params.engine_name,
            "version": params.version,
        },
        "settings": {
            "defaultFPS": 60,
            "physics": {
                "enabled": true,
                "gravity": 9.8,
            },
            "rendering": {
                "defaultResolution": "1080p",
                "shadows": true,
                "antialiasing": true,
            },
        },
    });
    serde_json::to_string_pretty(&config).expect("config is valid JSON")
}

fn file(path: &str, contents: String) -> ArchiveEntry {
    ArchiveEntry::File {
        path: path.to_string(),
        contents,
    }
}

fn directory(path: &str) -> ArchiveEntry {
    ArchiveEntry::Directory {
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params(framework: &str, include_examples: bool) -> TemplateParams {
        TemplateParams {
            engine_name: "demo".into(),
            version: "1.0.0".into(),
            author: "A".into(),
            description: "Game engine template for demo".into(),
            include_examples,
            framework_label: framework.into(),
            framework: Framework::resolve(framework),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn framework_resolution_is_case_insensitive() {
        assert_eq!(Framework::resolve("unity"), Framework::Unity);
        assert_eq!(Framework::resolve("UNITY"), Framework::Unity);
        assert_eq!(Framework::resolve("Unreal"), Framework::Unreal);
        assert_eq!(Framework::resolve("godot"), Framework::Custom);
        assert_eq!(Framework::resolve("pytorch"), Framework::Custom);
    }

    #[test]
    fn entry_set_without_examples_has_seven_entries() {
        let entries = archive_entries(&params("unity", false), stamp());
        assert_eq!(entries.len(), 7);
        let paths: Vec<&str> = entries
            .iter()
            .map(|e| match e {
                ArchiveEntry::File { path, .. } => path.as_str(),
                ArchiveEntry::Directory { path } => path.as_str(),
            })
            .collect();
        assert!(paths.contains(&"src/UnityIntegration.cs"));
        assert!(!paths.iter().any(|p| p.starts_with("examples")));
    }

    #[test]
    fn entry_set_with_examples_has_nine_entries() {
        let entries = archive_entries(&params("Unreal", true), stamp());
        assert_eq!(entries.len(), 9);
        let paths: Vec<&str> = entries
            .iter()
            .map(|e| match e {
                ArchiveEntry::File { path, .. } => path.as_str(),
                ArchiveEntry::Directory { path } => path.as_str(),
            })
            .collect();
        assert!(paths.contains(&"src/UnrealIntegration.cpp"));
        assert!(paths.contains(&"examples/SimpleGame.cpp"));
        assert!(paths.contains(&"examples/assets/placeholder.txt"));
    }

    #[test]
    fn metadata_embeds_creation_timestamp_and_framework_label() {
        let rendered = metadata_json(&params("Godot4", true), stamp());
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["created_at"], stamp().to_rfc3339());
        assert_eq!(value["framework"], "Godot4");
        assert_eq!(value["name"], "demo");
        assert_eq!(value["include_examples"], true);
    }

    #[test]
    fn config_carries_fixed_default_settings() {
        let value: serde_json::Value =
            serde_json::from_str(&config_json(&params("unity", true))).unwrap();
        assert_eq!(value["settings"]["defaultFPS"], 60);
        assert_eq!(value["settings"]["physics"]["enabled"], true);
        assert_eq!(value["settings"]["physics"]["gravity"], 9.8);
        assert_eq!(value["settings"]["rendering"]["defaultResolution"], "1080p");
        assert_eq!(value["engine"]["name"], "demo");
    }

    #[test]
    fn identical_inputs_yield_identical_entries() {
        // Content is a pure function of params + timestamp: same inputs,
        // byte-identical entry sets.
        let a = archive_entries(&params("unity", true), stamp());
        let b = archive_entries(&params("unity", true), stamp());
        assert_eq!(a, b);
    }

    #[test]
    fn only_metadata_varies_with_timestamp() {
        let earlier = archive_entries(&params("unity", true), stamp());
        let later = archive_entries(
            &params("unity", true),
            stamp() + chrono::Duration::seconds(30),
        );
        for (a, b) in earlier.iter().zip(later.iter()) {
            match (a, b) {
                (
                    ArchiveEntry::File { path, contents },
                    ArchiveEntry::File {
                        path: other_path,
                        contents: other_contents,
                    },
                ) => {
                    assert_eq!(path, other_path);
                    if path == "metadata.json" {
                        assert_ne!(contents, other_contents);
                    } else {
                        assert_eq!(contents, other_contents);
                    }
                }
                _ => assert_eq!(a, b),
            }
        }
    }

    #[test]
    fn readme_interpolates_all_fields() {
        let rendered = readme_md(&params("unity", true));
        assert!(rendered.starts_with("# demo Game Engine"));
        assert!(rendered.contains("Game engine template for demo"));
        assert!(rendered.contains("version 1.0.0"));
        assert!(rendered.contains("## Author\n\nA\n"));
    }
}

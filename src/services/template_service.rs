//! Template assembler.
//!
//! Turns normalized request parameters into a compressed archive staged in a
//! request-private scratch directory. The archive write is plain blocking
//! filesystem I/O, so it runs on the blocking thread pool rather than on the
//! async workers.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::TempDir;
use tracing::{error, info};
use zip::{result::ZipError, write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::error::TemplateGenerationError;
use crate::model::TemplateParams;
use crate::templates::{archive_entries, ArchiveEntry};

/// A generated archive plus ownership of the scratch directory it lives in.
/// Dropping the handle removes the scratch directory, archive included.
#[derive(Debug)]
pub struct GeneratedArchive {
    pub path: PathBuf,
    _scratch: TempDir,
}

#[derive(Debug, Clone)]
pub struct TemplateService {
    scratch_root: PathBuf,
}

impl TemplateService {
    pub fn new() -> Self {
        Self {
            scratch_root: std::env::temp_dir(),
        }
    }

    /// Stage scratch directories under `root` instead of the OS temp
    /// directory. Tests use this to observe cleanup.
    pub fn with_scratch_root(root: impl Into<PathBuf>) -> Self {
        Self {
            scratch_root: root.into(),
        }
    }

    /// Assemble the template archive for one request.
    ///
    /// Single attempt; any failure removes the scratch directory and
    /// propagates the cause. No resource here is shared between requests.
    pub async fn create_engine_template(
        &self,
        params: &TemplateParams,
    ) -> Result<GeneratedArchive, TemplateGenerationError> {
        info!(
            "Creating engine template for '{}' using {}",
            params.engine_name, params.framework_label
        );

        let params = params.clone();
        let scratch_root = self.scratch_root.clone();
        let result = tokio::task::spawn_blocking(move || assemble(&scratch_root, &params))
            .await
            .map_err(TemplateGenerationError::Task)?;

        match &result {
            Ok(archive) => info!("Engine template created at {}", archive.path.display()),
            Err(e) => error!("Error creating engine template: {e}"),
        }
        result
    }
}

impl Default for TemplateService {
    fn default() -> Self {
        Self::new()
    }
}

fn assemble(
    scratch_root: &Path,
    params: &TemplateParams,
) -> Result<GeneratedArchive, TemplateGenerationError> {
    // On any failure below the TempDir drops here, removing the scratch
    // directory before the error propagates.
    let scratch = TempDir::new_in(scratch_root).map_err(TemplateGenerationError::Scratch)?;
    let zip_path = scratch
        .path()
        .join(format!("{}-template.zip", params.engine_name));

    write_archive(&zip_path, &archive_entries(params, Utc::now()))?;

    Ok(GeneratedArchive {
        path: zip_path,
        _scratch: scratch,
    })
}

fn write_archive(
    zip_path: &Path,
    entries: &[ArchiveEntry],
) -> Result<(), TemplateGenerationError> {
    let file = File::create(zip_path).map_err(|e| TemplateGenerationError::CreateArchive {
        path: zip_path.to_path_buf(),
        source: e,
    })?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        match entry {
            ArchiveEntry::Directory { path } => {
                zip.add_directory(path.as_str(), options).map_err(|e| {
                    TemplateGenerationError::WriteEntry {
                        entry: path.clone(),
                        source: e,
                    }
                })?;
            }
            ArchiveEntry::File { path, contents } => {
                zip.start_file(path.as_str(), options).map_err(|e| {
                    TemplateGenerationError::WriteEntry {
                        entry: path.clone(),
                        source: e,
                    }
                })?;
                zip.write_all(contents.as_bytes()).map_err(|e| {
                    TemplateGenerationError::WriteEntry {
                        entry: path.clone(),
                        source: ZipError::from(e),
                    }
                })?;
            }
        }
    }

    zip.finish().map_err(TemplateGenerationError::Finish)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EngineTemplateRequest;

    fn params(engine_name: &str) -> TemplateParams {
        EngineTemplateRequest {
            engine_name: engine_name.into(),
            version: "1.0.0".into(),
            author: "A".into(),
            description: None,
            include_examples: true,
            framework: "unity".into(),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn writes_archive_into_scratch_directory() {
        let root = tempfile::tempdir().unwrap();
        let service = TemplateService::with_scratch_root(root.path());

        let archive = service.create_engine_template(&params("demo")).await.unwrap();
        assert!(archive.path.is_file());
        assert!(archive.path.ends_with("demo-template.zip"));
        assert!(archive.path.starts_with(root.path()));
    }

    #[tokio::test]
    async fn dropping_the_archive_removes_the_scratch_directory() {
        let root = tempfile::tempdir().unwrap();
        let service = TemplateService::with_scratch_root(root.path());

        let archive = service.create_engine_template(&params("demo")).await.unwrap();
        let path = archive.path.clone();
        drop(archive);

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_assembly_cleans_up_the_scratch_directory() {
        let root = tempfile::tempdir().unwrap();
        let service = TemplateService::with_scratch_root(root.path());

        // A path separator in the engine name points the archive at a
        // directory that does not exist inside the scratch dir, so the
        // create fails mid-assembly.
        let err = service
            .create_engine_template(&params("nested/demo"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateGenerationError::CreateArchive { .. }
        ));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }
}

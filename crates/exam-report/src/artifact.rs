//! Naming and saving the exported document.

use std::io::Write;
use std::path::{Path, PathBuf};

use exam_model::ExamMetadata;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{AssemblyError, Result};

/// MIME type of the exported document.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// File name of the exported document: `{subject}_{grade}_{term}.docx`.
///
/// Spaces become underscores and path separators are dropped.
pub fn export_file_name(metadata: &ExamMetadata) -> String {
    let stem = format!(
        "{}_{}_{}",
        metadata.subject.trim(),
        metadata.grade.label(),
        metadata.term.label()
    );
    let stem: String = stem
        .chars()
        .filter(|ch| !matches!(ch, '/' | '\\'))
        .map(|ch| if ch.is_whitespace() { '_' } else { ch })
        .collect();
    format!("{stem}.docx")
}

/// Writes `bytes` to `dir/name` atomically.
///
/// The content goes to a temporary file in `dir` which is then renamed over
/// the destination. The temporary file is removed if any step fails.
pub fn save_artifact(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(AssemblyError::InvalidFileName(name.to_string()));
    }
    let path = dir.join(name);
    let save_error = |operation: &'static str, source: std::io::Error| AssemblyError::Save {
        operation,
        path: path.clone(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| save_error("create", e))?;
    temp.write_all(bytes).map_err(|e| save_error("write", e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| save_error("sync", e))?;
    temp.persist(&path)
        .map_err(|e| save_error("rename", e.error))?;

    info!(path = %path.display(), bytes = bytes.len(), "saved exam document");
    Ok(path)
}

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use wikidump_model::naming::doc_filename;
use wikidump_model::{FetchError, RunSummary};

/// Create the output directory (and parents). Succeeds if it already exists.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))
}

/// Write one article's text to `{output_dir}/doc_{index:03}_{topic}.txt`.
///
/// Existing files are overwritten. If the write fails partway, the partial
/// file is removed so a failed topic never leaves output behind.
pub fn write_article(
    output_dir: &Path,
    index: usize,
    topic: &str,
    content: &str,
) -> Result<PathBuf, FetchError> {
    let path = output_dir.join(doc_filename(index, topic));

    match write_file(&path, content) {
        Ok(()) => {
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote article");
            Ok(path)
        }
        Err(e) => {
            let _ = fs::remove_file(&path);
            tracing::warn!(path = %path.display(), error = %e, "Article write failed");
            Err(FetchError::Write {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Write the run summary as pretty JSON.
pub fn write_report(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = summary.to_json()?;
    fs::write(path, &json).with_context(|| format!("Failed to write report {}", path.display()))?;
    tracing::info!(path = %path.display(), total = summary.total, "Wrote run report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("docs_es");
        ensure_output_dir(&dir).unwrap();
        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_write_article_exact_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_article(temp.path(), 0, "Perú", "Texto.").unwrap();
        assert_eq!(path, temp.path().join("doc_000_Perú.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Texto.");
    }

    #[test]
    fn test_write_article_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        write_article(temp.path(), 3, "Química", "primera versión, más larga").unwrap();
        let path = write_article(temp.path(), 3, "Química", "segunda").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "segunda");
    }

    #[test]
    fn test_write_article_into_missing_dir_fails() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope");
        let err = write_article(&missing, 0, "A", "x").unwrap_err();
        assert!(matches!(err, FetchError::Write { .. }));
        assert!(!missing.join("doc_000_A.txt").exists());
    }

    #[test]
    fn test_write_report() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("reports/run.json");
        let mut summary = RunSummary::new("es");
        summary.total = 2;
        summary.succeeded = 2;
        write_report(&summary, &path).unwrap();
        let loaded: RunSummary = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(loaded, summary);
    }
}

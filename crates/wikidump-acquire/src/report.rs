use std::io::{self, Write};
use wikidump_model::{FetchResult, RunSummary};

/// Print the progress line for one processed topic.
pub fn progress(out: &mut impl Write, topic: &str, result: &FetchResult) -> io::Result<()> {
    match result {
        FetchResult::Success(path) => writeln!(out, "[✓] Saved: {}", path.display()),
        FetchResult::Failure(err) => writeln!(out, "[✗] Failed: {topic} -> {err}"),
    }
}

/// Print the closing summary. The failed-topic list is only shown when non-empty.
pub fn summary(out: &mut impl Write, summary: &RunSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- SUMMARY ---")?;
    writeln!(out, "Generated successfully: {}", summary.succeeded)?;
    writeln!(out, "Failed: {}", summary.failure_count())?;
    if !summary.failed.is_empty() {
        writeln!(out, "Failed topics: {:?}", summary.failed)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wikidump_model::FetchError;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_progress_lines() {
        let ok = FetchResult::Success(PathBuf::from("docs_es/doc_000_Perú.txt"));
        assert_eq!(
            render(|out| progress(out, "Perú", &ok)),
            "[✓] Saved: docs_es/doc_000_Perú.txt\n"
        );

        let failed = FetchResult::Failure(FetchError::PageNotFound("TemaInexistente".into()));
        assert_eq!(
            render(|out| progress(out, "TemaInexistente", &failed)),
            "[✗] Failed: TemaInexistente -> page not found: TemaInexistente\n"
        );
    }

    #[test]
    fn test_summary_without_failures() {
        let mut s = RunSummary::new("es");
        s.total = 1;
        s.succeeded = 1;
        let text = render(|out| summary(out, &s));
        assert_eq!(text, "\n--- SUMMARY ---\nGenerated successfully: 1\nFailed: 0\n");
    }

    #[test]
    fn test_summary_lists_failed_topics() {
        let mut s = RunSummary::new("es");
        s.total = 3;
        s.succeeded = 1;
        s.failed = vec!["B".into(), "C++".into()];
        let text = render(|out| summary(out, &s));
        assert!(text.contains("Failed: 2\n"));
        assert!(text.ends_with("Failed topics: [\"B\", \"C++\"]\n"));
    }
}

use crate::output;
use crate::report;
use crate::source::ArticleSource;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use wikidump_model::{FetchResult, RunSummary};

/// Fetch every topic in order and dump each article to its own file.
///
/// A failed lookup or write is reported on `out` and recorded in the summary;
/// it never stops the run. Only setup problems (the output directory cannot be
/// created) or a broken `out` stream return an error.
pub async fn run<S: ArticleSource>(
    source: &S,
    topics: &[String],
    output_dir: &Path,
    out: &mut impl Write,
) -> Result<RunSummary> {
    output::ensure_output_dir(output_dir)?;
    tracing::info!(
        lang = source.language(),
        topics = topics.len(),
        output_dir = %output_dir.display(),
        "Starting dump"
    );

    let mut summary = RunSummary::new(source.language());

    for (index, topic) in topics.iter().enumerate() {
        let result = match source.content(topic).await {
            Ok(content) => match output::write_article(output_dir, index, topic, &content) {
                Ok(path) => FetchResult::Success(path),
                Err(e) => FetchResult::Failure(e),
            },
            Err(e) => {
                tracing::debug!(topic = %topic, error = %e, "Fetch failed");
                FetchResult::Failure(e)
            }
        };

        report::progress(out, topic, &result)?;
        summary.record(topic, result);
    }

    report::summary(out, &summary)?;
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failure_count(),
        "Dump finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use wikidump_model::FetchError;

    /// Serves canned articles and remembers the order of lookups.
    struct CannedSource {
        articles: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedSource {
        fn new(articles: &[(&str, &str)]) -> Self {
            Self {
                articles: articles
                    .iter()
                    .map(|(t, c)| (t.to_string(), c.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl ArticleSource for CannedSource {
        fn set_language(&mut self, _code: &str) -> Result<()> {
            Ok(())
        }

        fn language(&self) -> &str {
            "es"
        }

        async fn content(&self, title: &str) -> Result<String, FetchError> {
            self.calls.lock().unwrap().push(title.to_string());
            self.articles
                .get(title)
                .cloned()
                .ok_or_else(|| FetchError::PageNotFound(title.to_string()))
        }
    }

    fn topics(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_topics_are_fetched_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let source = CannedSource::new(&[("A", "a"), ("C", "c")]);
        let list = topics(&["A", "B", "C"]);
        let mut out = Vec::new();

        run(&source, &list, temp.path(), &mut out).await.unwrap();

        assert_eq!(*source.calls.lock().unwrap(), list);
    }

    #[tokio::test]
    async fn test_every_topic_is_written_or_failed() {
        let temp = tempfile::tempdir().unwrap();
        let source = CannedSource::new(&[("Uno", "1"), ("Tres", "3"), ("Cinco", "5")]);
        let list = topics(&["Uno", "Dos", "Tres", "Cuatro", "Cinco"]);
        let mut out = Vec::new();

        let summary = run(&source, &list, temp.path(), &mut out).await.unwrap();

        assert_eq!(summary.total, list.len());
        assert_eq!(summary.succeeded + summary.failure_count(), list.len());
        for (index, topic) in list.iter().enumerate() {
            let written = temp
                .path()
                .join(wikidump_model::naming::doc_filename(index, topic))
                .exists();
            let failed = summary.failed.contains(topic);
            assert!(written != failed, "{topic}: written={written} failed={failed}");
        }
    }

    #[tokio::test]
    async fn test_write_failure_counts_as_failed_topic() {
        let temp = tempfile::tempdir().unwrap();
        // A directory squatting on the target name makes the file create fail.
        let blocked = temp.path().join("doc_000_Bloqueado.txt");
        std::fs::create_dir(&blocked).unwrap();
        let source = CannedSource::new(&[("Bloqueado", "x"), ("Libre", "y")]);
        let mut out = Vec::new();

        let summary = run(&source, &topics(&["Bloqueado", "Libre"]), temp.path(), &mut out)
            .await
            .unwrap();

        assert_eq!(summary.failed, vec!["Bloqueado".to_string()]);
        assert_eq!(summary.succeeded, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[✗] Failed: Bloqueado -> could not write"));
    }

    #[tokio::test]
    async fn test_empty_topic_list() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("docs_es");
        let source = CannedSource::new(&[]);
        let mut out = Vec::new();

        let summary = run(&source, &[], &dir, &mut out).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(summary.total, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n--- SUMMARY ---\nGenerated successfully: 0\nFailed: 0\n"
        );
    }
}

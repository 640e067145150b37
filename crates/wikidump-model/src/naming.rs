/// Build the output file name for the topic at `index`.
///
/// Spaces become underscores; so do path separators, which would otherwise
/// point outside the output directory. The index prefix keeps names unique
/// even when two topics sanitize to the same text.
pub fn doc_filename(index: usize, topic: &str) -> String {
    let slug: String = topic
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("doc_{index:03}_{slug}.txt")
}

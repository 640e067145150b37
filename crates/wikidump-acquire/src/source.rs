use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use wikidump_model::FetchError;

/// MediaWiki Action API endpoint; `{lang}` is replaced by the language code.
pub const DEFAULT_API_URL: &str = "https://{lang}.wikipedia.org/w/api.php";

pub const DEFAULT_USER_AGENT: &str = "wikidump/0.1 (encyclopedia article dumper)";

/// A remote encyclopedia that can return an article's plain text by title.
pub trait ArticleSource {
    /// Select the language edition. Called once before any lookup.
    fn set_language(&mut self, code: &str) -> Result<()>;

    fn language(&self) -> &str;

    /// Fetch the full text content of the article titled `title`.
    fn content(&self, title: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Connection settings for [`WikipediaSource`].
#[derive(Debug, Clone)]
pub struct SourceOptions {
    pub api_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    /// Resolve titles through the search API before fetching.
    pub auto_suggest: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            auto_suggest: false,
        }
    }
}

/// Wikipedia (or any MediaWiki site) accessed through the Action API's
/// `prop=extracts` plain-text output.
#[derive(Debug, Clone)]
pub struct WikipediaSource {
    client: reqwest::Client,
    api_url: String,
    language: String,
    auto_suggest: bool,
}

impl WikipediaSource {
    pub fn new(language: &str, options: SourceOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        let mut source = Self {
            client,
            api_url: options.api_url,
            language: String::new(),
            auto_suggest: options.auto_suggest,
        };
        source.set_language(language)?;
        Ok(source)
    }

    /// API endpoint for the configured language.
    pub fn endpoint(&self) -> String {
        self.api_url.replace("{lang}", &self.language)
    }

    async fn query(&self, title: &str, params: &[(&str, &str)]) -> Result<QueryBody, FetchError> {
        let url = self.endpoint();
        tracing::debug!(url = %url, title, "Querying MediaWiki API");

        let response = self
            .client
            .get(&url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                title: title.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let parsed: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        if let Some(err) = parsed.error {
            return Err(FetchError::MalformedResponse(format!("{}: {}", err.code, err.info)));
        }
        parsed
            .query
            .ok_or_else(|| FetchError::MalformedResponse("response has no query body".into()))
    }

    /// Pick the title the search API considers the best match: its spelling
    /// suggestion if it has one, otherwise the top hit.
    async fn suggest_title(&self, title: &str) -> Result<String, FetchError> {
        let query = self
            .query(
                title,
                &[
                    ("list", "search"),
                    ("srsearch", title),
                    ("srlimit", "1"),
                    ("srinfo", "suggestion"),
                    ("srprop", ""),
                ],
            )
            .await?;

        let suggestion = query
            .searchinfo
            .and_then(|info| info.suggestion)
            .filter(|s| !s.is_empty());
        suggestion
            .or_else(|| query.search.into_iter().next().map(|hit| hit.title))
            .ok_or_else(|| FetchError::PageNotFound(title.to_string()))
    }

    async fn fetch_extract(&self, title: &str) -> Result<String, FetchError> {
        let query = self
            .query(
                title,
                &[
                    ("prop", "extracts|pageprops"),
                    ("explaintext", "1"),
                    ("redirects", "1"),
                    ("titles", title),
                ],
            )
            .await?;

        let page = query
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::PageNotFound(title.to_string()))?;

        if page.missing || page.invalid {
            return Err(FetchError::PageNotFound(title.to_string()));
        }
        if page.pageprops.contains_key("disambiguation") {
            return Err(FetchError::Disambiguation(title.to_string()));
        }

        page.extract.ok_or_else(|| {
            FetchError::MalformedResponse(format!("no extract returned for \"{title}\""))
        })
    }
}

impl ArticleSource for WikipediaSource {
    fn set_language(&mut self, code: &str) -> Result<()> {
        let pattern = Regex::new(r"^[a-z][a-z0-9-]{1,15}$").expect("valid regex");
        let code = code.trim().to_lowercase();
        anyhow::ensure!(pattern.is_match(&code), "Invalid language code: '{code}'");
        tracing::info!(lang = %code, "Language set");
        self.language = code;
        Ok(())
    }

    fn language(&self) -> &str {
        &self.language
    }

    async fn content(&self, title: &str) -> Result<String, FetchError> {
        let resolved = if self.auto_suggest {
            let suggested = self.suggest_title(title).await?;
            if suggested != title {
                tracing::debug!(requested = title, resolved = %suggested, "Title resolved by search");
            }
            suggested
        } else {
            title.to_string()
        };

        let text = self.fetch_extract(&resolved).await?;
        tracing::debug!(title = %resolved, bytes = text.len(), "Received article");
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    query: Option<QueryBody>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Default, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<Page>,
    #[serde(default)]
    search: Vec<SearchHit>,
    #[serde(default)]
    searchinfo: Option<SearchInfo>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    pageprops: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SearchInfo {
    #[serde(default)]
    suggestion: Option<String>,
}

//! Data sources for the gallery payload.
//!
//! A source produces the parsed JSON document; validation of its contents
//! happens later in [`crate::model`]. The HTTP source is the production
//! path; [`FileSource`] serves local use and tests through the same
//! contract.

use serde_json::Value;

use crate::{Error, Result};

/// Produces one fresh copy of the project payload per call.
///
/// Implementations must not cache across calls: each `fetch` observes the
/// source's current state.
pub trait ProjectSource {
    fn fetch(&self) -> Result<Value>;

    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
}

/// HTTP(S) GET source with a cache-defeating query parameter.
#[cfg(feature = "http")]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    data_url: String,
    user_agent: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Builds a source for the given URL.
    ///
    /// The client keeps its transport defaults; no extra timeout is
    /// configured on top of them.
    pub fn new(data_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            data_url: data_url.to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Appends `v=<unix-millis>` so repeated fetches defeat intermediate
    /// caches and observe fresh data.
    fn cache_busted_url(&self) -> Result<url::Url> {
        let mut parsed = url::Url::parse(&self.data_url)
            .map_err(|e| Error::ConfigError(format!("Invalid data URL {}: {}", self.data_url, e)))?;
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        parsed
            .query_pairs_mut()
            .append_pair("v", &stamp.to_string());
        Ok(parsed)
    }
}

#[cfg(feature = "http")]
impl ProjectSource for HttpSource {
    fn fetch(&self) -> Result<Value> {
        let url = self.cache_busted_url()?;
        let res = self
            .client
            .get(url.clone())
            .header("User-Agent", self.user_agent.clone())
            .header("Cache-Control", "no-store")
            .send()
            .map_err(|e| Error::FetchError(format!("HTTP GET {} failed: {}", url, e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!(
                "HTTP GET {} returned status {}",
                url, status
            )));
        }

        let body = res
            .text()
            .map_err(|e| Error::FetchError(format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(&body)
            .map_err(|e| Error::DecodeError(format!("Response was not valid JSON: {}", e)))
    }

    fn describe(&self) -> String {
        self.data_url.clone()
    }
}

/// Local JSON file source.
pub struct FileSource {
    path: std::path::PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectSource for FileSource {
    fn fetch(&self) -> Result<Value> {
        let body = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::FetchError(format!("Failed to read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&body)
            .map_err(|e| Error::DecodeError(format!("{} was not valid JSON: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "http")]
    #[test]
    fn test_cache_busting_appends_version_param() {
        let source = HttpSource::new("http://example.com/data/projects.json", "test-agent")
            .expect("source should build");
        let url = source.cache_busted_url().expect("valid URL");
        assert!(url.as_str().starts_with("http://example.com/data/projects.json?v="));

        // An existing query string is kept, not clobbered
        let source = HttpSource::new("http://example.com/p.json?tag=art", "test-agent")
            .expect("source should build");
        let url = source.cache_busted_url().expect("valid URL");
        assert!(url.as_str().contains("tag=art&v="));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_invalid_url_is_config_error() {
        let source = HttpSource::new("not a url", "test-agent").expect("client still builds");
        assert!(matches!(
            source.cache_busted_url(),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/projects.json");
        assert!(matches!(source.fetch(), Err(Error::FetchError(_))));
    }
}

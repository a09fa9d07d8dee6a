use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::ArticleQuery;

const DEFAULT_DEVTO_API_URL: &str = "https://dev.to/api";
const DEFAULT_DEVTO_USERNAME: &str = "dallington256";
const DEFAULT_ARTICLES_PER_PAGE: u32 = 6;
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 900.0;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the DEV.to API (no trailing slash needed)
    pub devto_api_url: String,
    /// Account whose articles are listed
    pub devto_username: String,
    /// Page-size limit embedded in the request
    pub articles_per_page: u32,
    /// Upper bound for the single article request
    pub fetch_timeout: Duration,
    /// Height of the simulated viewport, in CSS pixels
    pub viewport_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            devto_api_url: DEFAULT_DEVTO_API_URL.to_string(),
            devto_username: DEFAULT_DEVTO_USERNAME.to_string(),
            articles_per_page: DEFAULT_ARTICLES_PER_PAGE,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            devto_api_url: env::var("FOLIO_DEVTO_API_URL").unwrap_or(defaults.devto_api_url),
            devto_username: env::var("FOLIO_DEVTO_USERNAME").unwrap_or(defaults.devto_username),
            articles_per_page: parse_var(
                "FOLIO_ARTICLES_PER_PAGE",
                defaults.articles_per_page,
                |n| *n > 0,
            ),
            fetch_timeout: Duration::from_millis(parse_var(
                "FOLIO_FETCH_TIMEOUT_MS",
                DEFAULT_FETCH_TIMEOUT_MS,
                |ms| *ms > 0,
            )),
            viewport_height: parse_var(
                "FOLIO_VIEWPORT_HEIGHT",
                defaults.viewport_height,
                |h| h.is_finite() && *h > 0.0,
            ),
        }
    }

    /// The article query sent to the API
    pub fn article_query(&self) -> ArticleQuery {
        ArticleQuery::new(&self.devto_username, self.articles_per_page)
    }

    /// Public profile page, target of the "view more" link
    pub fn profile_url(&self) -> String {
        format!("https://dev.to/{}", self.devto_username)
    }
}

/// Read a variable, keeping `default` when it is unset, unparsable or
/// rejected by `valid`
fn parse_var<T, F>(name: &str, default: T, valid: F) -> T
where
    T: FromStr + Copy,
    F: Fn(&T) -> bool,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) if valid(&value) => value,
        _ => {
            tracing::warn!(var = name, value = %raw, "Invalid config value, using default");
            default
        }
    }
}

use anyhow::{Context, Result, ensure};
use party_planner_core::BASE_URL;
use std::{env, sync::OnceLock};

const DEFAULT_API_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
const DEFAULT_API_COHORT: &str = "/2508-FTB-ET-WEB-FT";

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Remote CRUD API location
    pub api: ApiConfig,

    /// Server configuration for the rendered UI
    pub ui: UiConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Cohort path segment, always starting with `/`
    pub cohort: String,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables. Subsequent
    /// calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. Call [`AppConfig::init`] at
    /// startup to surface the error instead.
    pub fn get() -> &'static Self {
        Self::cell().get_or_init(|| Self::load().expect("failed to load application configuration"))
    }

    /// Load and cache the configuration, reporting errors
    pub fn init() -> Result<&'static Self> {
        if let Some(config) = Self::cell().get() {
            return Ok(config);
        }
        let config = Self::load()?;
        Ok(Self::cell().get_or_init(|| config))
    }

    fn cell() -> &'static OnceLock<AppConfig> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        &APP_CONFIG
    }

    fn load() -> Result<Self> {
        let api = ApiConfig::load()?;
        let ui = UiConfig::load()?;

        Ok(Self { api, ui })
    }
}

impl ApiConfig {
    fn load() -> Result<Self> {
        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let cohort = env::var("API_COHORT").unwrap_or_else(|_| DEFAULT_API_COHORT.to_string());

        Self::new(&base_url, &cohort).context("failed to load API configuration")
    }

    /// Validate and normalize the API location
    pub fn new(base_url: &str, cohort: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        ensure!(
            base_url.starts_with("http://") || base_url.starts_with("https://"),
            "failed to parse API_BASE_URL: expected http(s) URL, got '{base_url}'"
        );

        let cohort = cohort.trim().trim_matches('/');
        ensure!(!cohort.is_empty(), "failed to parse API_COHORT: empty segment");
        ensure!(
            !cohort.contains('/'),
            "failed to parse API_COHORT: expected a single path segment, got '{cohort}'"
        );

        Ok(Self {
            base_url: base_url.to_string(),
            cohort: format!("/{cohort}"),
        })
    }

    /// Root of all resource paths: base URL plus cohort segment
    pub fn root(&self) -> String {
        format!("{}{}", self.base_url, self.cohort)
    }

    /// Map a core URL (dummy `https://relative` prefix) to the real API URL
    pub fn resolve(&self, url: &str) -> Result<String> {
        let path = url
            .strip_prefix(BASE_URL)
            .with_context(|| format!("failed to resolve url without {BASE_URL} prefix: {url}"))?;

        Ok(format!("{}{path}", self.root()))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            cohort: DEFAULT_API_COHORT.to_string(),
        }
    }
}

impl UiConfig {
    fn load() -> Result<Self> {
        let port = env::var("UI_PORT")
            .unwrap_or_else(|_| "1977".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;
        let bind_addr = env::var("UI_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());

        Ok(Self { bind_addr, port })
    }
}

use thiserror::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const PROJECTS_TABLE_VAR: &str = "PROJECTS_TABLE";
pub const GUESTBOOK_TABLE_VAR: &str = "GUESTBOOK_TABLE";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Connection details for the hosted table store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Project URL without a trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    pub anon_key: String,
    pub projects_table: String,
    pub guestbook_table: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let url = get(URL_VAR).ok_or(ConfigError::Missing(URL_VAR))?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                var: URL_VAR,
                value: url,
            });
        }
        let anon_key = get(KEY_VAR).ok_or(ConfigError::Missing(KEY_VAR))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            projects_table: get(PROJECTS_TABLE_VAR).unwrap_or_else(|| "projects".to_string()),
            guestbook_table: get(GUESTBOOK_TABLE_VAR).unwrap_or_else(|| "guestbook".to_string()),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

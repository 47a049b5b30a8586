use anyhow::{Context, Result};

/// Static application identity shown in the template and on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "il mio sito".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,

    // Server
    pub host: String,
    pub port: u16,

    // i18n
    /// Directory holding `{locale}.json` catalogs; embedded catalogs when unset
    pub messages_dir: Option<String>,
    /// Redirect `/` to the locale negotiated from `Accept-Language`
    pub locale_detection: bool,

    // Identity
    /// `token=email` pairs separated by `;`
    pub session_users: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => 8080,
        };

        Ok(Self {
            app: AppConfig {
                name: var("APP_NAME")
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| AppConfig::default().name),
            },

            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,

            messages_dir: var("MESSAGES_DIR").filter(|dir| !dir.trim().is_empty()),
            locale_detection: var("LOCALE_DETECTION")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            session_users: var("SESSION_USERS").filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            messages_dir: None,
            locale_detection: false,
            session_users: None,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

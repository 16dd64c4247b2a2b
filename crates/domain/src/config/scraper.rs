use serde::{Deserialize, Serialize};

/// Settings for the scripted interaction with the operator's web form.
///
/// The delays mirror the page's client-side behavior: a short pause after
/// typing so its validation settles, and a longer pause after submit while
/// the result panel loads over AJAX.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    /// Page hosting the eligibility form.
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Hard deadline for one full form interaction, in seconds.
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Pause after typing and after the consent click, in milliseconds.
    #[serde(default = "default_form_settle")]
    pub form_settle_ms: u64,

    /// Pause after submit while the result panel populates, in milliseconds.
    #[serde(default = "default_result_wait")]
    pub result_wait_ms: u64,

    /// Maximum concurrent browser page sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Explicit Chromium binary path. When unset, discovery is left to the
    /// browser launcher.
    #[serde(default)]
    pub browser_path: Option<String>,
}

fn default_target_url() -> String {
    "https://www.opt.nc/particuliers/telephonie-fixe/fibre-optique".to_string()
}

fn default_page_timeout() -> u64 {
    60
}

fn default_form_settle() -> u64 {
    1_000
}

fn default_result_wait() -> u64 {
    5_000
}

fn default_max_sessions() -> usize {
    4
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            page_timeout_secs: default_page_timeout(),
            form_settle_ms: default_form_settle(),
            result_wait_ms: default_result_wait(),
            max_sessions: default_max_sessions(),
            browser_path: None,
        }
    }
}

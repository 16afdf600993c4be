use crate::error::SpiderError;
use crate::global::remote_judge_constant::{base_url, names};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Session cookies handed between the caller and an adapter, keyed by cookie name.
pub type Cookies = HashMap<String, String>;

/// Judge-specific extra arguments (contest id, language hints, ...).
pub type Options = serde_json::Map<String, serde_json::Value>;

/// Remote language id -> display name, in the judge's own vocabulary.
pub type Languages = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub cookies: Cookies,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            cookies: Cookies::new(),
        }
    }

    pub fn with_cookies(mut self, cookies: Cookies) -> Self {
        self.cookies = cookies;
        self
    }
}

fn default_timeout() -> u64 {
    5
}

/// Connection settings forwarded verbatim to every adapter constructor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectOptions {
    /// Scheme ("http", "https" or "all") -> proxy url.
    #[serde(default)]
    pub proxies: HashMap<String, String>,
    /// Connect/read timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            proxies: HashMap::new(),
            timeout: default_timeout(),
        }
    }
}

impl ConnectOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// The closed set of remote judges this crate knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum JudgeName {
    Aizu,
    Hdu,
    Fzu,
    Poj,
    Wust,
    Zoj,
    Codeforces,
}

impl JudgeName {
    pub const ALL: [JudgeName; 7] = [
        JudgeName::Aizu,
        JudgeName::Hdu,
        JudgeName::Fzu,
        JudgeName::Poj,
        JudgeName::Wust,
        JudgeName::Zoj,
        JudgeName::Codeforces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JudgeName::Aizu => names::AIZU,
            JudgeName::Hdu => names::HDU,
            JudgeName::Fzu => names::FZU,
            JudgeName::Poj => names::POJ,
            JudgeName::Wust => names::WUST,
            JudgeName::Zoj => names::ZOJ,
            JudgeName::Codeforces => names::CODEFORCES,
        }
    }

    pub fn home_page_url(&self) -> &'static str {
        match self {
            JudgeName::Aizu => base_url::AIZU,
            JudgeName::Hdu => base_url::HDU,
            JudgeName::Fzu => base_url::FZU,
            JudgeName::Poj => base_url::POJ,
            JudgeName::Wust => base_url::WUST,
            JudgeName::Zoj => base_url::ZOJ,
            JudgeName::Codeforces => base_url::CODEFORCES,
        }
    }
}

impl fmt::Display for JudgeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JudgeName {
    type Err = SpiderError;

    // case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JudgeName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SpiderError::UnsupportedJudge(s.to_string()))
    }
}

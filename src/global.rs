use crate::error::{Result, SpiderError};
use crate::judger::{ConnectOptions, JudgeName};
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use simple_log::LogConfigBuilder;
use std::path::Path;
use std::time::Duration;

static SPIDER_CONFIG: OnceCell<SpiderConfig> = OnceCell::new();
static DEFAULT_SPIDER_CONFIG: Lazy<SpiderConfig> = Lazy::new(SpiderConfig::default);

fn default_submit_wait_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpiderConfig {
    #[serde(flatten)]
    pub connect: ConnectOptions,
    /// Pause between a successful submission and the first result poll.
    #[serde(default = "default_submit_wait_ms")]
    pub submit_wait_ms: u64,
    #[serde(default)]
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            connect: ConnectOptions::default(),
            submit_wait_ms: default_submit_wait_ms(),
            log_path: None,
            log_level: default_log_level(),
        }
    }
}

impl SpiderConfig {
    pub fn submit_wait(&self) -> Duration {
        Duration::from_millis(self.submit_wait_ms)
    }

    pub fn from_slice(path: &Path, data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|source| SpiderError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Loads the spider config from a JSON file and, when it names a log file,
/// starts the file logger.
pub async fn init_config(config_path: impl AsRef<Path>) -> Result<&'static SpiderConfig> {
    let path = config_path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| SpiderError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
    let config = SpiderConfig::from_slice(path, &data)?;

    if SPIDER_CONFIG.get().is_some() {
        return Err(SpiderError::ConfigAlreadySet);
    }

    if let Some(log_path) = config.log_path.as_deref() {
        init_logger(log_path, &config.log_level)?;
    }

    SPIDER_CONFIG
        .set(config)
        .map_err(|_| SpiderError::ConfigAlreadySet)?;
    Ok(spider_config())
}

pub fn init_logger(log_path: &str, level: &str) -> Result<()> {
    let log_config = LogConfigBuilder::builder()
        .path(log_path)
        .level(level)
        .output_file()
        .build();
    simple_log::new(log_config).map_err(SpiderError::Logger)
}

/// The loaded config, or the defaults when `init_config` was never called.
pub fn spider_config() -> &'static SpiderConfig {
    SPIDER_CONFIG.get().unwrap_or(&*DEFAULT_SPIDER_CONFIG)
}

/// Names of every judge the spider can address, in listing order.
pub fn supports() -> Vec<&'static str> {
    JudgeName::ALL.iter().map(JudgeName::as_str).collect()
}

pub fn is_support(remote_judge_name: &str) -> bool {
    remote_judge_name.parse::<JudgeName>().is_ok()
}

pub mod remote_judge_constant {
    pub mod names {
        pub const AIZU: &str = "Aizu";
        pub const HDU: &str = "HDU";
        pub const FZU: &str = "FZU";
        pub const POJ: &str = "POJ";
        pub const WUST: &str = "WUST";
        pub const ZOJ: &str = "ZOJ";
        pub const CODEFORCES: &str = "Codeforces";
    }
    pub mod base_url {
        pub const AIZU: &str = "https://onlinejudge.u-aizu.ac.jp/";
        pub const HDU: &str = "https://acm.hdu.edu.cn/";
        pub const FZU: &str = "http://acm.fzu.edu.cn/";
        pub const POJ: &str = "http://poj.org/";
        pub const WUST: &str = "http://acm.wust.edu.cn/";
        pub const ZOJ: &str = "https://zoj.pintia.cn/";
        pub const CODEFORCES: &str = "https://codeforces.com/";
    }
}

/// Raw verdict fragments per judge, matched as substrings of the status text.
pub mod judge_status_map {
    #[derive(Debug)]
    pub struct StatusTable {
        pub accepted: &'static [&'static str],
        pub running: &'static [&'static str],
        pub compile_error: &'static [&'static str],
    }

    pub static AIZU: StatusTable = StatusTable {
        accepted: &["Accepted"],
        running: &["Waiting", "Judging", "Running", "Compiling"],
        compile_error: &["Compile Error"],
    };

    pub static HDU: StatusTable = StatusTable {
        accepted: &["Accepted"],
        running: &["Queuing", "Pending", "Compiling", "Running"],
        compile_error: &["Compilation Error"],
    };

    pub static FZU: StatusTable = StatusTable {
        accepted: &["Accepted"],
        running: &["Queuing", "Compiling", "Judging", "Running"],
        compile_error: &["Compile Error"],
    };

    pub static POJ: StatusTable = StatusTable {
        accepted: &["Accepted"],
        running: &["Waiting", "Compiling", "Running & Judging"],
        compile_error: &["Compile Error"],
    };

    pub static WUST: StatusTable = StatusTable {
        accepted: &["Accepted"],
        running: &["Pending", "Waiting", "Compiling", "Running & Judging"],
        compile_error: &["Compile Error"],
    };

    pub static ZOJ: StatusTable = StatusTable {
        accepted: &["Accepted"],
        running: &["Queuing", "Compiling", "Running", "Judging"],
        compile_error: &["Compilation Error", "Compile Error"],
    };

    pub static CODEFORCES: StatusTable = StatusTable {
        accepted: &["Accepted", "Happy", "Pretests passed"],
        running: &["Running", "queue", "Pending", "Compiling"],
        compile_error: &["Compilation error"],
    };
}

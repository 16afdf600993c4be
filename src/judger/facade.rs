use super::provider::{JudgeResult, Problem, ProblemStatus, Provider};
use super::registry::{self, AdapterRegistry};
use super::utils::space_and_enter_strip;
use super::verdict;
use super::{Account, ConnectOptions, Cookies, Languages, Options};
use crate::global;
use simple_log::log::{info, warn};
use std::time::Duration;

const DEFAULT_SUBMIT_WAIT: Duration = Duration::from_secs(2);

/// Uniform entry point over one remote judge.
///
/// The adapter is chosen once, at construction. When no adapter can be built
/// every operation answers with its failure value (`None`, `false`, a
/// `OjNotExist` problem or a `SubmitFailed` result) instead of an error.
pub struct Core {
    remote_oj: String,
    oj: Option<Box<dyn Provider>>,
    submit_wait: Duration,
}

impl Core {
    /// Binds to `oj_name` through the process-wide registry.
    pub fn new(oj_name: &str, options: &ConnectOptions) -> Self {
        Self::with_registry(registry::global(), oj_name, options)
    }

    /// Binds using the loaded [`global::SpiderConfig`].
    pub fn from_config(oj_name: &str) -> Self {
        let config = global::spider_config();
        Self::new(oj_name, &config.connect).with_submit_wait(config.submit_wait())
    }

    pub fn with_registry(
        registry: &AdapterRegistry,
        oj_name: &str,
        options: &ConnectOptions,
    ) -> Self {
        let oj = registry.build(oj_name, options);
        if oj.is_none() {
            info!("{} bound without adapter", oj_name);
        }
        Self {
            remote_oj: oj_name.into(),
            oj,
            submit_wait: DEFAULT_SUBMIT_WAIT,
        }
    }

    pub fn from_provider(oj_name: &str, provider: Box<dyn Provider>) -> Self {
        Self {
            remote_oj: oj_name.into(),
            oj: Some(provider),
            submit_wait: DEFAULT_SUBMIT_WAIT,
        }
    }

    /// Pause between a successful submission and the result poll in
    /// [`Core::submit_code`].
    pub fn with_submit_wait(mut self, wait: Duration) -> Self {
        self.submit_wait = wait;
        self
    }

    pub fn submit_wait(&self) -> Duration {
        self.submit_wait
    }

    pub fn remote_oj(&self) -> &str {
        &self.remote_oj
    }

    pub fn has_adapter(&self) -> bool {
        self.oj.is_some()
    }

    pub fn get_supports() -> Vec<&'static str> {
        global::supports()
    }

    pub fn is_support(oj_name: &str) -> bool {
        global::is_support(oj_name)
    }

    pub fn get_home_page_url(&self) -> Option<String> {
        let oj = self.oj.as_deref()?;
        Some(oj.home_page_url().to_string())
    }

    pub fn get_cookies(&self) -> Option<Cookies> {
        let oj = self.oj.as_deref()?;
        Some(oj.get_cookies())
    }

    pub async fn get_problem(&self, pid: &str, account: &Account, options: &Options) -> Problem {
        let Some(oj) = self.oj.as_deref() else {
            return Problem::with_status(&self.remote_oj, pid, ProblemStatus::OjNotExist);
        };
        oj.set_cookies(&account.cookies);
        let mut problem = match oj.get_problem(pid, account, options).await {
            Ok(problem) => problem,
            Err(e) => {
                warn!("{} get_problem {} failed: {:#}", self.remote_oj, pid, e);
                return Problem::with_status(&self.remote_oj, pid, ProblemStatus::NetworkError);
            }
        };
        problem.title = space_and_enter_strip(problem.title.take());
        problem.time_limit = space_and_enter_strip(problem.time_limit.take());
        problem.memory_limit = space_and_enter_strip(problem.memory_limit.take());
        problem
    }

    /// Submits without polling. `true` when the judge took the submission.
    pub async fn submit(
        &self,
        pid: &str,
        account: &Account,
        code: &str,
        language: &str,
        options: &Options,
    ) -> bool {
        let Some(oj) = self.oj.as_deref() else {
            return false;
        };
        oj.set_cookies(&account.cookies);
        match oj.submit_code(account, code, language, pid, options).await {
            Ok(accepted) => {
                info!("{} submit {} as {}: {}", self.remote_oj, pid, account.username, accepted);
                accepted
            }
            Err(e) => {
                warn!("{} submit {} failed: {:#}", self.remote_oj, pid, e);
                false
            }
        }
    }

    /// Submits, waits the configured pause, then polls the result once.
    /// The poll may still report `Running`; polling again is up to the caller.
    pub async fn submit_code(
        &self,
        pid: &str,
        account: &Account,
        code: &str,
        language: &str,
        options: &Options,
    ) -> JudgeResult {
        if !self.submit(pid, account, code, language, options).await {
            return JudgeResult::submit_failed();
        }
        tokio::time::sleep(self.submit_wait).await;
        self.get_result(account, pid, options).await
    }

    pub async fn get_result(&self, account: &Account, pid: &str, options: &Options) -> JudgeResult {
        let Some(oj) = self.oj.as_deref() else {
            return JudgeResult::submit_failed();
        };
        oj.set_cookies(&account.cookies);
        let fetched = oj.get_result(account, pid, options).await;
        self.finish_result(oj, fetched, pid)
    }

    /// Looks a result up by submission id; the session cookies are not touched.
    pub async fn get_result_by_rid_and_pid(&self, rid: &str, pid: &str) -> JudgeResult {
        let Some(oj) = self.oj.as_deref() else {
            return JudgeResult::submit_failed();
        };
        let fetched = oj.get_result_by_rid_and_pid(rid, pid).await;
        self.finish_result(oj, fetched, pid)
    }

    fn finish_result(
        &self,
        oj: &dyn Provider,
        fetched: anyhow::Result<Option<JudgeResult>>,
        pid: &str,
    ) -> JudgeResult {
        match fetched {
            Ok(Some(result)) => verdict::normalize(oj, result),
            Ok(None) => JudgeResult::submit_failed(),
            Err(e) => {
                warn!("{} get_result {} failed: {:#}", self.remote_oj, pid, e);
                JudgeResult::submit_failed()
            }
        }
    }

    pub async fn find_language(&self, account: &Account, options: &Options) -> Option<Languages> {
        let oj = self.oj.as_deref()?;
        oj.set_cookies(&account.cookies);
        match oj.find_language(account, options).await {
            Ok(languages) => languages,
            Err(e) => {
                warn!("{} find_language failed: {:#}", self.remote_oj, e);
                None
            }
        }
    }

    /// Pending, queuing, compiling and the like; same as [`Core::is_running`].
    pub fn is_waiting_for_judge(&self, verdict: &str) -> Option<bool> {
        self.is_running(verdict)
    }

    pub async fn check_status(&self) -> Option<bool> {
        let oj = self.oj.as_deref()?;
        match oj.check_status().await {
            Ok(ok) => Some(ok),
            Err(e) => {
                warn!("{} unreachable: {:#}", self.remote_oj, e);
                Some(false)
            }
        }
    }

    pub fn is_accepted(&self, verdict: &str) -> Option<bool> {
        let oj = self.oj.as_deref()?;
        Some(oj.is_accepted(verdict))
    }

    pub fn is_running(&self, verdict: &str) -> Option<bool> {
        let oj = self.oj.as_deref()?;
        Some(oj.is_running(verdict))
    }

    pub fn is_compile_error(&self, verdict: &str) -> Option<bool> {
        let oj = self.oj.as_deref()?;
        Some(oj.is_compile_error(verdict))
    }

    /// Whether the spider account can log in to the judge.
    pub async fn is_account_valid(&self, account: Option<&Account>) -> bool {
        let (Some(oj), Some(account)) = (self.oj.as_deref(), account) else {
            return false;
        };
        match oj.login_website(account).await {
            Ok(ok) => ok,
            Err(e) => {
                warn!("{} login as {} failed: {:#}", self.remote_oj, account.username, e);
                false
            }
        }
    }
}

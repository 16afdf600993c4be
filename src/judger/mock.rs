//! Scriptable provider for tests. Records how the facade drives it.

use super::provider::{JudgeResult, Problem, ProblemStatus, Provider};
use super::{Account, Cookies, Languages, Options};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct Calls {
    pub set_cookies: AtomicUsize,
    pub login: AtomicUsize,
    pub submit_code: AtomicUsize,
    pub get_result: AtomicUsize,
    pub get_result_by_rid: AtomicUsize,
    pub cookies_seen: Mutex<Vec<Cookies>>,
}

impl Calls {
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub struct MockProvider {
    home_page: String,
    cookies: Mutex<Cookies>,
    accepted: Vec<String>,
    running: Vec<String>,
    compile_error: Vec<String>,
    login_ok: bool,
    submit_ok: bool,
    problem: Option<Problem>,
    result: Option<JudgeResult>,
    languages: Option<Languages>,
    reachable: bool,
    failing: bool,
    calls: Arc<Calls>,
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            home_page: "https://judge.example/".into(),
            cookies: Mutex::new(Cookies::new()),
            accepted: owned(&["Accepted"]),
            running: owned(&["Queuing", "Compiling", "Running", "Pending"]),
            compile_error: owned(&["Compilation Error"]),
            login_ok: true,
            submit_ok: true,
            problem: None,
            result: None,
            languages: None,
            reachable: true,
            failing: false,
            calls: Arc::new(Calls::default()),
        }
    }

    pub fn calls(&self) -> Arc<Calls> {
        self.calls.clone()
    }

    pub fn home_page(mut self, url: &str) -> Self {
        self.home_page = url.into();
        self
    }

    pub fn accepting(mut self, patterns: &[&str]) -> Self {
        self.accepted = owned(patterns);
        self
    }

    pub fn running(mut self, patterns: &[&str]) -> Self {
        self.running = owned(patterns);
        self
    }

    pub fn compile_errors(mut self, patterns: &[&str]) -> Self {
        self.compile_error = owned(patterns);
        self
    }

    pub fn login_ok(mut self, ok: bool) -> Self {
        self.login_ok = ok;
        self
    }

    pub fn submit_ok(mut self, ok: bool) -> Self {
        self.submit_ok = ok;
        self
    }

    pub fn problem(mut self, problem: Problem) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn result(mut self, result: Option<JudgeResult>) -> Self {
        self.result = result;
        self
    }

    pub fn languages(mut self, languages: Languages) -> Self {
        self.languages = Some(languages);
        self
    }

    pub fn reachable(mut self, reachable: bool) -> Self {
        self.reachable = reachable;
        self
    }

    /// Every async operation returns `Err`.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing {
            return Err(anyhow!("connection reset"));
        }
        Ok(())
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn home_page_url(&self) -> &str {
        &self.home_page
    }

    fn get_cookies(&self) -> Cookies {
        self.cookies.lock().unwrap().clone()
    }

    fn set_cookies(&self, cookies: &Cookies) {
        self.calls.set_cookies.fetch_add(1, Ordering::SeqCst);
        self.calls.cookies_seen.lock().unwrap().push(cookies.clone());
        *self.cookies.lock().unwrap() = cookies.clone();
    }

    async fn login_website(&self, _account: &Account) -> anyhow::Result<bool> {
        self.calls.login.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.login_ok)
    }

    async fn get_problem(
        &self,
        pid: &str,
        _account: &Account,
        _options: &Options,
    ) -> anyhow::Result<Problem> {
        self.check()?;
        Ok(self
            .problem
            .clone()
            .unwrap_or_else(|| Problem::with_status("Mock", pid, ProblemStatus::ProblemNotExist)))
    }

    async fn submit_code(
        &self,
        _account: &Account,
        _code: &str,
        _language: &str,
        _pid: &str,
        _options: &Options,
    ) -> anyhow::Result<bool> {
        self.calls.submit_code.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.submit_ok)
    }

    async fn get_result(
        &self,
        _account: &Account,
        _pid: &str,
        _options: &Options,
    ) -> anyhow::Result<Option<JudgeResult>> {
        self.calls.get_result.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.result.clone())
    }

    async fn get_result_by_rid_and_pid(
        &self,
        rid: &str,
        _pid: &str,
    ) -> anyhow::Result<Option<JudgeResult>> {
        self.calls.get_result_by_rid.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.result.clone().map(|mut r| {
            r.origin_run_id = Some(rid.to_string());
            r
        }))
    }

    async fn find_language(
        &self,
        _account: &Account,
        _options: &Options,
    ) -> anyhow::Result<Option<Languages>> {
        self.check()?;
        Ok(self.languages.clone())
    }

    async fn check_status(&self) -> anyhow::Result<bool> {
        self.check()?;
        Ok(self.reachable)
    }

    fn is_accepted(&self, verdict: &str) -> bool {
        self.accepted.iter().any(|p| p == verdict)
    }

    fn is_running(&self, verdict: &str) -> bool {
        self.running.iter().any(|p| p == verdict)
    }

    fn is_compile_error(&self, verdict: &str) -> bool {
        self.compile_error.iter().any(|p| p == verdict)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProblemStatus {
    #[default]
    Pending,
    CrawlingSuccess,
    NetworkError,
    ProblemNotExist,
    /// No adapter could be bound for the requested judge.
    OjNotExist,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Problem {
    pub remote_oj: String,
    pub remote_id: String,
    pub remote_url: Option<String>,
    pub title: Option<String>,
    pub time_limit: Option<String>,
    pub memory_limit: Option<String>,
    pub special_judge: Option<bool>,
    pub html: Option<String>,
    pub status: ProblemStatus,
}

impl Problem {
    pub fn with_status(remote_oj: &str, remote_id: &str, status: ProblemStatus) -> Self {
        Self {
            remote_oj: remote_oj.into(),
            remote_id: remote_id.into(),
            status,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum VerdictCode {
    Accepted,
    /// Queued, compiling, pending or running.
    Running,
    CompileError,
    /// The judge answered with a verdict none of the predicates recognise.
    ResultError,
    SubmitFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JudgeResult {
    pub origin_run_id: Option<String>,
    pub verdict: Option<String>,
    pub verdict_code: VerdictCode,
    pub execute_time: Option<String>,
    pub execute_memory: Option<String>,
}

impl JudgeResult {
    /// Raw result as an adapter reports it, before the facade classifies it.
    /// Carries `ResultError` until normalised.
    pub fn raw(verdict: impl Into<String>) -> Self {
        Self {
            origin_run_id: None,
            verdict: Some(verdict.into()),
            verdict_code: VerdictCode::ResultError,
            execute_time: None,
            execute_memory: None,
        }
    }

    pub fn submit_failed() -> Self {
        Self {
            origin_run_id: None,
            verdict: None,
            verdict_code: VerdictCode::SubmitFailed,
            execute_time: None,
            execute_memory: None,
        }
    }

    pub fn is_submit_failed(&self) -> bool {
        self.verdict_code == VerdictCode::SubmitFailed
    }
}

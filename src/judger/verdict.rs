use super::provider::{JudgeResult, Provider, VerdictCode};
use super::utils::space_and_enter_strip;
use super::JudgeName;
use crate::global::judge_status_map::{self, StatusTable};
use simple_log::log::debug;

/// Classifies a raw verdict with the adapter's own predicates.
///
/// Accepted is checked first, then running, then compile error, so a
/// verdict matched by several predicates lands in the earliest bucket.
pub fn classify<P: ?Sized + Provider>(provider: &P, verdict: &str) -> VerdictCode {
    if provider.is_accepted(verdict) {
        VerdictCode::Accepted
    } else if provider.is_running(verdict) {
        VerdictCode::Running
    } else if provider.is_compile_error(verdict) {
        VerdictCode::CompileError
    } else {
        VerdictCode::ResultError
    }
}

/// Assigns the verdict code and trims the execute time/memory fields.
pub fn normalize<P: ?Sized + Provider>(provider: &P, mut result: JudgeResult) -> JudgeResult {
    result.verdict_code = classify(provider, result.verdict.as_deref().unwrap_or_default());
    result.execute_time = space_and_enter_strip(result.execute_time.take());
    result.execute_memory = space_and_enter_strip(result.execute_memory.take());
    debug!("{:?} -> {:?}", result.verdict, result.verdict_code);
    result
}

/// Substring tables an adapter can delegate its three predicates to.
#[derive(Debug, Clone, Copy)]
pub struct VerdictVocabulary {
    table: &'static StatusTable,
}

impl VerdictVocabulary {
    pub fn of(name: JudgeName) -> Self {
        let table = match name {
            JudgeName::Aizu => &judge_status_map::AIZU,
            JudgeName::Hdu => &judge_status_map::HDU,
            JudgeName::Fzu => &judge_status_map::FZU,
            JudgeName::Poj => &judge_status_map::POJ,
            JudgeName::Wust => &judge_status_map::WUST,
            JudgeName::Zoj => &judge_status_map::ZOJ,
            JudgeName::Codeforces => &judge_status_map::CODEFORCES,
        };
        Self { table }
    }

    fn matches(patterns: &[&str], verdict: &str) -> bool {
        patterns.iter().any(|p| verdict.contains(p))
    }

    pub fn is_accepted(&self, verdict: &str) -> bool {
        Self::matches(self.table.accepted, verdict)
    }

    pub fn is_running(&self, verdict: &str) -> bool {
        Self::matches(self.table.running, verdict)
    }

    pub fn is_compile_error(&self, verdict: &str) -> bool {
        Self::matches(self.table.compile_error, verdict)
    }
}

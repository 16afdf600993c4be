use super::{JudgeResult, Problem};
use crate::judger::{Account, Cookies, Languages, Options};
use async_trait::async_trait;

/// What every site adapter has to offer the facade.
///
/// Errors are the adapter's own business: "no such problem" belongs in
/// [`Problem::status`] and "no result yet" is `Ok(None)`. Any `Err` that does
/// come back is logged by the facade and folded into its failure value.
#[async_trait]
pub trait Provider: Send + Sync {
    fn home_page_url(&self) -> &str;

    fn get_cookies(&self) -> Cookies;

    fn set_cookies(&self, cookies: &Cookies);

    /// Whether `account` can currently be used against the judge.
    async fn login_website(&self, account: &Account) -> anyhow::Result<bool>;

    async fn get_problem(
        &self,
        pid: &str,
        account: &Account,
        options: &Options,
    ) -> anyhow::Result<Problem>;

    /// `true` once the judge's submit endpoint took the code, not when it passed.
    async fn submit_code(
        &self,
        account: &Account,
        code: &str,
        language: &str,
        pid: &str,
        options: &Options,
    ) -> anyhow::Result<bool>;

    /// Latest result of a submission made in the current session.
    async fn get_result(
        &self,
        account: &Account,
        pid: &str,
        options: &Options,
    ) -> anyhow::Result<Option<JudgeResult>>;

    async fn get_result_by_rid_and_pid(
        &self,
        rid: &str,
        pid: &str,
    ) -> anyhow::Result<Option<JudgeResult>>;

    async fn find_language(
        &self,
        account: &Account,
        options: &Options,
    ) -> anyhow::Result<Option<Languages>>;

    async fn check_status(&self) -> anyhow::Result<bool>;

    fn is_accepted(&self, verdict: &str) -> bool;

    fn is_running(&self, verdict: &str) -> bool;

    fn is_compile_error(&self, verdict: &str) -> bool;
}

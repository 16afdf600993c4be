pub mod error;
pub mod global;
pub mod judger;

pub use error::SpiderError;
pub use judger::facade::Core;
pub use judger::provider::{JudgeResult, Problem, ProblemStatus, Provider, VerdictCode};
pub use judger::registry::AdapterRegistry;
pub use judger::{Account, ConnectOptions, Cookies, JudgeName, Languages, Options};

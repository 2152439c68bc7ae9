//! Review push: target construction, interactive selection and execution.

pub mod executor;
pub mod flow;
pub mod target;

pub use executor::{PushExecutor, PushOutcome};
pub use flow::{resolve_repository, PushFlow, PushPlan, PushRequest};
pub use target::{
    build_push_target, extract_repo_name, format_reviewers, normalize_reviewers, PushTarget,
};

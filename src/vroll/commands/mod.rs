use crate::model::{RollPlan, VersionDir};
use std::path::PathBuf;

pub mod plan;
pub mod roll;
pub mod scan;

pub const NO_VERSIONS_MESSAGE: &str = "Not in a valid versioning dir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// How a roll ended, when it did not return an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    Completed,
    /// No version directories were found; nothing was touched.
    Aborted,
}

/// What a completed roll did.
#[derive(Debug, Clone)]
pub struct RollReport {
    pub plan: RollPlan,
    pub archive_path: PathBuf,
    /// False when the new version was deliberately not created.
    pub seeded: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub versions: Vec<VersionDir>,
    pub plan: Option<RollPlan>,
    pub outcome: Option<RollOutcome>,
    pub report: Option<RollReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_versions(mut self, versions: Vec<VersionDir>) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_plan(mut self, plan: RollPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_outcome(mut self, outcome: RollOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_report(mut self, report: RollReport) -> Self {
        self.report = Some(report);
        self
    }

    /// The result for a root with no version directories.
    pub fn no_versions() -> Self {
        let mut res = CmdResult::default().with_outcome(RollOutcome::Aborted);
        res.add_message(CmdMessage::info(NO_VERSIONS_MESSAGE));
        res
    }
}

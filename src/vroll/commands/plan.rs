use crate::commands::{CmdMessage, CmdResult};
use crate::config::{RollConfig, SingleVersionPolicy};
use crate::error::{Result, RollError};
use crate::model::RollPlan;
use crate::store::VersionStore;

use super::scan;

/// Scans the root and resolves the next roll without touching anything.
///
/// Returns `Ok(None)` when there are no version directories. Fails if the
/// directory the roll would create is already taken.
pub fn resolve<S: VersionStore>(store: &S, config: &RollConfig) -> Result<Option<RollPlan>> {
    let set = scan::versions(store, config)?;
    let Some(plan) = RollPlan::from_set(&set, config.label_width)? else {
        return Ok(None);
    };

    if store.exists(&plan.next_name) {
        return Err(RollError::DestinationExists(
            store.root().join(&plan.next_name),
        ));
    }

    Ok(Some(plan))
}

/// Describes what a roll would do (`--dry-run`).
pub fn run<S: VersionStore>(store: &S, config: &RollConfig) -> Result<CmdResult> {
    let Some(plan) = resolve(store, config)? else {
        return Ok(CmdResult::no_versions());
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Would archive {} -> {}/{}",
        plan.lowest.name, config.archive_dir, plan.archive_name
    )));

    if plan.is_single() {
        describe_single(&mut result, &plan, config.single_version);
    } else {
        result.add_message(CmdMessage::info(format!("Would remove {}", plan.lowest.name)));
        result.add_message(CmdMessage::info(format!(
            "Would create {} from {}",
            plan.next_name, plan.highest.name
        )));
    }

    Ok(result.with_plan(plan))
}

fn describe_single(result: &mut CmdResult, plan: &RollPlan, policy: SingleVersionPolicy) {
    let name = &plan.lowest.name;
    match policy {
        SingleVersionPolicy::Sequential => {
            result.add_message(CmdMessage::info(format!("Would remove {}", name)));
            result.add_message(CmdMessage::warning(format!(
                "{} is the only version: it is removed before {} can be copied from it",
                name, plan.next_name
            )));
        }
        SingleVersionPolicy::CopyFirst => {
            result.add_message(CmdMessage::info(format!(
                "Would create {} from {}",
                plan.next_name, name
            )));
            result.add_message(CmdMessage::info(format!("Would remove {}", name)));
        }
        SingleVersionPolicy::SkipCopy => {
            result.add_message(CmdMessage::info(format!("Would remove {}", name)));
            result.add_message(CmdMessage::warning(format!(
                "{} is the only version: no new version would be created",
                name
            )));
        }
        SingleVersionPolicy::Refuse => {
            result.add_message(CmdMessage::warning(format!(
                "{} is the only version: the roll would be refused",
                name
            )));
        }
    }
}

use crate::commands::{CmdMessage, CmdResult, RollOutcome, RollReport};
use crate::config::{RollConfig, SingleVersionPolicy};
use crate::error::{Result, RollError};
use crate::model::RollPlan;
use crate::store::VersionStore;
use std::path::PathBuf;
use tracing::{info, warn};

use super::plan;

/// Performs one roll: archive the lowest version, remove it, and seed the
/// next version from the highest.
///
/// Nothing is mutated when the root holds no versions or the plan fails to
/// resolve. After that every step runs in order and stops at the first
/// failure; earlier steps are not undone. A failure after some steps have
/// completed is returned as [`RollError::Interrupted`], listing those steps.
pub fn run<S: VersionStore>(store: &mut S, config: &RollConfig) -> Result<CmdResult> {
    let Some(plan) = plan::resolve(store, config)? else {
        info!(root = %store.root().display(), "no version directories found");
        return Ok(CmdResult::no_versions());
    };

    if plan.is_single() && config.single_version == SingleVersionPolicy::Refuse {
        return Err(RollError::SingleVersion(plan.lowest.name.clone()));
    }

    let mut result = CmdResult::default();
    let (archive_path, seeded) = match perform(store, config, &plan, &mut result) {
        Ok(done) => done,
        Err(e) if result.messages.is_empty() => return Err(e),
        Err(e) => {
            return Err(RollError::Interrupted {
                completed: result.messages.into_iter().map(|m| m.content).collect(),
                source: Box::new(e),
            })
        }
    };

    Ok(result
        .with_outcome(RollOutcome::Completed)
        .with_report(RollReport {
            plan,
            archive_path,
            seeded,
        }))
}

/// Runs the mutating steps, recording each one in `result` as it completes.
fn perform<S: VersionStore>(
    store: &mut S,
    config: &RollConfig,
    plan: &RollPlan,
    result: &mut CmdResult,
) -> Result<(PathBuf, bool)> {
    // 1. Archive
    store.ensure_archive_store(&config.archive_dir)?;
    let archive_path =
        store.archive_version(&plan.lowest.name, &config.archive_dir, &plan.archive_name)?;
    info!(version = %plan.lowest.name, archive = %archive_path.display(), "archived");
    result.add_message(CmdMessage::success(format!(
        "Archived {} -> {}/{}",
        plan.lowest.name, config.archive_dir, plan.archive_name
    )));

    // 2. Retire and seed
    let seeded = match (plan.is_single(), config.single_version) {
        (true, SingleVersionPolicy::CopyFirst) => {
            seed(store, plan, result)?;
            retire(store, plan, result)?;
            true
        }
        (true, SingleVersionPolicy::SkipCopy) => {
            retire(store, plan, result)?;
            warn!(version = %plan.lowest.name, "only version retired, nothing seeded");
            result.add_message(CmdMessage::warning(format!(
                "{} was the only version; {} was not created",
                plan.lowest.name, plan.next_name
            )));
            false
        }
        (single, _) => {
            retire(store, plan, result)?;
            if single {
                warn!(
                    version = %plan.lowest.name,
                    "only version removed before seeding; copy source is gone"
                );
            }
            seed(store, plan, result)?;
            true
        }
    };

    Ok((archive_path, seeded))
}

fn retire<S: VersionStore>(store: &mut S, plan: &RollPlan, result: &mut CmdResult) -> Result<()> {
    store.remove_dir(&plan.lowest.name)?;
    info!(version = %plan.lowest.name, "removed");
    result.add_message(CmdMessage::success(format!("Removed {}", plan.lowest.name)));
    Ok(())
}

fn seed<S: VersionStore>(store: &mut S, plan: &RollPlan, result: &mut CmdResult) -> Result<()> {
    store.copy_dir(&plan.highest.name, &plan.next_name)?;
    info!(from = %plan.highest.name, to = %plan.next_name, "seeded");
    result.add_message(CmdMessage::success(format!(
        "Created {} from {}",
        plan.next_name, plan.highest.name
    )));
    Ok(())
}

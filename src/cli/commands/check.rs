use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::{DataWarningIssue, Issue},
    rules::{
        unreachable_ability::check_unreachable_abilities_issues,
        unreachable_unit::check_unreachable_units_issues,
        unreachable_upgrade::check_unreachable_upgrades_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Units,
    Upgrades,
    Abilities,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::Units, CheckRule::Upgrades, CheckRule::Abilities]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Units => {
                let issues = check_unreachable_units_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnreachableUnit));
            }
            CheckRule::Upgrades => {
                let issues = check_unreachable_upgrades_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnreachableUpgrade));
            }
            CheckRule::Abilities => {
                let issues = check_unreachable_abilities_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnreachableAbility));
            }
        }
    }

    all_issues.extend(ctx.load_warnings().map(|warning| {
        Issue::DataWarning(DataWarningIssue {
            file_path: warning.file_path.clone(),
            message: warning.message.clone(),
        })
    }));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.catalog().len(),
        ctx.script_file_count(),
        true,
    ))
}

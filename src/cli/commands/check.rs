use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{core::CheckContext, issues::Issue, rules::icon_button::check_icon_button_issues};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let mut all_issues: Vec<Issue> = check_icon_button_issues(&ctx)
        .into_iter()
        .map(Issue::IconButton)
        .collect();

    let parse_errors = ctx.parsed_files_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(CommandSummary::Check, all_issues, ctx.files.len()))
}

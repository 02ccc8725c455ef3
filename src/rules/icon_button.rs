//! Icon button label rule.
//!
//! Flags `<button>`/`<Button>` elements whose only content is an icon and
//! that carry no descriptive `aria-label`.

use crate::{
    core::{AllIconButtonIssues, CheckContext},
    issues::IconButtonIssue,
};

pub fn check_icon_button_issues(ctx: &CheckContext) -> Vec<IconButtonIssue> {
    check_icon_buttons(ctx.icon_button_issues())
}

/// Flatten per-file issues from the analysis phase.
///
/// Detection itself happens while each file is analyzed.
pub fn check_icon_buttons(issues: &AllIconButtonIssues) -> Vec<IconButtonIssue> {
    issues.values().flatten().cloned().collect()
}

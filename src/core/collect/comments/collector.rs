//! Suppression comment collector.
//!
//! Reads every comment swc captured for a file and turns ariabtn directives
//! into line-based `Suppressions`.
//!
//! # Consecutive Comment Handling
//!
//! `ariabtn-disable-next-line` applies to the next non-comment line, so a
//! directive may sit above other comments:
//!
//! ```tsx
//! {/* ariabtn-disable-next-line */}
//! {/* legacy toolbar, redesign pending */}
//! <button><CloseIcon /></button>  // <- suppressed
//! ```
//!
//! Blank lines break the chain: a directive followed by a blank line
//! suppresses nothing. A line with code and a trailing comment is not part
//! of the chain, so it is the line that gets suppressed.

use std::collections::HashSet;

use swc_common::{SourceMap, comments::Comment};

use crate::core::collect::comments::directive::Directive;
use crate::core::collect::comments::suppressions::{DisabledRange, Suppressions};
use crate::core::parsers::jsx::ExtractedComments;

/// Maximum number of consecutive comment lines to skip when looking for
/// the target code line.
pub const MAX_COMMENT_CHAIN_LINES: usize = 10;

pub struct CommentCollector;

impl CommentCollector {
    pub fn collect(comments: &ExtractedComments, source_map: &SourceMap) -> Suppressions {
        let mut suppressions = Suppressions::default();

        let mut comments_with_lines: Vec<_> = comments
            .iter()
            .map(|cmt| {
                let line = source_map.lookup_char_pos(cmt.span.lo).line;
                (line, cmt)
            })
            .collect();
        comments_with_lines.sort_by_key(|(line, cmt)| (*line, cmt.span.lo));

        // Only lines holding nothing but comments; a code line with a
        // trailing comment is still the target of a next-line directive.
        let comment_lines: HashSet<usize> = comments_with_lines
            .iter()
            .filter_map(|(_, cmt)| Self::standalone_lines(cmt, source_map))
            .flatten()
            .collect();

        let mut open_range: Option<usize> = None;

        for (line, cmt) in comments_with_lines {
            match Directive::parse(&cmt.text) {
                Some(Directive::Disable) => {
                    open_range.get_or_insert(line);
                }
                Some(Directive::Enable) => {
                    if let Some(start) = open_range.take() {
                        suppressions.disabled_ranges.push(DisabledRange {
                            start,
                            end: line.saturating_sub(1),
                        });
                    }
                }
                Some(Directive::DisableNextLine) => {
                    let target = Self::find_next_non_comment_line(line, &comment_lines);
                    suppressions.disabled_lines.insert(target);
                }
                None => {}
            }
        }

        // Unclosed ranges extend to end of file
        if let Some(start) = open_range {
            suppressions.disabled_ranges.push(DisabledRange {
                start,
                end: usize::MAX,
            });
        }

        suppressions
    }

    /// Lines spanned by a comment that has no code before or after it.
    ///
    /// JSX comments are wrapped in `{...}`, so a lone brace on either side
    /// does not count as code.
    fn standalone_lines(
        cmt: &Comment,
        source_map: &SourceMap,
    ) -> Option<std::ops::RangeInclusive<usize>> {
        let start = source_map.lookup_char_pos(cmt.span.lo);
        let end = source_map.lookup_char_pos(cmt.span.hi);

        let start_line = start.file.get_line(start.line - 1)?;
        let end_line = end.file.get_line(end.line - 1)?;

        let before: String = start_line.chars().take(start.col.0).collect();
        let after: String = end_line.chars().skip(end.col.0).collect();

        let before = before.trim();
        let after = after.trim();
        let only_comment = matches!(before, "" | "{") && matches!(after, "" | "}");

        only_comment.then_some(start.line..=end.line)
    }

    fn find_next_non_comment_line(line: usize, comment_lines: &HashSet<usize>) -> usize {
        let mut next = line + 1;
        let max_line = line + MAX_COMMENT_CHAIN_LINES;
        while comment_lines.contains(&next) && next < max_line {
            next += 1;
        }
        next
    }
}

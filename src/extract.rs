//! Text extraction for PR references and tagged description blocks
//!
//! Two regex lookups drive the whole pipeline: one finds ` #NNNNN `
//! references in commit messages, the other pulls the content of a fenced
//! block tagged with a known identifier out of a PR body.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a space-delimited PR reference: ` #123 `.
///
/// The surrounding spaces are part of the match, so `#123` glued to other
/// text does not count. Numbers are capped at 5 digits; a 6th digit breaks
/// the trailing-space boundary and the reference is treated as not found.
static PR_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" #([0-9]{1,5}) ").expect("PR reference pattern is valid"));

/// Find the first PR number referenced in `text`.
///
/// Returns `Ok(None)` when no reference exists; that is an ordinary outcome,
/// not an error. `Err` is reserved for a matched digit run that fails
/// integer conversion, which the digit-only pattern should rule out.
pub fn find_pr_number(text: &str) -> Result<Option<u64>> {
    let Some(caps) = PR_NUMBER_RE.captures(text) else {
        return Ok(None);
    };

    let digits = &caps[1];
    let number = digits.parse::<u64>().map_err(|source| Error::PrNumber {
        context: format!("reference #{digits}"),
        source,
    })?;

    Ok(Some(number))
}

/// Extract the content of a fenced block tagged with `identifier`.
///
/// The block must open with `` ```identifier `` followed by a newline, and
/// close with a ```` ``` ```` that ends the body. Content spans newlines and
/// round-trips verbatim. Returns the empty string when no such block exists;
/// absence and empty content are not distinguished.
pub fn find_description(body: &str, identifier: &str) -> String {
    let pattern = format!(
        "(?s)```{}\n(.*)\n```$",
        regex::escape(identifier)
    );
    // Per-call compilation: the identifier is part of the pattern.
    let Ok(re) = Regex::new(&pattern) else {
        return String::new();
    };

    re.captures(body)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

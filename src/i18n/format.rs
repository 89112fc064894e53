//! Positional placeholder substitution.

use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{(\d+)\}").unwrap())
}

/// Replace each `{i}` in `template` with `args[i]`.
///
/// Placeholders without a matching argument stay in the output verbatim.
/// Substitution is a single pass, so braces inside an argument are never
/// expanded.
pub fn format_message<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| arg.as_ref().to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// The set of placeholder indices a template uses.
pub fn placeholders(template: &str) -> BTreeSet<usize> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

//! Parser for `gclient revinfo` output.
//!
//! Each line must be `name: repo_url@revision`. The separators must occur exactly once;
//! anything else is reported as malformed rather than partially recovered. The one exception is
//! the self entry, recognised by its label before the value is split.

use crate::model::{ParseError, ParseErrorKind, ParsedLine, ResolvedEntry};

/// Split resolver output into parsed lines. Trailing whitespace of the whole output is ignored.
pub fn parse_revinfo(output: &str, self_key: &str) -> Vec<ParsedLine> {
    output
        .trim_end()
        .lines()
        .zip(1u32..)
        .map(|(raw, line)| parse_line(raw, line, self_key))
        .collect()
}

pub fn parse_line(raw: &str, line: u32, self_key: &str) -> ParsedLine {
    let malformed = |kind| {
        ParsedLine::Malformed(ParseError {
            kind,
            raw: raw.to_string(),
            line,
        })
    };

    let Some((name, value)) = split_exactly_once(raw, ": ") else {
        return malformed(ParseErrorKind::MissingLabel);
    };
    if name == self_key {
        return ParsedLine::SelfEntry { line };
    }
    let Some((repo_url, revision)) = split_exactly_once(value, "@") else {
        return malformed(ParseErrorKind::MissingRevision);
    };

    ParsedLine::Entry(ResolvedEntry {
        name: name.to_string(),
        repo_url: repo_url.to_string(),
        revision: revision.to_string(),
        line,
    })
}

fn split_exactly_once<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = s.split(sep);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a, b)),
        _ => None,
    }
}

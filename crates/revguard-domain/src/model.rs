/// One resolved dependency pin, i.e. one well-formed line of `revinfo` output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Manifest key, e.g. `third_party/externals/zlib`.
    pub name: String,
    pub repo_url: String,
    pub revision: String,
    /// 1-based line number in the resolver output.
    pub line: u32,
}

/// Which separator was missing (or repeated) in a malformed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line is not `label: value`.
    MissingLabel,
    /// The value is not `repo@revision`.
    MissingRevision,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The offending line, verbatim.
    pub raw: String,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(ResolvedEntry),
    /// The repository's own entry. Its value is not split: the root solution is usually
    /// reported without a revision.
    SelfEntry { line: u32 },
    Malformed(ParseError),
}

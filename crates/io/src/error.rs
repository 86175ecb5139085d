use thiserror::Error;

/// Fatal conditions encountered while reading a TREC run file.
///
/// There is no local recovery for any of these: the caller is expected to
/// report the error and exit, matching the original parser's `err_exit`
/// behavior for every malformed-input case.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: exceeds maximum line length")]
    LineTooLong { line: usize },

    #[error("line {line}: found {found} fields but expected {expected}")]
    WrongFieldCount {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: invalid topic id")]
    InvalidQid { line: usize },

    #[error("line {line}: invalid score")]
    InvalidScore { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

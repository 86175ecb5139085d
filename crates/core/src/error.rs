use thiserror::Error;

/// Fatal conditions raised by the fusion engine itself, as opposed to
/// upstream I/O or parsing failures (see `polyfuse_io::ParseError`).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("depth must be greater than zero")]
    ZeroDepth,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

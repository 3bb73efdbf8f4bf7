use std::io;
use thiserror::Error;

/// Errors raised while building the index. Query lookups never fail; unknown
/// keywords simply yield absent results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IndexError {
    /// A document's (or the noise list's) token source could not be read.
    /// Fatal to the build: there is no retry and no partial index.
    #[error("source unavailable: {name}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: io::Error,
    },
}

use std::fmt;
use std::io;

use thiserror::Error;

/// Errors raised while loading, summarizing or rendering grouped data.
#[derive(Debug, Error)]
pub enum Error {
    /// A record did not yield a finite number for the value being summarized.
    ///
    /// `index` is the position of the record in the input sequence.
    #[error("record {index} has an invalid value ({found})")]
    InvalidValue { index: usize, found: String },

    /// At least one group was required, but the input produced none.
    #[error("no groups to summarize")]
    EmptyInput,

    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not render summaries: {0}")]
    Render(#[from] fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_value(index: usize, value: Option<f64>) -> Self {
        let found = match value {
            Some(v) => v.to_string(),
            None => String::from("not a number"),
        };
        Error::InvalidValue { index, found }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed coordinate at line {line}: {details}")]
    MalformedCoordinate { line: usize, details: String },

    #[error("invalid label character '{ch}' at line {line}: expected 'H' or 'P'")]
    InvalidLabel { ch: char, line: usize },

    #[error("blank separator at line {line} is not followed by a label line")]
    MissingLabelLine { line: usize },

    #[error(
        "chain has {points} points but {labels} labels: each label covers one backbone/sidechain pair"
    )]
    LengthMismatch { points: usize, labels: usize },
}

impl Error {
    pub fn malformed(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            line,
            details: details.into(),
        }
    }
}

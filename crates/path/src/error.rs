use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Malformed path '{path}' at offset {offset}: {reason}")]
    Malformed {
        path: String,
        offset: usize,
        reason: &'static str,
    },
}

impl PathError {
    pub(crate) fn malformed(path: &str, offset: usize, reason: &'static str) -> Self {
        PathError::Malformed {
            path: path.to_string(),
            offset,
            reason,
        }
    }
}

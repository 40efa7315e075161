//! Error type for data loading

use std::path::PathBuf;

/// Error from loading a source file.
///
/// A missing input file is its own variant: an absent collection is a hard
/// precondition failure for the pipeline, distinct from ordinary I/O or
/// parse errors.
#[derive(Debug)]
pub enum IngestError {
    MissingInput(PathBuf),
    Io(PathBuf, std::io::Error),
    Csv(PathBuf, csv::Error),
    Json(PathBuf, serde_json::Error),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput(path) => {
                write!(f, "required input file not found: {}", path.display())
            }
            Self::Io(path, e) => write!(f, "IO error reading {}: {e}", path.display()),
            Self::Csv(path, e) => write!(f, "CSV error in {}: {e}", path.display()),
            Self::Json(path, e) => write!(f, "JSON error in {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingInput(_) => None,
            Self::Io(_, e) => Some(e),
            Self::Csv(_, e) => Some(e),
            Self::Json(_, e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_path() {
        let err = IngestError::MissingInput(PathBuf::from("data/drugs.csv"));
        let msg = format!("{err}");
        assert!(msg.contains("drugs.csv"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error;
        let err = IngestError::Io(
            PathBuf::from("x"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}

//! Error types for the version header generator

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Bad command line; clap's message already includes the usage text
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// The version-control descriptor could not be obtained
    #[error("version lookup failed: {0}")]
    VersionLookup(String),

    /// The header could not be written to its destination
    #[error("cannot write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process status reported for this failure
    pub fn code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            Error::VersionLookup(_) => 3,
            Error::FileWrite { .. } => 4,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_failure() {
        let lookup = Error::VersionLookup("no tags".into());
        let write = Error::FileWrite {
            path: PathBuf::from("/nonexistent/version.hpp"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert_eq!(lookup.code(), 3);
        assert_eq!(write.code(), 4);
    }

    #[test]
    fn test_file_write_message_names_path() {
        let err = Error::FileWrite {
            path: PathBuf::from("out/version.hpp"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("out/version.hpp"));
    }
}

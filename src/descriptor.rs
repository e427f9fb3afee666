use std::path::PathBuf;
use std::process::Command;
use std::str;

use log::debug;

use crate::error::{Error, Result};

/// Source of the version descriptor embedded in the generated header.
pub trait DescriptorProvider {
    fn describe(&self) -> Result<String>;
}

/// Asks git for the nearest tag via `git describe --tags`.
#[derive(Debug, Default, Clone)]
pub struct GitDescribe {
    repo_dir: Option<PathBuf>,
}

impl GitDescribe {
    /// Describe the repository containing the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe the repository containing `dir` instead.
    #[cfg(test)]
    pub fn in_dir<P: Into<PathBuf>>(dir: P) -> Self {
        GitDescribe {
            repo_dir: Some(dir.into()),
        }
    }
}

impl DescriptorProvider for GitDescribe {
    fn describe(&self) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(["describe", "--tags"]);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        debug!("Running {cmd:?}");

        let output = cmd
            .output()
            .map_err(|err| Error::VersionLookup(format!("cannot run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::VersionLookup(format!(
                "git describe --tags exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_output(&output.stdout)
    }
}

fn parse_output(stdout: &[u8]) -> Result<String> {
    if !stdout.is_ascii() {
        return Err(Error::VersionLookup(
            "git describe printed non-ASCII output".into(),
        ));
    }
    // Cannot fail after the ASCII check
    let descriptor = str::from_utf8(stdout)
        .map_err(|err| Error::VersionLookup(err.to_string()))?
        .trim();

    if descriptor.is_empty() {
        return Err(Error::VersionLookup(
            "git describe printed nothing".into(),
        ));
    }
    Ok(descriptor.to_string())
}

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::descriptor::DescriptorProvider;
use crate::error::{Error, Result};
use crate::header;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub descriptor: String,
    pub overwritten: bool,
}

/// Fetches the descriptor from `provider` and writes the header to `path`.
///
/// The descriptor is resolved before the destination is touched, so a failed
/// lookup leaves any existing file as it was. An existing file is replaced
/// wholesale. The parent directory must already exist.
pub fn generate(
    provider: &dyn DescriptorProvider,
    generator: &str,
    path: &Path,
) -> Result<Generated> {
    let descriptor = provider.describe()?;
    let text = header::render(generator, &descriptor);

    let overwritten = path.is_file();
    if overwritten {
        warn!("File [{}] exists and will be overwritten.", path.display());
    }

    write_header(path, &text)?;

    Ok(Generated {
        path: path.to_path_buf(),
        descriptor,
        overwritten,
    })
}

fn write_header(path: &Path, text: &str) -> Result<()> {
    let to_err = |source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    // Dropping the handle closes it on every path out of this function
    let mut file = File::create(path).map_err(to_err)?;
    file.write_all(text.as_bytes()).map_err(to_err)?;
    file.flush().map_err(to_err)?;
    Ok(())
}

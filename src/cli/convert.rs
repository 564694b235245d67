//! Convert command - read an env file, build the Secret, write it out.

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::output;
use crate::core::{env, manifest};
use crate::error::{Error, Result};

/// Run the read, build and write stages in order.
///
/// Nothing is written unless the env file was read and the manifest built.
pub fn execute(input: &Path, dest: &Path, name: &str, namespace: Option<&str>) -> Result<()> {
    let data = env::load(input)?;
    let yaml = manifest::build(data, name, namespace)?;
    write(dest, yaml.as_bytes())?;

    info!(path = %dest.display(), "wrote secret manifest");
    output::success(&format!(
        "secrets manifest written to {}",
        output::path(dest)
    ));
    Ok(())
}

/// Write the manifest, replacing the contents of any existing file.
///
/// On unix a new file is created with mode 0600; an existing file keeps
/// its permissions.
fn write(dest: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: dest.to_path_buf(),
        source,
    };
    debug!(path = %dest.display(), bytes = contents.len(), "writing manifest");

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(crate::core::constants::OUTPUT_MODE)
            .open(dest)
            .map_err(write_err)?;
        file.write_all(contents).map_err(write_err)?;
        file.flush().map_err(write_err)?;
    }

    #[cfg(not(unix))]
    {
        let mut file = std::fs::File::create(dest).map_err(write_err)?;
        file.write_all(contents).map_err(write_err)?;
        file.flush().map_err(write_err)?;
    }

    Ok(())
}

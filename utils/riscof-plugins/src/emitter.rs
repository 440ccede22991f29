use std::io::{self, Write};
use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use thiserror::Error;

use crate::config::{CONFIG_FILE_NAME, ConfigDocument};

pub const BEGIN_MARKER: &str = "----- config.ini begin -----";
pub const END_MARKER: &str = "----- config.ini end -----";

/// `config.ini` could not be created or written.
///
/// The I/O error is kept as the [`source`](std::error::Error::source) so that
/// `{:#}` through anyhow reads `failed to write <path>: <cause>`.
#[derive(Debug, Error)]
#[error("failed to write {}", path.display())]
pub struct WriteError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl WriteError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes the RISCOF `config.ini` for the plugins found in one directory.
#[derive(Debug, Clone)]
pub struct ConfigEmitter {
    plugin_dir: Utf8PathBuf,
}

impl ConfigEmitter {
    pub fn new(plugin_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
        }
    }

    /// Where [`ConfigEmitter::emit`] writes when run from `working_dir`.
    pub fn target(working_dir: &Path) -> PathBuf {
        working_dir.join(CONFIG_FILE_NAME)
    }

    /// Render the document and write it to `<working_dir>/config.ini`.
    ///
    /// `working_dir` may be any OS path; it only ends up in the document when
    /// the plugin directory is relative, and then it is converted lossily.
    /// An existing file is truncated. Nothing is cleaned up on failure, so a
    /// partially written file may be left behind.
    pub fn emit(&self, working_dir: &Path) -> Result<ConfigDocument, WriteError> {
        let base = match Utf8Path::from_path(working_dir) {
            Some(base) => base.to_path_buf(),
            None => Utf8PathBuf::from(working_dir.to_string_lossy().into_owned()),
        };
        let document = ConfigDocument::for_plugin_dir(&self.plugin_dir, &base);
        debug!("Plugin directory: {}", self.plugin_dir);
        debug!("Reference plugin: {}", document.reference().path());
        debug!("DUT plugin: {}", document.dut().path());

        let path = Self::target(working_dir);
        std::fs::write(&path, document.to_string())
            .map_err(|source| WriteError { path: path.clone(), source })?;
        info!("Wrote {}", path.display());

        Ok(document)
    }
}

/// Print `document` between the begin/end markers, trailing whitespace trimmed.
pub fn echo<W: Write>(document: &ConfigDocument, out: &mut W) -> io::Result<()> {
    let text = document.to_string();
    writeln!(out, "{BEGIN_MARKER}")?;
    writeln!(out, "{}", text.trim_end())?;
    writeln!(out, "{END_MARKER}")?;
    writeln!(out)?;
    out.flush()
}

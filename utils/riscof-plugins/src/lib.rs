mod config;
mod emitter;
mod paths;

// Re-export public API
pub use config::{CONFIG_FILE_NAME, ConfigDocument, DUT_NAME, PluginSpec, REFERENCE_NAME};
pub use emitter::{BEGIN_MARKER, ConfigEmitter, END_MARKER, WriteError, echo};
pub use paths::{expand_home, make_absolute, normalize};

/// Directory holding the RISCOF plugins shipped with this crate.
pub const PLUGIN_DIR: &str = env!("CARGO_MANIFEST_DIR");

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::paths::make_absolute;

/// Plugin under test.
pub const DUT_NAME: &str = "uemu";
/// Golden model the DUT is compared against.
pub const REFERENCE_NAME: &str = "spike_simple";
/// Name of the file RISCOF looks for in its working directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// A RISCOF plugin: its name and the directory it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
    name: String,
    path: Utf8PathBuf,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Locate plugin `name` inside `plugin_dir`.
    ///
    /// `base` is only consulted when `plugin_dir` is relative.
    pub fn locate(name: &str, plugin_dir: &Utf8Path, base: &Utf8Path) -> Self {
        Self::new(name, make_absolute(&plugin_dir.join(name), base))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// ISA description consumed by RISCOF (`<path>/<name>_isa.yaml`).
    pub fn isa_spec(&self) -> Utf8PathBuf {
        self.path.join(format!("{}_isa.yaml", self.name))
    }

    /// Platform description consumed by RISCOF (`<path>/<name>_platform.yaml`).
    pub fn platform_spec(&self) -> Utf8PathBuf {
        self.path.join(format!("{}_platform.yaml", self.name))
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        writeln!(f, "pluginpath={}", self.path)?;
        writeln!(f, "ispec={}", self.isa_spec())?;
        writeln!(f, "pspec={}", self.platform_spec())?;
        writeln!(f, "target_run=1")
    }
}

/// Contents of `config.ini`.
///
/// Rendering goes through [`fmt::Display`]; the output is the exact text
/// written to disk, `[RISCOF]` first, then the DUT and the reference sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    reference: PluginSpec,
    dut: PluginSpec,
}

impl ConfigDocument {
    pub fn new(reference: PluginSpec, dut: PluginSpec) -> Self {
        Self { reference, dut }
    }

    /// Document for the `uemu` / `spike_simple` pair found in `plugin_dir`.
    pub fn for_plugin_dir(plugin_dir: &Utf8Path, base: &Utf8Path) -> Self {
        Self::new(
            PluginSpec::locate(REFERENCE_NAME, plugin_dir, base),
            PluginSpec::locate(DUT_NAME, plugin_dir, base),
        )
    }

    pub fn reference(&self) -> &PluginSpec {
        &self.reference
    }

    pub fn dut(&self) -> &PluginSpec {
        &self.dut
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[RISCOF]")?;
        writeln!(f, "ReferencePlugin={}", self.reference.name)?;
        writeln!(f, "ReferencePluginPath={}", self.reference.path)?;
        writeln!(f, "DUTPlugin={}", self.dut.name)?;
        writeln!(f, "DUTPluginPath={}", self.dut.path)?;
        writeln!(f)?;
        self.dut.write_section(f)?;
        writeln!(f)?;
        self.reference.write_section(f)
    }
}

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Ambient inputs the hook needs, read from the process once.
/// Everything downstream takes these as plain parameters.
#[derive(Debug, Clone)]
pub struct HookEnv {
    /// Location of this executable, symlinks resolved when possible
    pub entry_point: PathBuf,
    /// The current user's home directory
    pub home: PathBuf,
}

impl HookEnv {
    pub fn from_process() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate hook executable")?;
        // Resolve symlinks so the plugin root is where the binary actually lives
        let entry_point = std::fs::canonicalize(&exe).unwrap_or(exe);

        // `HOME` when set, otherwise the passwd entry (or the profile folder on Windows)
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(HookEnv { entry_point, home })
    }
}

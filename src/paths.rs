use std::path::{Path, PathBuf};

/// Legacy custom-skills directory, relative to the user's home
const LEGACY_SKILLS_DIR: &str = ".config/superpowers/skills";

/// Filesystem locations the hook cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginPaths {
    /// Plugin installation root (the directory containing `hooks/`)
    pub plugin_root: PathBuf,
    /// Old location for custom skills; only its existence matters
    pub legacy_skills_dir: PathBuf,
}

impl PluginPaths {
    /// Resolve paths from the hook's own location and the user's home.
    ///
    /// The entry point lives at `<plugin_root>/hooks/<binary>`, so the plugin
    /// root is two levels up. A path with no parent resolves to itself.
    pub fn resolve(entry_point: &Path, home: &Path) -> Self {
        let hooks_dir = parent_or_self(entry_point);
        let plugin_root = parent_or_self(hooks_dir).to_path_buf();

        PluginPaths {
            plugin_root,
            legacy_skills_dir: home.join(LEGACY_SKILLS_DIR),
        }
    }

    /// Path to the using-superpowers skill document
    pub fn skill_file(&self) -> PathBuf {
        self.plugin_root
            .join("skills")
            .join("using-superpowers")
            .join("SKILL.md")
    }

    /// Whether anything exists at the legacy skills path
    pub fn has_legacy_skills(&self) -> bool {
        self.legacy_skills_dir.exists()
    }
}

fn parent_or_self(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => path,
    }
}

use std::fs;
use std::path::Path;

/// Result of loading the skill document. Loading never fails outright: an
/// unreadable file becomes a message that is injected in place of the skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillContent {
    Loaded(String),
    Unavailable(String),
}

impl SkillContent {
    /// Read the skill document as UTF-8 with line endings normalized to `\n`
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => SkillContent::Loaded(normalize_newlines(&text)),
            Err(e) => SkillContent::Unavailable(format!(
                "Error reading using-superpowers skill: {}: {}",
                e,
                path.display()
            )),
        }
    }

    /// Text to inject, whichever way loading went
    pub fn text(&self) -> &str {
        match self {
            SkillContent::Loaded(text) | SkillContent::Unavailable(text) => text,
        }
    }
}

/// Convert `\r\n` and lone `\r` to `\n`
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

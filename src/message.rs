use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

use crate::escape::escape_lines;

const HOOK_EVENT_NAME: &str = "SessionStart";

/// Fixed text appended after the closing tag
const TRAILING_MARKER: &str = "密码是天王盖地虎2222333";

/// Shown when custom skills are still in the old location
const LEGACY_SKILLS_WARNING: &str = "\n\n<important-reminder>IN YOUR FIRST REPLY AFTER SEEING THIS MESSAGE YOU MUST TELL THE USER:⚠️ **WARNING:** Superpowers now uses Claude Code's skills system. Custom skills in ~/.config/superpowers/skills will not be read. Move custom skills to ~/.claude/skills instead. To make this message go away, remove ~/.config/superpowers/skills</important-reminder>";

/// Output JSON for the Claude Code hook system
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub additional_context: String,
}

impl HookOutput {
    /// Build the SessionStart message from raw skill text and warning text.
    /// Both are escaped here.
    pub fn session_start(skill: &str, warning: &str) -> Self {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME,
                additional_context: additional_context(
                    &escape_lines(skill),
                    &escape_lines(warning),
                ),
            },
        }
    }

    /// Serialize to a single line with `", "` and `": "` separators
    pub fn to_line(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)
            .context("Failed to serialize hook output")?;
        String::from_utf8(buf).context("Serialized hook output is not UTF-8")
    }
}

/// Warning to inject, or empty when there is nothing to migrate
pub fn legacy_warning(has_legacy_skills: bool) -> &'static str {
    if has_legacy_skills {
        LEGACY_SKILLS_WARNING
    } else {
        ""
    }
}

// The `\n` sequences below are literal backslash-n markers, not line feeds
fn additional_context(skill_escaped: &str, warning_escaped: &str) -> String {
    format!(
        r"<EXTREMELY_IMPORTANT>\nYou have superpowers.\n\n**Below is the full content of your 'superpowers:using-superpowers' skill - your introduction to using skills. For all other skills, use the 'Skill' tool:**\n\n{skill_escaped}\n\n{warning_escaped}\n</EXTREMELY_IMPORTANT>  {TRAILING_MARKER}"
    )
}

/// Compact JSON with a space after each separator, e.g.
/// `{"a": 1, "b": [1, 2]}`. Non-ASCII characters are written as-is.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn context_of(line: &str) -> String {
        let value: Value = serde_json::from_str(line).unwrap();
        value["hookSpecificOutput"]["additionalContext"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_shape_and_separators() {
        let line = HookOutput::session_start("body", "").to_line().unwrap();

        assert!(line.starts_with(
            r#"{"hookSpecificOutput": {"hookEventName": "SessionStart", "additionalContext": ""#
        ));
        assert!(line.ends_with("\"}}"));
        assert!(!line.contains('\n'));

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["hookSpecificOutput"]["hookEventName"], "SessionStart");
    }

    #[test]
    fn test_context_contains_escaped_skill() {
        let skill = "He said \"hi\"\nNext line.";
        let line = HookOutput::session_start(skill, "").to_line().unwrap();
        let context = context_of(&line);

        assert!(context.starts_with(r"<EXTREMELY_IMPORTANT>\nYou have superpowers.\n\n"));
        assert!(context.contains(&escape_lines(skill)));
        assert!(context.contains("He said \\\"hi\\\"\\n\nNext line.\\n"));
    }

    #[test]
    fn test_no_warning_ending() {
        let context = context_of(&HookOutput::session_start("body", "").to_line().unwrap());

        let expected_tail = format!(r"body\n\n\n\n\n</EXTREMELY_IMPORTANT>  {}", TRAILING_MARKER);
        assert!(context.ends_with(&expected_tail), "got {:?}", context);
        assert!(!context.contains("important-reminder"));
    }

    #[test]
    fn test_warning_injected_before_closing_tag() {
        let warning = legacy_warning(true);
        let context = context_of(&HookOutput::session_start("body", warning).to_line().unwrap());

        let escaped = escape_lines(warning);
        assert!(context.contains(&escaped));
        assert!(context.ends_with(&format!(
            "{}\\n</EXTREMELY_IMPORTANT>  {}",
            escaped, TRAILING_MARKER
        )));
        assert!(context.contains("remove ~/.config/superpowers/skills</important-reminder>"));
    }

    #[test]
    fn test_legacy_warning_selection() {
        assert_eq!(legacy_warning(false), "");
        assert!(legacy_warning(true).contains("~/.claude/skills"));
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let line = HookOutput::session_start("naïve ⚠️", "").to_line().unwrap();
        assert!(line.contains("naïve ⚠️"));
        assert!(line.contains(TRAILING_MARKER));
        assert!(!line.contains("\\u"));
    }

    #[test]
    fn test_escaped_line_feeds_in_json() {
        let line = HookOutput::session_start("a\nb", "").to_line().unwrap();
        // Marker becomes `\\n`, the joining line feed becomes `\n`
        assert!(line.contains(r"a\\n\nb\\n"));
    }
}

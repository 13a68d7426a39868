/// Escape text the way the shell version of this hook did:
/// `sed 's/\\/\\\\/g' | sed 's/"/\\"/g' | awk '{printf "%s\\n", $0}'`.
///
/// Each line gets backslashes doubled, then double quotes escaped, then a
/// literal `\n` (backslash + `n`) appended. Lines are rejoined with real line
/// feeds, so the result still spans multiple lines. Hosts only ever see it
/// inside a JSON string, where those line feeds are escaped again.
pub fn escape_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let mut escaped = line.replace('\\', "\\\\").replace('"', "\\\"");
            escaped.push_str("\\n");
            escaped
        })
        .collect::<Vec<_>>()
        .join("\n")
}

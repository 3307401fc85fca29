use crate::types::SkillMetadata;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static HEADER_KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):\s*(.*)$").expect("Invalid header pattern"));

/// Extracts the `name` and `description` header fields from a skill document.
///
/// The header is bounded by the first pair of lines that equal `---` after
/// trimming. Lines inside it are matched against `key: value`; keys other
/// than `name` and `description` are ignored, and scanning stops at the
/// closing delimiter. Absent fields stay empty.
///
/// Read failures never propagate: the optional `on_error` callback receives a
/// descriptive message and empty metadata is returned. The callback is
/// informational only and does not affect the result.
pub fn extract_frontmatter(path: &Path, on_error: Option<&dyn Fn(&str)>) -> SkillMetadata {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to read skill frontmatter"
            );
            if let Some(on_error) = on_error {
                on_error(&format!(
                    "Failed to read frontmatter from {}: {}",
                    path.display(),
                    err
                ));
            }
            return SkillMetadata::default();
        }
    };
    parse_frontmatter(&content)
}

fn parse_frontmatter(content: &str) -> SkillMetadata {
    let mut meta = SkillMetadata::default();
    let mut in_frontmatter = false;

    for line in content.lines() {
        if line.trim() == "---" {
            if in_frontmatter {
                break;
            }
            in_frontmatter = true;
            continue;
        }
        if !in_frontmatter {
            continue;
        }
        let Some(caps) = HEADER_KEY_VALUE.captures(line) else {
            continue;
        };
        let value = caps[2].trim();
        match &caps[1] {
            "name" => meta.name = value.to_string(),
            "description" => meta.description = value.to_string(),
            _ => {}
        }
    }

    meta
}

/// Strips the header block from skill document text, returning the body.
///
/// When both delimiters are present, returns the trimmed text of all lines
/// strictly after the closing `---`. With zero or one delimiter the input is
/// treated as having no header and the trimmed original is returned.
pub fn strip_frontmatter(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut start = None;
    let mut end = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.trim() == "---" {
            if start.is_none() {
                start = Some(idx);
            } else {
                end = Some(idx);
                break;
            }
        }
    }

    // Valid frontmatter requires both delimiters.
    let (Some(_), Some(end)) = (start, end) else {
        return content.trim().to_string();
    };

    lines[end + 1..].join("\n").trim().to_string()
}

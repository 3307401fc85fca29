use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name that marks a directory as a skill.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Default maximum depth for recursive skill discovery (root is depth 0).
pub const MAX_SKILL_SEARCH_DEPTH: usize = 3;

/// Name prefix that forces resolution against the shared root.
pub const SHARED_PREFIX: &str = "shared:";

/// Represents the origin of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    /// User-personal skills directory; shadows the shared root.
    Personal,
    /// Shared/vendored skills directory.
    Shared,
}

impl SkillSource {
    /// Returns a stable label for this source.
    pub fn label(&self) -> &'static str {
        match self {
            SkillSource::Personal => "personal",
            SkillSource::Shared => "shared",
        }
    }
}

/// Parses a string key into a `SkillSource` variant.
///
/// ```
/// use skillet_discovery::{parse_source_key, SkillSource};
///
/// assert_eq!(parse_source_key("Personal"), Some(SkillSource::Personal));
/// assert_eq!(parse_source_key("unknown"), None);
/// ```
pub fn parse_source_key(key: &str) -> Option<SkillSource> {
    if key.eq_ignore_ascii_case("personal") {
        Some(SkillSource::Personal)
    } else if key.eq_ignore_ascii_case("shared") {
        Some(SkillSource::Shared)
    } else {
        None
    }
}

/// Represents a root directory where skills are discovered, along with its
/// associated source type. Roots are caller-owned inputs; discovery never
/// creates or mutates them.
#[derive(Debug, Clone)]
pub struct SkillRoot {
    /// The root directory path.
    pub root: PathBuf,
    /// The source type for skills in this root.
    pub source: SkillSource,
}

/// Metadata parsed from a skill document header.
///
/// Both fields default to the empty string when the header is absent, the
/// key is missing, or the file could not be read. This is a flat parse
/// result; fallbacks (such as substituting a directory name) are applied by
/// the scanner, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// The skill name as declared in the header.
    pub name: String,
    /// The skill description as declared in the header.
    pub description: String,
}

/// A skill found during a directory scan.
///
/// Created fresh on every scan and never persisted; ordering follows the
/// directory traversal order of the scan that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredSkill {
    /// Directory containing the skill document.
    pub path: PathBuf,
    /// Full path to the `SKILL.md` document.
    pub document_path: PathBuf,
    /// Skill name (header name, else the directory base name).
    pub name: String,
    /// Skill description (header description, else empty).
    pub description: String,
    /// The source root this skill was discovered under.
    pub source: SkillSource,
}

/// The outcome of resolving a skill name to a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSkill {
    /// Full path to the resolved `SKILL.md` document.
    pub document_path: PathBuf,
    /// Which root answered the lookup.
    pub source: SkillSource,
    /// The requested identifier with any forcing prefix stripped.
    pub skill_path: String,
}

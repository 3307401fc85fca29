use anyhow::Result;
use skillet_discovery::{SkillRoot, SkillSource};
use std::path::PathBuf;

/// Overrides the personal skills root.
pub const ENV_PERSONAL_DIR: &str = "SKILLET_PERSONAL_DIR";
/// Overrides the shared skills root.
pub const ENV_SHARED_DIR: &str = "SKILLET_SHARED_DIR";

const DEFAULT_PERSONAL_DIR: &str = ".claude/skills";
const DEFAULT_SHARED_DIR: &str = ".claude/skillet/skills";

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

fn dir_from_env(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Returns the personal skills root: the `SKILLET_PERSONAL_DIR` override,
/// else `~/.claude/skills`. `None` only when no home directory can be
/// determined.
pub fn personal_skills_dir() -> Option<PathBuf> {
    dir_from_env(ENV_PERSONAL_DIR)
        .or_else(|| home_dir().ok().map(|home| home.join(DEFAULT_PERSONAL_DIR)))
}

/// Returns the shared skills root: the `SKILLET_SHARED_DIR` override, else
/// `~/.claude/skillet/skills` (the vendored checkout).
pub fn shared_skills_dir() -> Option<PathBuf> {
    dir_from_env(ENV_SHARED_DIR)
        .or_else(|| home_dir().ok().map(|home| home.join(DEFAULT_SHARED_DIR)))
}

/// Returns the configured roots in precedence order, personal first.
/// Unresolvable roots are skipped rather than reported.
pub fn skill_roots() -> Vec<SkillRoot> {
    let mut roots = Vec::new();
    if let Some(dir) = personal_skills_dir() {
        roots.push(SkillRoot {
            root: dir,
            source: SkillSource::Personal,
        });
    }
    if let Some(dir) = shared_skills_dir() {
        roots.push(SkillRoot {
            root: dir,
            source: SkillSource::Shared,
        });
    }
    roots
}

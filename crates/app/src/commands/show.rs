use anyhow::{Context, Result};
use skillet_discovery::{resolve_skill, strip_frontmatter};
use skillet_state::{personal_skills_dir, shared_skills_dir};
use std::fs;

/// Handle the `show` command.
pub(crate) fn handle_show_command(name: &str) -> Result<()> {
    let personal = personal_skills_dir();
    let shared = shared_skills_dir();

    let resolved = resolve_skill(name, personal.as_deref(), shared.as_deref())
        .with_context(|| format!("Skill not found: {}", name))?;

    let content = fs::read_to_string(&resolved.document_path)
        .with_context(|| format!("Failed to read {}", resolved.document_path.display()))?;
    println!("{}", strip_frontmatter(&content));
    Ok(())
}

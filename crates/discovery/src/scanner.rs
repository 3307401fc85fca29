use crate::frontmatter::extract_frontmatter;
use crate::types::{
    DiscoveredSkill, SkillRoot, SkillSource, MAX_SKILL_SEARCH_DEPTH, SKILL_FILE_NAME,
};
use std::path::Path;
use walkdir::WalkDir;

/// Finds all skills under `root`, recursing at most `max_depth` levels.
///
/// The root itself counts as depth 0 and is a candidate like any other
/// directory: every directory encountered is checked for an immediate
/// `SKILL.md` child, and those that have one are recorded. Directories
/// without one are still traversed for descendant skills. A missing root
/// yields an empty list without error.
///
/// The skill name falls back to the directory base name when the header
/// declares none; the description falls back to empty. Ordering follows the
/// underlying directory listing order.
pub fn find_skills_in_dir(
    root: &Path,
    source: SkillSource,
    max_depth: usize,
    on_error: Option<&dyn Fn(&str)>,
) -> Vec<DiscoveredSkill> {
    let mut skills = Vec::new();
    if !root.exists() {
        return skills;
    }

    for entry in WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        let document = dir.join(SKILL_FILE_NAME);
        if !document.is_file() {
            continue;
        }

        let meta = extract_frontmatter(&document, on_error);
        let name = if meta.name.is_empty() {
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string())
        } else {
            meta.name
        };

        skills.push(DiscoveredSkill {
            path: dir.to_path_buf(),
            document_path: document,
            name,
            description: meta.description,
            source,
        });
    }

    skills
}

/// Collects skills from every configured root in order, at the default
/// search depth. Roots that do not exist contribute nothing.
pub fn discover_skills(
    roots: &[SkillRoot],
    on_error: Option<&dyn Fn(&str)>,
) -> Vec<DiscoveredSkill> {
    let mut skills = Vec::new();
    for root in roots {
        skills.extend(find_skills_in_dir(
            &root.root,
            root.source,
            MAX_SKILL_SEARCH_DEPTH,
            on_error,
        ));
    }
    skills
}

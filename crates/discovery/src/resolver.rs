use crate::types::{ResolvedSkill, SkillSource, SHARED_PREFIX, SKILL_FILE_NAME};
use std::path::Path;

/// Resolves a skill name to its document, encoding override precedence.
///
/// A personal skill of a given name shadows the shared skill of the same
/// name; prefixing the name with `shared:` bypasses the personal root and
/// looks up the shared root directly. Either root may be absent. `None`
/// means no document answers the name, which is a defined outcome the
/// caller must branch on, not an error.
///
/// The name is joined onto the root without sanitization, so it may carry
/// path separators to address namespaced skills (`tools/formatter`).
/// Callers in security-sensitive contexts must validate names themselves
/// before resolution.
pub fn resolve_skill(
    name: &str,
    personal_dir: Option<&Path>,
    shared_dir: Option<&Path>,
) -> Option<ResolvedSkill> {
    let (force_shared, skill_name) = match name.strip_prefix(SHARED_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, name),
    };

    // Personal wins unless the lookup was explicitly forced to shared.
    if !force_shared {
        if let Some(personal) = personal_dir {
            let document = personal.join(skill_name).join(SKILL_FILE_NAME);
            if document.is_file() {
                return Some(ResolvedSkill {
                    document_path: document,
                    source: SkillSource::Personal,
                    skill_path: skill_name.to_string(),
                });
            }
        }
    }

    if let Some(shared) = shared_dir {
        let document = shared.join(skill_name).join(SKILL_FILE_NAME);
        if document.is_file() {
            return Some(ResolvedSkill {
                document_path: document,
                source: SkillSource::Shared,
                skill_path: skill_name.to_string(),
            });
        }
    }

    None
}

use crate::cli::OutputFormat;
use anyhow::Result;
use pathdiff::diff_paths;
use skillet_discovery::{discover_skills, SkillRoot, SkillSource};
use skillet_state::skill_roots;
use std::path::PathBuf;

/// Handle the `list` command.
pub(crate) fn handle_list_command(skill_dirs: Vec<PathBuf>, format: OutputFormat) -> Result<()> {
    let mut roots = skill_roots();
    roots.extend(skill_dirs.into_iter().map(|dir| SkillRoot {
        root: dir,
        source: SkillSource::Shared,
    }));

    tracing::debug!(roots = roots.len(), "Scanning skill roots");
    let on_error = |message: &str| eprintln!("warning: {message}");
    let skills = discover_skills(&roots, Some(&on_error));

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!("No skills discovered.");
        return Ok(());
    }

    println!("Found {} skills", skills.len());
    for skill in &skills {
        let location = roots
            .iter()
            .find(|r| skill.path.starts_with(&r.root))
            .and_then(|r| diff_paths(&skill.path, &r.root))
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or_else(|| skill.path.clone());

        if skill.description.is_empty() {
            println!("  {} [{}] {}", skill.name, skill.source.label(), location.display());
        } else {
            println!(
                "  {} [{}] {} - {}",
                skill.name,
                skill.source.label(),
                location.display(),
                skill.description
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillet_test_utils::{env_guard, skill_document, TestFixture};

    #[test]
    fn lists_skills_from_both_roots() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _personal = fixture.personal_dir_guard();
        let _shared = fixture.shared_dir_guard();
        fixture
            .create_personal_skill("mine", &skill_document("mine", "Personal skill", "# Mine"))
            .unwrap();
        fixture
            .create_shared_skill("ours", &skill_document("ours", "Shared skill", "# Ours"))
            .unwrap();

        assert!(handle_list_command(Vec::new(), OutputFormat::Text).is_ok());
        assert!(handle_list_command(Vec::new(), OutputFormat::Json).is_ok());
    }

    #[test]
    fn extra_dirs_are_scanned_as_shared() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _personal = fixture.personal_dir_guard();
        let _shared = fixture.shared_dir_guard();

        let extra = tempfile::tempdir().unwrap();
        let dir = extra.path().join("extra-skill");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), "---\nname: extra-skill\n---\n").unwrap();

        assert!(
            handle_list_command(vec![extra.path().to_path_buf()], OutputFormat::Text).is_ok()
        );
    }

    #[test]
    fn empty_roots_list_cleanly() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _personal = fixture.personal_dir_guard();
        let _shared = fixture.shared_dir_guard();

        assert!(handle_list_command(Vec::new(), OutputFormat::Text).is_ok());
    }
}

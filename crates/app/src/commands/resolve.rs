use crate::cli::OutputFormat;
use anyhow::Result;
use skillet_discovery::resolve_skill;
use skillet_state::{personal_skills_dir, shared_skills_dir};

/// Handle the `resolve` command.
pub(crate) fn handle_resolve_command(name: &str, format: OutputFormat) -> Result<()> {
    let personal = personal_skills_dir();
    let shared = shared_skills_dir();

    let Some(resolved) = resolve_skill(name, personal.as_deref(), shared.as_deref()) else {
        anyhow::bail!("Skill not found: {}", name);
    };

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!(
        "{} [{}]",
        resolved.document_path.display(),
        resolved.source.label()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillet_test_utils::{env_guard, skill_document, TestFixture};

    #[test]
    fn resolves_personal_over_shared() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _personal = fixture.personal_dir_guard();
        let _shared = fixture.shared_dir_guard();
        fixture
            .create_personal_skill("x", &skill_document("x", "", "personal body"))
            .unwrap();
        fixture
            .create_shared_skill("x", &skill_document("x", "", "shared body"))
            .unwrap();

        assert!(handle_resolve_command("x", OutputFormat::Text).is_ok());
        assert!(handle_resolve_command("shared:x", OutputFormat::Json).is_ok());
    }

    #[test]
    fn unknown_name_surfaces_as_cli_error() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _personal = fixture.personal_dir_guard();
        let _shared = fixture.shared_dir_guard();

        let err = handle_resolve_command("missing", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}

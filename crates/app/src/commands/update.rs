use anyhow::Result;
use skillet_state::shared_skills_dir;
use skillet_update::check_for_updates;
use std::path::PathBuf;

/// Handle the `check-updates` command.
///
/// The check is advisory and fail-open: every failure mode reports "no
/// updates" and the command exits successfully either way.
pub(crate) fn handle_check_updates_command(dir: Option<PathBuf>) -> Result<()> {
    let Some(dir) = dir.or_else(shared_skills_dir) else {
        println!("No shared skills directory configured.");
        return Ok(());
    };

    if check_for_updates(&dir) {
        println!("Updates available for {}", dir.display());
    } else {
        println!("No updates available for {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillet_test_utils::{env_guard, TestFixture};

    #[test]
    fn non_repository_directory_reports_no_updates() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _shared = fixture.shared_dir_guard();

        assert!(handle_check_updates_command(None).is_ok());
        assert!(handle_check_updates_command(Some(fixture.shared_skills.clone())).is_ok());
    }

    #[test]
    fn missing_directory_is_not_an_error() {
        let _serial = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _shared = fixture.shared_dir_guard();

        assert!(handle_check_updates_command(Some(PathBuf::from("/nonexistent"))).is_ok());
    }
}

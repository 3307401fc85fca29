//! Shared test utilities for skillet crates.
//!
//! Provides env-var RAII guards, a global mutex for tests that mutate
//! process-global state, and a fixture that fabricates the layered
//! personal/shared skill directories under a tempdir.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original
/// on drop. Pass `None` to unset the variable for the guard's lifetime.
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Standard test fixture with the layered skill roots pre-created.
///
/// Holds the tempdir and provides access to the personal and shared roots.
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Personal skills root inside the temp environment.
    pub personal_skills: PathBuf,
    /// Shared skills root inside the temp environment.
    pub shared_skills: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with empty personal and shared roots.
    ///
    /// Does NOT touch environment variables - use the guard helpers for
    /// that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let personal_skills = tempdir.path().join("personal-skills");
        let shared_skills = tempdir.path().join("shared-skills");

        std::fs::create_dir_all(&personal_skills)?;
        std::fs::create_dir_all(&shared_skills)?;

        Ok(Self {
            tempdir,
            personal_skills,
            shared_skills,
        })
    }

    /// Create an RAII guard pointing `SKILLET_PERSONAL_DIR` at this
    /// fixture's personal root.
    pub fn personal_dir_guard(&self) -> EnvVarGuard {
        set_env_var(
            "SKILLET_PERSONAL_DIR",
            Some(self.personal_skills.to_str().expect("utf-8 temp path")),
        )
    }

    /// Create an RAII guard pointing `SKILLET_SHARED_DIR` at this fixture's
    /// shared root.
    pub fn shared_dir_guard(&self) -> EnvVarGuard {
        set_env_var(
            "SKILLET_SHARED_DIR",
            Some(self.shared_skills.to_str().expect("utf-8 temp path")),
        )
    }

    /// Create a skill directory under the personal root.
    ///
    /// Returns the path to the skill directory.
    pub fn create_personal_skill(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        create_skill(&self.personal_skills, name, content)
    }

    /// Create a skill directory under the shared root.
    pub fn create_shared_skill(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        create_skill(&self.shared_skills, name, content)
    }
}

fn create_skill(root: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let skill_dir = root.join(name);
    std::fs::create_dir_all(&skill_dir)?;
    std::fs::write(skill_dir.join("SKILL.md"), content)?;
    Ok(skill_dir)
}

/// Render a skill document with a standard header.
pub fn skill_document(name: &str, description: &str, body: &str) -> String {
    format!(
        "---\nname: {}\ndescription: {}\n---\n{}",
        name, description, body
    )
}

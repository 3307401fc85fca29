//! Best-effort update detection for a version-controlled skills checkout.
//!
//! The check is advisory: it reports whether the checkout is behind its
//! remote tracking branch, and every failure mode (missing repository,
//! network outage, non-zero exit, timeout) resolves to `false`. It never
//! blocks its caller past a fixed deadline and never returns an error.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use anyhow::Result;
use std::path::{Component, Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant};

/// Upper bound on the combined fetch-and-status invocation.
pub const GIT_FETCH_TIMEOUT: Duration = Duration::from_millis(3000);

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Checks whether the repository at `repo_dir` is behind its remote.
///
/// Runs `git fetch origin` followed by `git status --porcelain=v1 --branch`
/// under a single [`GIT_FETCH_TIMEOUT`] deadline. The fetch may update
/// remote-tracking refs but nothing touches the working tree or local
/// branches. Returns `true` only when the branch summary reports a behind
/// count; a directory without `.git` returns `false` without spawning
/// anything.
pub fn check_for_updates(repo_dir: &Path) -> bool {
    let repo = normalize_path(repo_dir);
    if !repo.join(".git").exists() {
        return false;
    }

    let deadline = Instant::now() + GIT_FETCH_TIMEOUT;
    match run_git(&["fetch", "origin"], &repo, deadline) {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            tracing::debug!(
                repo = %repo.display(),
                code = ?output.status.code(),
                "git fetch failed; skipping update check"
            );
            return false;
        }
        Err(err) => {
            tracing::debug!(
                repo = %repo.display(),
                error = %err,
                "git fetch did not complete; skipping update check"
            );
            return false;
        }
    }

    match run_git(&["status", "--porcelain=v1", "--branch"], &repo, deadline) {
        Ok(output) if output.status.success() => {
            status_reports_behind(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => {
            tracing::debug!(
                repo = %repo.display(),
                code = ?output.status.code(),
                "git status failed; skipping update check"
            );
            false
        }
        Err(err) => {
            tracing::debug!(
                repo = %repo.display(),
                error = %err,
                "git status did not complete; skipping update check"
            );
            false
        }
    }
}

/// A porcelain v1 branch summary line reporting a behind count means the
/// local branch trails its remote.
fn status_reports_behind(status: &str) -> bool {
    status
        .lines()
        .any(|line| line.starts_with("## ") && line.contains("[behind "))
}

fn run_git(args: &[&str], cwd: &Path, deadline: Instant) -> Result<Output> {
    if Instant::now() >= deadline {
        anyhow::bail!("deadline expired before git {}", args.join(" "));
    }
    let child = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    wait_with_deadline(child, deadline)
}

/// Polls the child until it exits or the deadline passes; an expired child
/// is killed and reaped before reporting failure.
fn wait_with_deadline(mut child: Child, deadline: Instant) -> Result<Output> {
    loop {
        if child.try_wait()?.is_some() {
            return Ok(child.wait_with_output()?);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            anyhow::bail!("timed out waiting for git");
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Lexically resolves `.` and `..` components without touching the
/// filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

//! Command-line interface for the `skillet` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `skillet-app` crate.

fn main() -> anyhow::Result<()> {
    skillet_app::run()
}

//! Core functionality for discovering and resolving skills.
//!
//! A skill is a directory holding a `SKILL.md` document with an optional
//! `---` delimited metadata header. This crate provides mechanisms for:
//! - Parsing skill headers and stripping them from document bodies.
//! - Scanning directory trees for skills, bounded by depth.
//! - Resolving a skill name across the personal and shared roots, with
//!   personal skills shadowing shared ones.
//!
//! # Examples
//!
//! ```
//! use skillet_discovery::{find_skills_in_dir, SkillSource, MAX_SKILL_SEARCH_DEPTH};
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! let skill_dir = temp.path().join("alpha");
//! std::fs::create_dir_all(&skill_dir).unwrap();
//! std::fs::write(skill_dir.join("SKILL.md"), "# Alpha").unwrap();
//!
//! let skills = find_skills_in_dir(
//!     temp.path(),
//!     SkillSource::Personal,
//!     MAX_SKILL_SEARCH_DEPTH,
//!     None,
//! );
//! assert_eq!(skills.len(), 1);
//! assert_eq!(skills[0].name, "alpha");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error type for discovery operations.
pub type Error = anyhow::Error;
/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Header parsing and stripping for skill documents.
pub mod frontmatter;
/// Skill name resolution across the layered roots.
pub mod resolver;
/// Skill discovery and scanning functionality.
pub mod scanner;
/// Types for skill metadata and sources.
pub mod types;

pub use frontmatter::{extract_frontmatter, strip_frontmatter};
pub use resolver::resolve_skill;
pub use scanner::{discover_skills, find_skills_in_dir};
pub use types::{
    parse_source_key, DiscoveredSkill, ResolvedSkill, SkillMetadata, SkillRoot, SkillSource,
    MAX_SKILL_SEARCH_DEPTH, SHARED_PREFIX, SKILL_FILE_NAME,
};

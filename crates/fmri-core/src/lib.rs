//! # fmri-core
//!
//! Completeness checks for fMRIPrep-style cohort directories.
//!
//! This crate holds everything with decision-making content in fmri-check:
//! - The `Issue` record and its `Problem` classification
//! - Directory layout and rule set values (`Layout`, `RuleSet`)
//! - The two-level subject/session walker
//! - The per-session rule checker
//! - The cohort validator and multi-cohort discovery
//! - Cross-cutting error types
//!
//! Rendering, argument parsing, and configuration loading live in `fmri-cli`
//! and `fmri-config`.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let issues = fmri_core::validate(Path::new("/data/study_fmriprep")).expect("cohort root");
//! for issue in &issues {
//!     println!("{} {} {} {}", issue.subject, issue.session, issue.file, issue.problem);
//! }
//! ```

pub mod checker;
pub mod cohort;
pub mod enums;
pub mod errors;
pub mod issue;
pub mod rules;
pub mod validator;
pub mod walk;

pub use checker::RuleChecker;
pub use cohort::{Cohort, DEFAULT_COHORT_SUFFIX, discover_cohorts};
pub use enums::Problem;
pub use errors::CoreError;
pub use issue::{Issue, ValidationReport};
pub use rules::{Layout, RuleSet};
pub use validator::{CohortValidator, validate};
pub use walk::SessionDir;

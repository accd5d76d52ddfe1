//! Two-level directory walker for cohort trees.
//!
//! Subjects are direct children of the cohort root, sessions are direct
//! children of a subject. Nothing deeper is visited, and entries that do not
//! match the layout prefixes are skipped without comment.
//!
//! Every listing is sorted by name before it is returned so issue order does
//! not depend on the platform's `read_dir` order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::rules::Layout;

/// One session directory together with the names used in issue records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDir {
    pub subject: String,
    pub session: String,
    pub path: PathBuf,
}

/// Fail unless `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<(), CoreError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CoreError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            Err(CoreError::CohortNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(error) => Err(CoreError::io(path, error)),
    }
}

/// Subject directories directly under `root`, sorted by name.
pub fn subjects(root: &Path, layout: &Layout) -> Result<Vec<PathBuf>, CoreError> {
    child_dirs(root, |name| name.starts_with(&layout.subject_prefix))
}

/// Session directories directly under `subject_dir`, sorted by name.
pub fn sessions(subject_dir: &Path, layout: &Layout) -> Result<Vec<PathBuf>, CoreError> {
    child_dirs(subject_dir, |name| name.starts_with(&layout.session_prefix))
}

/// Every (subject, session) pair under `root` in walk order.
pub fn session_dirs(root: &Path, layout: &Layout) -> Result<Vec<SessionDir>, CoreError> {
    let mut out = Vec::new();
    for subject_dir in subjects(root, layout)? {
        let subject = entry_name(&subject_dir);
        let sessions = sessions(&subject_dir, layout)?;
        tracing::debug!(%subject, sessions = sessions.len(), "walking subject");

        for session_dir in sessions {
            out.push(SessionDir {
                subject: subject.clone(),
                session: entry_name(&session_dir),
                path: session_dir,
            });
        }
    }
    Ok(out)
}

/// Direct child directories of `dir` whose names satisfy `keep`, sorted.
pub fn child_dirs<F>(dir: &Path, keep: F) -> Result<Vec<PathBuf>, CoreError>
where
    F: Fn(&str) -> bool,
{
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|error| CoreError::io(dir, error))? {
        let entry = entry.map_err(|error| CoreError::io(dir, error))?;
        let name = entry.file_name();
        if !keep(&name.to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        // Symlinked directories count.
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Regular files directly under `dir`, sorted.
pub fn files_in(dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|error| CoreError::io(dir, error))? {
        let path = entry.map_err(|error| CoreError::io(dir, error))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Final path component as an owned string; lossy for non-UTF-8 names.
#[must_use]
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_fixture(dir: &Path) {
        let dirs = [
            "sub-02/ses-02",
            "sub-02/ses-01",
            "sub-01/ses-01/func",
            "sub-01/anat",
            "derivatives/sub-99/ses-01",
            "logs",
        ];
        for d in &dirs {
            fs::create_dir_all(dir.join(d)).expect("mkdir should succeed");
        }
        fs::write(dir.join("sub-03.html"), "<html></html>").expect("write should succeed");
        fs::write(dir.join("sub-02/ses-03"), "not a directory").expect("write should succeed");
    }

    #[test]
    fn subjects_are_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let names: Vec<String> = subjects(tmp.path(), &Layout::default())
            .unwrap()
            .iter()
            .map(|p| entry_name(p))
            .collect();

        assert_eq!(names, vec!["sub-01", "sub-02"]);
    }

    #[test]
    fn sessions_skip_files_and_other_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let names: Vec<String> = sessions(&tmp.path().join("sub-02"), &Layout::default())
            .unwrap()
            .iter()
            .map(|p| entry_name(p))
            .collect();
        assert_eq!(names, vec!["ses-01", "ses-02"]);

        let names: Vec<String> = sessions(&tmp.path().join("sub-01"), &Layout::default())
            .unwrap()
            .iter()
            .map(|p| entry_name(p))
            .collect();
        assert_eq!(names, vec!["ses-01"]);
    }

    #[test]
    fn session_dirs_are_in_walk_order() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let pairs: Vec<(String, String)> = session_dirs(tmp.path(), &Layout::default())
            .unwrap()
            .into_iter()
            .map(|s| (s.subject, s.session))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("sub-01".to_string(), "ses-01".to_string()),
                ("sub-02".to_string(), "ses-01".to_string()),
                ("sub-02".to_string(), "ses-02".to_string()),
            ]
        );
    }

    #[test]
    fn custom_prefixes_are_honored() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("subj_A/visit1")).unwrap();
        fs::create_dir_all(tmp.path().join("sub-01/ses-01")).unwrap();

        let layout = Layout {
            subject_prefix: "subj_".to_string(),
            session_prefix: "visit".to_string(),
            ..Layout::default()
        };
        let found = session_dirs(tmp.path(), &layout).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subject, "subj_A");
        assert_eq!(found[0].session, "visit1");
    }

    #[test]
    fn ensure_directory_distinguishes_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("cohort.txt");
        fs::write(&file, "x").unwrap();

        assert!(ensure_directory(tmp.path()).is_ok());
        assert!(matches!(
            ensure_directory(&tmp.path().join("absent")),
            Err(CoreError::CohortNotFound { .. })
        ));
        assert!(matches!(
            ensure_directory(&file),
            Err(CoreError::NotADirectory { .. })
        ));
    }

    #[test]
    fn files_in_lists_only_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested_bold.nii")).unwrap();
        fs::write(tmp.path().join("b.tsv"), "").unwrap();
        fs::write(tmp.path().join("a.nii"), "").unwrap();

        let names: Vec<String> = files_in(tmp.path())
            .unwrap()
            .iter()
            .map(|p| entry_name(p))
            .collect();
        assert_eq!(names, vec!["a.nii", "b.tsv"]);
    }
}

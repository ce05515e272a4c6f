// ============================================================
// Layer 4 — Task File Discovery
// ============================================================
// Finds the train and test files of a bAbI task directory.
//
// The corpus ships one pair of files per task:
//
//   tasks_1-20_v1-2/en/
//     qa1_single-supporting-fact_train.txt
//     qa1_single-supporting-fact_test.txt
//     qa2_two-supporting-facts_train.txt
//     ...
//
// A file is selected when its name starts with `prefix` and
// ends with `<suffix>_train.txt` (train) or `<suffix>_test.txt`
// (test). An empty prefix and suffix select every task.
//
//   prefix "qa1_"            → task 1 only
//   suffix "supporting-fact" → tasks whose name ends that way
//
// Names are sorted, so the split order does not depend on the
// order the file system lists entries in.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::DataError;
use crate::domain::traits::{SplitFiles, SplitSource};

/// A directory of task files filtered by name.
#[derive(Debug, Clone)]
pub struct BabiDirectory {
    dir:    PathBuf,
    prefix: String,
    suffix: String,
}

impl BabiDirectory {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            dir:    dir.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Which split, if any, a file name belongs to
    fn classify(&self, name: &str) -> Option<SplitKind> {
        if !name.starts_with(&self.prefix) {
            return None;
        }
        if name.ends_with(&format!("{}_train.txt", self.suffix)) {
            Some(SplitKind::Train)
        } else if name.ends_with(&format!("{}_test.txt", self.suffix)) {
            Some(SplitKind::Test)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitKind {
    Train,
    Test,
}

impl SplitSource for BabiDirectory {
    fn split_files(&self) -> Result<SplitFiles, DataError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| DataError::io(&self.dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DataError::io(&self.dir, e))?;
            // Non UTF-8 names cannot match a text prefix/suffix anyway
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();

        let mut files = SplitFiles::default();
        for name in names {
            match self.classify(&name) {
                Some(SplitKind::Train) => files.train.push(self.dir.join(&name)),
                Some(SplitKind::Test)  => files.test.push(self.dir.join(&name)),
                None => tracing::trace!("Ignoring '{}'", name),
            }
        }

        tracing::debug!(
            "Found {} train and {} test files in '{}'",
            files.train.len(),
            files.test.len(),
            self.dir.display()
        );

        if files.train.is_empty() {
            tracing::warn!(
                "No training files in '{}' match prefix {:?} and suffix {:?}",
                self.dir.display(),
                self.prefix,
                self.suffix
            );
        }

        Ok(files)
    }
}

//! State-file key/path conventions.
//!
//! Pure string functions over `/`-delimited object keys. These define how
//! statewatch reads structure out of a Terraform state bucket.

/// Final path component every Terraform state object ends with.
pub const STATE_FILE_SUFFIX: &str = "terraform.tfstate";

/// Whether `key` names a Terraform state file. End-anchored: the key must
/// end with the literal suffix, a match elsewhere in the key does not count.
pub fn is_state_file(key: &str) -> bool {
    key.ends_with(STATE_FILE_SUFFIX)
}

/// An object key split into its `/`-delimited segments.
///
/// The naming-convention classifier and the cluster existence filter both
/// read positions out of this one parse, so the two can never disagree on
/// how a key is segmented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    pub fn parse(key: &'a str) -> Self {
        Self {
            segments: key.split('/').collect(),
        }
    }

    /// First segment of the key — the top-level directory convention.
    pub fn top_level(&self) -> Option<&'a str> {
        self.segments.first().copied()
    }

    /// The segment immediately before the final one: the directory the file
    /// lives in. For a per-cluster state file this is the cluster name.
    ///
    /// `None` when the key has fewer than two segments — such a key carries
    /// no directory to attribute ownership to.
    pub fn parent_dir(&self) -> Option<&'a str> {
        match self.segments.len() {
            0 | 1 => None,
            n => Some(self.segments[n - 2]),
        }
    }
}

//! Directory walking that skips entries it cannot read.
//!
//! Discovery looks at whole trees, and one unreadable or vanished directory
//! somewhere under the root must not hide everything else. Only the metadata
//! files themselves are fatal when they cannot be read.

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Entries of `walker`, in walk order, without the ones that failed.
///
/// Each failure is logged with `warn!`.
pub(crate) fn readable_entries(walker: WalkDir) -> impl Iterator<Item = DirEntry> {
    walker.into_iter().filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!("Skipping unreadable path during discovery: {}", err);
            None
        }
    })
}

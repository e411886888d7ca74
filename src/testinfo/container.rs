//! Container recipe for running a directory's sources.

use serde::{Deserialize, Serialize};

/// Image, tag, and commands used to build and run a source inside a
/// container.
///
/// Missing fields default to empty (and `build` to `None`); whether the
/// recipe is usable is answered by [`ContainerInfo::is_testable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Image to run
    #[serde(default)]
    pub image: String,
    /// Tag of the image
    #[serde(default)]
    pub tag: String,
    /// Command that runs the source inside the container
    #[serde(default)]
    pub cmd: String,
    /// Optional command that builds the source before `cmd` runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}

impl ContainerInfo {
    /// Create a container recipe without a build step.
    pub fn new(image: impl Into<String>, tag: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            tag: tag.into(),
            cmd: cmd.into(),
            build: None,
        }
    }

    /// Add a build step.
    #[must_use]
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// A recipe is testable when image, tag, and cmd are all non-empty.
    /// `build` never matters.
    #[must_use]
    pub fn is_testable(&self) -> bool {
        !self.image.is_empty() && !self.tag.is_empty() && !self.cmd.is_empty()
    }
}

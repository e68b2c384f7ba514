//! Generated artifact type.

/// A labeled unit of generated source text.
///
/// Consumers treat `label` as a filename stem and `content` as file text;
/// artifacts are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Filename stem.
    pub label: String,
    /// Generated source text.
    pub content: String,
}

impl Artifact {
    /// Creates a new artifact.
    #[must_use]
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Returns the file name the packaging step writes this artifact to.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.ts", self.label)
    }
}

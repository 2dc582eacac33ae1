use std::path::Path;
use std::sync::Arc;

use crate::allocator::IdAllocator;
use crate::docker::ContainerSource;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace(String);

impl Namespace {
    /// Final path segment with `-` and `_` removed.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let segment = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Namespace(segment.chars().filter(|c| !matches!(c, '-' | '_')).collect())
    }

    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::from_path(std::env::current_dir()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct NameGenerator<S> {
    namespace: Namespace,
    allocator: Arc<IdAllocator<S>>,
}

impl<S: ContainerSource> NameGenerator<S> {
    pub fn new(namespace: Namespace, allocator: Arc<IdAllocator<S>>) -> Self {
        Self {
            namespace,
            allocator,
        }
    }

    pub async fn generate_name(
        &self,
        explicit_name: Option<&str>,
        fallback_label: &str,
    ) -> Result<String> {
        let label = explicit_name.unwrap_or(fallback_label);
        let id = self.allocator.next_id().await?;

        Ok(format!("{}_{}_{}", self.namespace.as_str(), label, id))
    }
}

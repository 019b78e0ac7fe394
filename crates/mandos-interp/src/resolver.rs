//! File resolution for `file:` literals.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Errors a [`FileResolver`] can report.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not read file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file registered under `{0}`")]
    NotFound(String),
}

/// Turns the logical name of a `file:` literal into bytes.
///
/// Implementations are shared across threads by the interpreter and are
/// only ever called through `&self`.
pub trait FileResolver: Send + Sync {
    fn resolve_file_value(&self, name: &str) -> Result<Vec<u8>, ResolveError>;
}

/// Reads files relative to the scenario being interpreted.
///
/// Logical names are first looked up in the replacement table, then joined
/// onto the context directory unless already absolute.
#[derive(Debug, Clone, Default)]
pub struct DefaultFileResolver {
    context_dir: Option<PathBuf>,
    replacements: BTreeMap<String, String>,
}

impl DefaultFileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative names against `path`.
    ///
    /// `path` is normally the scenario file itself, in which case its parent
    /// directory is used. A directory is used as-is.
    pub fn set_context(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let dir = if path.is_dir() {
            path.to_path_buf()
        } else {
            path.parent().map(Path::to_path_buf).unwrap_or_default()
        };
        debug!("file resolver context set to {}", dir.display());
        self.context_dir = Some(dir);
    }

    pub fn with_context(mut self, path: impl AsRef<Path>) -> Self {
        self.set_context(path);
        self
    }

    /// Resolve the logical name `from` as if it were `to`.
    pub fn replace_path(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.replacements.insert(from.into(), to.into());
    }

    pub fn with_replaced_path(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.replace_path(from, to);
        self
    }

    pub fn context_dir(&self) -> Option<&Path> {
        self.context_dir.as_deref()
    }

    /// Filesystem path a logical name resolves to.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let name = self
            .replacements
            .get(name)
            .map(String::as_str)
            .unwrap_or(name);
        let path = Path::new(name);
        match &self.context_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl FileResolver for DefaultFileResolver {
    fn resolve_file_value(&self, name: &str) -> Result<Vec<u8>, ResolveError> {
        if name.is_empty() {
            return Ok(Vec::new());
        }
        let path = self.resolve_path(name);
        debug!("resolving file:{name} -> {}", path.display());
        fs::read(&path).map_err(|source| ResolveError::Io { path, source })
    }
}

/// In-memory files, keyed by logical name.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileResolver {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), contents.into());
    }

    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }
}

impl FileResolver for MemoryFileResolver {
    fn resolve_file_value(&self, name: &str) -> Result<Vec<u8>, ResolveError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_applies_before_context() {
        let r = DefaultFileResolver::new()
            .with_replaced_path("contract.wasm", "build/out.wasm");
        assert_eq!(r.resolve_path("contract.wasm"), PathBuf::from("build/out.wasm"));
        assert_eq!(r.resolve_path("other.wasm"), PathBuf::from("other.wasm"));
    }

    #[test]
    fn test_context_uses_parent_of_file() {
        let r = DefaultFileResolver::new().with_context("/no/such/dir/test.scen.json");
        assert_eq!(r.context_dir(), Some(Path::new("/no/such/dir")));
        assert_eq!(r.resolve_path("a.wasm"), PathBuf::from("/no/such/dir/a.wasm"));
        assert_eq!(r.resolve_path("/abs/a.wasm"), PathBuf::from("/abs/a.wasm"));
    }

    #[test]
    fn test_empty_name_is_empty_bytes() {
        assert_eq!(DefaultFileResolver::new().resolve_file_value("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_memory_resolver() {
        let r = MemoryFileResolver::new().with_file("a", b"abc".to_vec());
        assert_eq!(r.resolve_file_value("a").unwrap(), b"abc".to_vec());
        assert!(matches!(r.resolve_file_value("b"), Err(ResolveError::NotFound(n)) if n == "b"));
    }
}

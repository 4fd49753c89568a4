//! Filesystem-backed document store rooted at a vault directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::splice::Document;
use crate::store::types::{DocumentRef, DocumentStore, StoreError};

/// Store resolving notes by basename anywhere under the vault root.
#[derive(Debug)]
pub struct VaultStore {
    root: PathBuf,
    /// Folders to exclude from lookup (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultStore {
    /// Create a store for the given vault root.
    pub fn new(root: &Path) -> Result<Self, StoreError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a store with folder exclusions.
    ///
    /// Excluded folders can be relative to the vault root or absolute paths
    /// inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, StoreError> {
        let given = root;
        let root = root
            .canonicalize()
            .map_err(|_| StoreError::MissingRoot(root.display().to_string()))?;

        // Absolute exclusions may be spelled against either form of the root
        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root)
                        .or_else(|_| p.strip_prefix(given))
                        .unwrap_or(&p)
                        .to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All markdown notes under the root whose file stem equals `stem`.
    fn find_by_stem(&self, stem: &str) -> Result<Vec<PathBuf>, StoreError> {
        let mut matches = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry
                .map_err(|e| StoreError::Walk(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            if path.file_stem().and_then(|s| s.to_str()) == Some(stem) {
                matches.push(path.to_path_buf());
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        if is_skipped_name(&entry.file_name().to_string_lossy()) {
            return true;
        }

        entry
            .path()
            .strip_prefix(&self.root)
            .is_ok_and(|relative| self.in_excluded_folder(relative))
    }

    fn in_excluded_folder(&self, relative: &Path) -> bool {
        self.excluded_folders.iter().any(|ex| relative.starts_with(ex))
    }

    /// Resolve a vault-relative path, applying the same skips as the walk.
    ///
    /// Absolute paths, `.`/`..` segments and anything that ends up outside
    /// the root after following symlinks are not found.
    fn resolve_relative(&self, name: &str, stem: &str) -> Result<DocumentRef, StoreError> {
        let not_found = || StoreError::DocumentNotFound(name.to_string());
        let relative = PathBuf::from(format!("{stem}.md"));

        let mut names = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => names.push(part.to_string_lossy()),
                _ => return Err(not_found()),
            }
        }

        if names.iter().any(|n| is_skipped_name(n)) || self.in_excluded_folder(&relative) {
            return Err(not_found());
        }

        let path = self.root.join(&relative);
        let real = path.canonicalize().map_err(|_| not_found())?;
        if !real.starts_with(&self.root) || !real.is_file() {
            return Err(not_found());
        }

        debug!(name, path = %path.display(), "resolved note by path");
        Ok(DocumentRef { id: name.to_string(), path })
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }
}

impl DocumentStore for VaultStore {
    fn resolve(&self, name: &str) -> Result<DocumentRef, StoreError> {
        let stem = name.strip_suffix(".md").unwrap_or(name);

        // A name with a separator is a vault-relative path
        if stem.contains('/') {
            return self.resolve_relative(name, stem);
        }

        let mut candidates = self.find_by_stem(stem)?;
        match candidates.len() {
            0 => Err(StoreError::DocumentNotFound(name.to_string())),
            1 => {
                let path = candidates.remove(0);
                debug!(name, path = %path.display(), "resolved note by name");
                Ok(DocumentRef { id: name.to_string(), path })
            }
            _ => Err(StoreError::DocumentAmbiguous {
                name: name.to_string(),
                candidates: candidates.iter().map(|p| self.relative(p)).collect(),
            }),
        }
    }

    fn read_document(&self, doc: &DocumentRef) -> Result<Document, StoreError> {
        let content = fs::read_to_string(&doc.path)
            .map_err(|source| StoreError::Io { path: doc.path.clone(), source })?;
        Ok(Document::new(doc.id.clone(), content))
    }

    fn write_document(&self, doc: &DocumentRef, content: &str) -> Result<(), StoreError> {
        fs::write(&doc.path, content)
            .map_err(|source| StoreError::Io { path: doc.path.clone(), source })?;
        info!(note = %doc.id, path = %doc.path.display(), bytes = content.len(), "wrote note");
        Ok(())
    }
}

/// Hidden entries and common non-vault directories.
fn is_skipped_name(name: &str) -> bool {
    name.starts_with('.')
        || matches!(name, "node_modules" | "target" | "__pycache__" | "venv")
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}

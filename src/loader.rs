//! Document loader: walks the documentation root and reads every Markdown
//! file into a [`Document`].
//!
//! The category of a document is the first path segment under the root,
//! mapped through the fixed category table. Results are sorted by relative
//! path so that later documents deterministically win name collisions.

use apiref_core::category::category_for_path;
use apiref_core::extract::extract_title;
use apiref_core::Document;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::WalkDir;

use crate::config::DocsConfig;
use crate::error::LoadError;

pub fn load_documents(docs: &DocsConfig) -> Result<Vec<Document>, LoadError> {
    let root = &docs.root;
    if !root.is_dir() {
        return Err(LoadError::RootMissing(root.clone()));
    }

    let include_set = build_globset(&docs.include_globs)?;

    let mut default_excludes = vec!["**/.git/**".to_string()];
    default_excludes.extend(docs.exclude_globs.clone());
    let exclude_set = build_globset(&default_excludes)?;

    let mut documents = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(docs.follow_symlinks)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative_to_string(relative);

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }

        documents.push(read_document(path, rel_str)?);
    }

    // Walk order is per-directory; flatten it to a total order on the path.
    documents.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    tracing::info!(root = %root.display(), count = documents.len(), "loaded documents");
    Ok(documents)
}

fn read_document(path: &Path, relative_path: String) -> Result<Document, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let category = category_for_path(&relative_path);
    let title = extract_title(&content);

    tracing::trace!(path = %relative_path, %category, ?title, "read document");

    Ok(Document {
        file_path: path.display().to_string(),
        relative_path,
        category,
        content,
        title,
    })
}

/// `/`-separated form of a relative path, independent of platform.
fn relative_to_string(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

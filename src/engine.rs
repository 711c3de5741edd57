use crate::error::DircatError;
use crate::options::DircatOptions;
use crate::reader::{read_file, universal_newlines};
use crate::tree::{DirNode, build_tree};
use crate::types::{DircatResult, Extraction, TreeListing};
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::PathBuf;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &DircatOptions) -> Result<Self, DircatError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .require_git(false)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links);
        if options.sort_entries {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    DircatError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| DircatError::Walk(format!("Failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    /// Groups the walk into directories, each with the files directly inside it.
    ///
    /// Unreadable entries are skipped. Symlinked directories that are not
    /// followed belong to neither group.
    fn collect_dirs(self) -> Vec<DirNode> {
        let mut dirs: Vec<DirNode> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping unreadable entry: {}", _e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                index.insert(path.to_path_buf(), dirs.len());
                dirs.push(DirNode {
                    path: path.to_path_buf(),
                    files: Vec::new(),
                });
            } else if path.is_dir() {
                continue;
            } else if let Some(&slot) = path.parent().and_then(|parent| index.get(parent)) {
                dirs[slot].files.push(path.to_path_buf());
            }
        }
        dirs
    }
}
fn walk(options: &DircatOptions) -> Result<Vec<DirNode>, DircatError> {
    options.validate_root()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Walking {}", options.root.display());
    Ok(Walker::new(options)?.collect_dirs())
}
fn extract_from(dirs: &[DirNode], options: &DircatOptions) -> Extraction {
    let mut files = Extraction::default();
    for path in dirs
        .iter()
        .flat_map(|dir| dir.files.iter())
        .filter(|path| options.is_allowed(path))
    {
        let mut entry = read_file(path, options.decode_policy);
        if options.universal_newlines && !entry.read_failed && entry.content.contains('\r') {
            let translated = universal_newlines(&entry.content).into_owned();
            entry.content = translated;
        }
        files.push(entry);
    }
    files
}
/// Walks the root once and returns both the tree listing and the extracted files.
pub fn dircat(options: &DircatOptions) -> Result<DircatResult, DircatError> {
    let dirs = walk(options)?;
    let tree = build_tree(&options.root, &dirs);
    let files = extract_from(&dirs, options);
    Ok(DircatResult { tree, files })
}
/// Reads every allowlisted file under the root, in traversal order.
pub fn extract_texts(options: &DircatOptions) -> Result<Extraction, DircatError> {
    let dirs = walk(options)?;
    Ok(extract_from(&dirs, options))
}
/// Lists every directory and file under the root, regardless of extension.
pub fn list_tree(options: &DircatOptions) -> Result<TreeListing, DircatError> {
    let dirs = walk(options)?;
    Ok(build_tree(&options.root, &dirs))
}

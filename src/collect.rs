use std::{collections::VecDeque, path::PathBuf};

use log::{debug, info};

use crate::{
    config::Config,
    error::CollectError,
    index::Index,
    parser::parse_source_file,
};

/// Relative paths of every source file under the content root, breadth
/// first, sorted by file name within each directory. Hidden entries
/// (leading `.`) are skipped.
pub fn relative_sources(config: &Config) -> Result<Vec<PathBuf>, CollectError> {
    let mut sources = vec![];

    let mut q = VecDeque::new();
    q.push_back(PathBuf::new());
    while let Some(path) = q.pop_front() {
        let current = config.content_root.join(&path);
        let read_dir_error = |source| CollectError::ReadDir {
            path: current.clone(),
            source,
        };

        let mut entries = std::fs::read_dir(&current)
            .map_err(read_dir_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_dir_error)?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let file_name = entry.file_name();
            if file_name.to_string_lossy().starts_with('.') {
                debug!("skipping hidden entry {:?}", path.join(&file_name));
                continue;
            }
            let meta = entry.metadata().map_err(read_dir_error)?;
            if meta.is_dir() {
                q.push_back(path.join(&file_name));
            } else if meta.is_file() {
                sources.push(path.join(&file_name));
            }
        }
    }

    Ok(sources)
}

/// Parse every source under the content root into one [`Index`].
pub fn collect_index(config: &Config) -> Result<Index, CollectError> {
    let mut index = Index::new();
    for relative in relative_sources(config)? {
        index.add(parse_source_file(config, &relative)?);
    }
    info!(
        "collected {} records from {:?}",
        index.len(),
        config.content_root
    );
    Ok(index)
}


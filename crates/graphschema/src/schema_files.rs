use anyhow::Context;
use libgraphschema_parser::ast::Document;
use libgraphschema_parser::Source;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

pub(crate) const DEFAULT_FILE_EXTS: [&str; 2] = ["graphql", "graphqls"];

/// The schema files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct SchemaFiles {
    pub paths: Vec<PathBuf>,

    /// Files passed over because their extension did not match.
    pub num_skipped: usize,

    pub errors: Vec<walkdir::Error>,
}

/// Lowercases and strips any leading `.` so `.GraphQL` and `graphql` match
/// the same files.
pub(crate) fn normalize_file_exts(file_exts: &[String]) -> HashSet<String> {
    file_exts
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_schema_ext(path: &Path, file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| file_exts.contains(&ext))
}

/// Recursively collects files under `roots` whose extension is one of
/// `file_exts`, in a stable order.
///
/// A lone file argument is kept even when its extension does not match, on
/// the assumption that the user named it on purpose.
pub(crate) fn find_schema_files(roots: &[PathBuf], file_exts: &[String]) -> SchemaFiles {
    let file_exts = normalize_file_exts(file_exts);
    let mut found = SchemaFiles::default();

    log::debug!("Scanning {} input paths...", roots.len());
    for root in roots {
        let walker = WalkDir::new(root.as_path())
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!("Failed to walk an entry at/under {root:#?}.");
                    found.errors.push(e);
                    continue;
                },
            };
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if has_schema_ext(path, &file_exts) {
                log::trace!("Found schema file at {path:#?}.");
                found.paths.push(path.to_path_buf());
            } else {
                log::trace!("Skipping {path:#?}.");
                found.num_skipped += 1;
            }
        }
    }

    if found.paths.is_empty()
        && let [only_root] = roots
        && only_root.is_file()
    {
        log::warn!(
            "Proceeding with {only_root:#?} even though it doesn't match any \
            of the --file-exts ({}).",
            file_exts
                .iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.paths.push(only_root.clone());
    }

    log::debug!("Found {} schema files.", found.paths.len());
    found
}

/// Reads and parses one schema file, returning its text alongside the
/// document. Syntax errors carry the detailed, caret-pointed rendering.
pub(crate) fn parse_file(path: &Path) -> anyhow::Result<(String, Document)> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let source = Arc::new(Source::with_name(body.as_str(), path.display().to_string()));
    let document = libgraphschema_parser::parse(&source)
        .map_err(|error| anyhow::anyhow!(error.format_detailed()))?;
    log::debug!("Parsed {} definitions from {path:#?}.", document.definitions.len());
    Ok((body, document))
}

/// Runs [`parse_file`] on every path on the blocking pool, returning the
/// results in the order of `paths`.
pub(crate) async fn parse_files(
    paths: Vec<PathBuf>,
) -> anyhow::Result<Vec<(PathBuf, anyhow::Result<(String, Document)>)>> {
    let mut tasks = tokio::task::JoinSet::new();
    for (index, path) in paths.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let result = parse_file(&path);
            (index, path, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.context("A parse task failed to complete")?);
    }
    results.sort_by_key(|(index, _, _)| *index);
    Ok(results.into_iter().map(|(_, path, result)| (path, result)).collect())
}

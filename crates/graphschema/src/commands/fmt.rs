use crate::output_utils;
use crate::schema_files;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphschema_parser::lexer::SchemaLexer;
use libgraphschema_parser::Source;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct FmtCmd {
    #[arg(
        default_values_t=schema_files::DEFAULT_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter=',',
    )]
    file_exts: Vec<String>,

    #[arg(
        help="Rewrite files in place instead of printing them.",
        long,
        short='w',
    )]
    write: bool,

    #[arg(
        help="With --write, rewrite files even when that drops their `#` \
             comments.",
        long,
    )]
    discard_comments: bool,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files which need to be formatted.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// How [`format_file`] treats the file it formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FmtMode {
    /// Return the canonical text and leave the file alone.
    Print,
    /// Rewrite the file unless that would drop `#` comments.
    Write,
    /// Rewrite the file even if that drops `#` comments.
    WriteDiscardingComments,
}

/// What formatting one file amounted to.
#[derive(Debug, PartialEq)]
pub(crate) enum FmtOutcome {
    Unchanged,
    Rewritten,
    Printed(String),
    /// Left untouched because rewriting would have dropped this many
    /// comments.
    KeptComments(usize),
}

/// Formats `body` (already parsed into `document`), either rewriting the
/// file at `path` or returning the canonical text.
pub(crate) fn format_file(
    path: &Path,
    body: &str,
    document: &libgraphschema_parser::ast::Document,
    mode: FmtMode,
) -> anyhow::Result<FmtOutcome> {
    let printed = libgraphschema_parser::print(document)
        .with_context(|| format!("Failed to print {}", path.display()))?;
    if mode == FmtMode::Print {
        return Ok(FmtOutcome::Printed(printed));
    }
    if printed == body {
        return Ok(FmtOutcome::Unchanged);
    }
    if mode == FmtMode::Write {
        let source = Arc::new(Source::new(body));
        let num_comments = SchemaLexer::new(&source)
            .comment_spans()
            .map_err(|error| anyhow::anyhow!(error.format_detailed()))?
            .len();
        if num_comments > 0 {
            log::warn!(
                "Leaving {path:#?} untouched: formatting would drop {}. Pass \
                --discard-comments to rewrite it anyway.",
                output_utils::count(num_comments, "comment"),
            );
            return Ok(FmtOutcome::KeptComments(num_comments));
        }
    }
    std::fs::write(path, printed)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Formatted {path:#?}.");
    Ok(FmtOutcome::Rewritten)
}

#[inherent::inherent]
impl RunnableCommand for FmtCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = schema_files::find_schema_files(&self.file_or_dir_paths, &self.file_exts);
        if !found.errors.is_empty() {
            return CommandResult::failure(format_args!(
                "{} Failed to scan the input paths: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        let num_files = found.paths.len();
        let results = match schema_files::parse_files(found.paths).await {
            Ok(results) => results,
            Err(e) => return CommandResult::failure(format_args!("{} {e:#}", output_utils::RED_X)),
        };

        let mode = match (self.write, self.discard_comments) {
            (false, _) => FmtMode::Print,
            (true, false) => FmtMode::Write,
            (true, true) => FmtMode::WriteDiscardingComments,
        };
        let mut printed = vec![];
        let mut num_rewritten = 0;
        let mut kept_for_comments = vec![];
        let mut failures = vec![];
        for (path, result) in results {
            let outcome = result.and_then(|(body, document)| {
                format_file(&path, &body, &document, mode)
            });
            match outcome {
                Ok(FmtOutcome::Printed(text)) if num_files > 1 => {
                    printed.push(format!("# {}\n{text}", path.display()));
                },
                Ok(FmtOutcome::Printed(text)) => printed.push(text),
                Ok(FmtOutcome::Rewritten) => num_rewritten += 1,
                Ok(FmtOutcome::Unchanged) => {},
                Ok(FmtOutcome::KeptComments(_)) => kept_for_comments.push(path),
                Err(e) => failures.push(format!("{e:#}")),
            }
        }

        let stdout = if self.write {
            let mut summary = format!(
                "{} Rewrote {} of {}.",
                output_utils::GREEN_CHECK,
                num_rewritten,
                output_utils::count(num_files - failures.len(), "well-formed file"),
            );
            if !kept_for_comments.is_empty() {
                summary.push_str(&format!(
                    "\n{} Left {} with comments untouched (see --discard-comments):",
                    output_utils::RED_X,
                    output_utils::count(kept_for_comments.len(), "file"),
                ));
                for path in &kept_for_comments {
                    summary.push_str(&format!("\n  {}", path.display()));
                }
            }
            summary
        } else {
            printed.join("\n").trim_end().to_string()
        };

        if failures.is_empty() {
            CommandResult::success(format_args!("{stdout}"))
        } else {
            CommandResult::partial_failure(
                stdout,
                format!(
                    "{}\n\n{} {} of {} failed to parse and {} left untouched.",
                    failures.join("\n\n"),
                    output_utils::RED_X,
                    failures.len(),
                    output_utils::count(num_files, "file"),
                    if failures.len() == 1 { "was" } else { "were" },
                ),
            )
        }
    }
}

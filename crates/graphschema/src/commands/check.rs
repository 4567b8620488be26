use crate::output_utils;
use crate::schema_files;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=schema_files::DEFAULT_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter=',',
    )]
    file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
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

        let mut num_definitions = 0;
        let mut failures = vec![];
        for (path, result) in results {
            match result {
                Ok((_, document)) => num_definitions += document.definitions.len(),
                Err(e) => {
                    log::debug!("{path:#?} failed to parse.");
                    failures.push(format!("{e:#}"));
                },
            }
        }

        if !failures.is_empty() {
            return CommandResult::failure(format_args!(
                "{}\n\n{} {} of {} failed to parse.",
                failures.join("\n\n"),
                output_utils::RED_X,
                failures.len(),
                output_utils::count(num_files, "file"),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "{} All schema files parsed successfully:\n",
                "  * Checked {}.\n",
                "  * Skipped {}.\n",
                "  * Parsed {}.",
            ),
            output_utils::GREEN_CHECK,
            output_utils::count(num_files, "file"),
            output_utils::count(found.num_skipped, "non-schema file"),
            output_utils::count(num_definitions, "definition"),
        ))
    }
}

use crate::Cli;
use crate::CommandResult;
use crate::FsLoader;
use crate::RunnableCommand;
use crate::output_utils;
use libapimodel::DocumentModel;
use libapimodel::index::IndexConfig;
use libapimodel::node::Document;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        help="Fail when any reference is circular (circular references are \
             otherwise only reported).",
        long,
    )]
    fail_on_circular: bool,

    #[arg(
        default_values_t=[
            "yaml".to_string(),
            "yml".to_string(),
            "json".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    file_exts: Vec<String>,

    #[arg(
        help="Print the report as JSON on stdout.",
        long,
    )]
    json: bool,

    #[arg(
        help="Do not follow references to other files.",
        long,
    )]
    no_file_refs: bool,

    #[arg(
        help="Paths to one or more API description documents or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Outcome of checking one root document.
#[derive(Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    build_errors: Vec<String>,
    circular_references: Vec<String>,
    index_errors: Vec<String>,
    load_error: Option<String>,
    path: String,
    schema_errors: Vec<String>,
    schemas_checked: usize,
}
impl FileReport {
    fn error_count(&self, fail_on_circular: bool) -> usize {
        let circular = if fail_on_circular {
            self.circular_references.len()
        } else {
            0
        };
        self.build_errors.len()
            + circular
            + self.index_errors.len()
            + usize::from(self.load_error.is_some())
            + self.schema_errors.len()
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    files: Vec<FileReport>,
    scan_errors: Vec<String>,
    skipped_entries: usize,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_exts: HashSet<String> =
            self.file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut scan_errors = vec![];
        let mut skipped_entries = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            skipped_entries += 1;
                            continue;
                        }
                        let matches_ext = path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| file_exts.contains(&*ext));
                        if !matches_ext {
                            log::trace!("Skipping file with other extension: {path:#?}.");
                            skipped_entries += 1;
                            continue;
                        }
                        match std::fs::canonicalize(path) {
                            Ok(path) => file_paths.push(path),
                            Err(err) => scan_errors.push(format!("{}: {err}", path.display())),
                        }
                    },

                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        scan_errors.push(err.to_string());
                    },
                }
            }
        }

        // A single file named explicitly is checked regardless of its
        // extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --file-exts ({}).",
                file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            match std::fs::canonicalize(first_arg_path) {
                Ok(path) => file_paths.push(path),
                Err(err) => scan_errors.push(format!("{}: {err}", first_arg_path.display())),
            }
        }

        log::debug!("Found {} documents to be checked.", file_paths.len());

        let follow_file_refs = !self.no_file_refs;
        let handles: Vec<_> = file_paths.into_iter()
            .map(|path| tokio::task::spawn_blocking(move || check_file(&path, follow_file_refs)))
            .collect();
        let mut files = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(report) => files.push(report),
                Err(err) => scan_errors.push(format!("Checking a document panicked: {err}")),
            }
        }

        let report = CheckReport {
            files,
            scan_errors,
            skipped_entries,
        };
        let failed = !report.scan_errors.is_empty()
            || report.files.iter().any(|file| file.error_count(self.fail_on_circular) > 0);

        if self.json {
            return match serde_json::to_string_pretty(&report) {
                Ok(json) if failed => CommandResult::stdout_failure(format_args!("{json}")),
                Ok(json) => CommandResult::success(format_args!("{json}")),
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Unable to serialize the report: {err}",
                    output_utils::RED_X,
                )),
            };
        }

        if failed {
            CommandResult::stderr(format_args!(
                "{} API document check failed:\n{}",
                output_utils::RED_X,
                format_failures(&report, self.fail_on_circular),
            ))
        } else {
            CommandResult::success(format_args!(
                concat!(
                    "{}{} All API documents checked successfully:\n",
                    "  * Checked {} files.\n",
                    "  * Skipped {} other filesystem entries.\n",
                    "  * Built {} schemas.\n",
                    "  * Found {} circular references.",
                ),
                format_circular_warnings(&report),
                output_utils::GREEN_CHECK,
                report.files.len(),
                report.skipped_entries,
                report.files.iter().map(|file| file.schemas_checked).sum::<usize>(),
                report.files.iter().map(|file| file.circular_references.len()).sum::<usize>(),
            ))
        }
    }
}

fn check_file(path: &Path, follow_file_refs: bool) -> FileReport {
    let location = path.to_string_lossy().into_owned();
    let mut report = FileReport {
        path: location.clone(),
        ..FileReport::default()
    };

    let document = std::fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|text| {
            Document::from_yaml_str(location.as_str(), &text).map_err(|err| err.to_string())
        });
    let document = match document {
        Ok(document) => document,
        Err(err) => {
            report.load_error = Some(err);
            return report;
        },
    };

    let config = IndexConfig::new()
        .with_file_references(follow_file_refs)
        .with_loader(Arc::new(FsLoader));
    let model = match DocumentModel::from_documents(vec![document], config) {
        Ok(model) => model,
        Err(err) => {
            report.load_error = Some(err.to_string());
            return report;
        },
    };

    report.index_errors = model.index_errors().iter().map(ToString::to_string).collect();
    report.build_errors = model.errors().iter().map(ToString::to_string).collect();
    report.circular_references = model.index()
        .circular_references()
        .iter()
        .map(|entry| entry.pointer().to_string())
        .collect();
    model.walk_schemas(|visit| {
        report.schemas_checked += 1;
        if let Err(err) = visit.schema {
            report.schema_errors.push(format!("{}: {err}", visit.path));
        }
    });

    log::debug!(
        "Checked `{location}`: {} schemas, {} index errors, {} build errors.",
        report.schemas_checked,
        report.index_errors.len(),
        report.build_errors.len(),
    );
    report
}

fn format_failures(report: &CheckReport, fail_on_circular: bool) -> String {
    let mut lines = vec![];
    for err in &report.scan_errors {
        lines.push(format!("  * {err}"));
    }
    for file in &report.files {
        if file.error_count(fail_on_circular) == 0 {
            continue;
        }
        lines.push(format!("  {}:", file.path));
        lines.extend(file.load_error.iter().map(|err| format!("    * {err}")));
        lines.extend(file.index_errors.iter().map(|err| format!("    * {err}")));
        lines.extend(file.build_errors.iter().map(|err| format!("    * {err}")));
        lines.extend(file.schema_errors.iter().map(|err| format!("    * {err}")));
        if fail_on_circular {
            lines.extend(
                file.circular_references
                    .iter()
                    .map(|pointer| format!("    * Circular reference `{pointer}`")),
            );
        }
    }
    lines.join("\n")
}

fn format_circular_warnings(report: &CheckReport) -> String {
    report.files
        .iter()
        .flat_map(|file| {
            file.circular_references.iter().map(move |pointer| {
                format!(
                    "{} {}: circular reference `{pointer}`\n",
                    output_utils::YELLOW_WARNING,
                    file.path,
                )
            })
        })
        .collect()
}

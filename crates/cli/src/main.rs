use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use composer_forms::{
    Component, EditorConfig, EffectRouter, FileInputInspector, FileInputMsg, InspectorVisibility, JobEditor, JobEditorMsg,
    Outbound, StatusReporter,
};
use composer_types::{FileReference, InputDefinition, JobDocument};
use composer_util::{load_document, parse_assignment};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "composer", about = "Edit workflow jobs and file inputs from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Job editor commands
    #[command(subcommand)]
    Job(JobCommand),
    /// File input inspector commands
    #[command(subcommand)]
    File(FileCommand),
}

#[derive(Debug, Subcommand)]
enum JobCommand {
    /// Print the input definitions grouped by category
    Groups {
        /// Input definition list (.json, .yaml or .yml)
        #[arg(long)]
        inputs: PathBuf,
    },
    /// Apply `input_id=value` edits to a job and print the result
    Set {
        /// Input definition list (.json, .yaml or .yml)
        #[arg(long)]
        inputs: PathBuf,
        /// Existing job document; an empty job is used when omitted
        #[arg(long)]
        job: Option<PathBuf>,
        /// Assignments such as `threads=4` or `reads={"class":"File","path":"a.bam"}`
        #[arg(required = true)]
        assignments: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum FileCommand {
    /// Edit a file reference and print every update the inspector emits
    Edit {
        /// File reference document (.json, .yaml or .yml)
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        size: Option<u64>,
        #[arg(long)]
        contents: Option<String>,
        /// Replacement secondary file paths, in order
        #[arg(long = "secondary")]
        secondary: Vec<String>,
    },
}

struct LogStatusReporter;

impl StatusReporter for LogStatusReporter {
    fn instant(&self, message: &str) {
        info!("{message}");
    }
}

struct LogInspector;

impl InspectorVisibility for LogInspector {
    fn hide(&self) {
        debug!("inspector hidden");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = EditorConfig::from_environment();

    match cli.command {
        Command::Job(JobCommand::Groups { inputs }) => print_groups(&inputs, config),
        Command::Job(JobCommand::Set { inputs, job, assignments }) => set_job_values(&inputs, job.as_deref(), &assignments, config),
        Command::File(FileCommand::Edit {
            file,
            path,
            size,
            contents,
            secondary,
        }) => edit_file(&file, path, size, contents, secondary),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_inputs(path: &Path) -> Result<Vec<InputDefinition>> {
    load_document(path).with_context(|| format!("failed to load input definitions from {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_groups(inputs_path: &Path, config: EditorConfig) -> Result<()> {
    let mut editor = JobEditor::new(config);
    editor.update(JobEditorMsg::InputsChanged(load_inputs(inputs_path)?));
    print_json(editor.input_groups())
}

fn set_job_values(inputs_path: &Path, job_path: Option<&Path>, assignments: &[String], config: EditorConfig) -> Result<()> {
    let job = match job_path {
        Some(path) => load_document::<JobDocument>(path).with_context(|| format!("failed to load job from {}", path.display()))?,
        None => JobDocument::default(),
    };
    let edits = assignments
        .iter()
        .map(|raw| parse_assignment(raw).with_context(|| format!("invalid assignment '{raw}'")))
        .collect::<Result<Vec<_>>>()?;

    let status = LogStatusReporter;
    let inspector = LogInspector;
    let mut router = EffectRouter::new(&status, &inspector);
    let mut editor = JobEditor::new(config);
    router.route(editor.init());
    router.route(editor.update(JobEditorMsg::InputsChanged(load_inputs(inputs_path)?)));
    router.route(editor.update(JobEditorMsg::JobChanged(Arc::new(job))));

    for (input_id, value) in edits {
        if !editor.inputs().iter().any(|definition| definition.id == input_id) {
            debug!(input_id = %input_id, "assigning a value to an undeclared input");
        }
        router.route(editor.update(JobEditorMsg::EntryUpdated { input_id, value }));
    }
    router.route(editor.destroy());

    let updates = router.take_outbound().len();
    debug!(updates, "job edits applied");
    print_json(editor.job().as_ref())
}

fn edit_file(
    file_path: &Path,
    path: Option<String>,
    size: Option<u64>,
    contents: Option<String>,
    secondary: Vec<String>,
) -> Result<()> {
    let file: FileReference =
        load_document(file_path).with_context(|| format!("failed to load file reference from {}", file_path.display()))?;

    let status = LogStatusReporter;
    let panel = LogInspector;
    let mut router = EffectRouter::new(&status, &panel);
    let mut inspector = FileInputInspector::default();
    router.route(inspector.update(FileInputMsg::InputChanged(file)));
    router.route(inspector.init());

    let plain_fields_edited = path.is_some() || size.is_some() || contents.is_some();
    if let Some(path) = path {
        router.route(inspector.update(FileInputMsg::PathEdited(Some(path))));
    }
    if let Some(size) = size {
        router.route(inspector.update(FileInputMsg::SizeEdited(Some(size))));
    }
    if let Some(contents) = contents {
        router.route(inspector.update(FileInputMsg::ContentsEdited(Some(contents))));
    }
    if plain_fields_edited {
        router.route(inspector.update(FileInputMsg::RawChange));
    }
    if !secondary.is_empty() {
        router.route(inspector.update(FileInputMsg::SecondaryFilesEdited(secondary)));
    }
    router.route(inspector.destroy());

    for update in router.take_outbound() {
        if let Outbound::File(file) = update {
            print_json(&file)?;
        }
    }
    Ok(())
}

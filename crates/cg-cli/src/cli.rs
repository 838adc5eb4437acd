//! CLI argument definitions using clap derive API

use cg_core::CountResource;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// cohortgen - generate cohort and count-cube SQL for a clinical study
#[derive(Parser, Debug)]
#[command(name = "cg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to study directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert system,code,display CSV files into code-list views
    Csv(CsvArgs),

    /// Define a code-list view from a ValueSet JSON file
    Define(DefineArgs),

    /// Filter a ValueSet expansion by search terms
    Filter(FilterArgs),

    /// Write a one-row view of literal criteria values
    Criteria(CriteriaArgs),

    /// Write a view that unions several code-list views
    Union(UnionArgs),

    /// Write a count cube view
    Cube(CubeArgs),

    /// Generate every CSV view, cube and union listed in study.yml
    Make(MakeArgs),

    /// Print or check the structured-extraction schema
    Schema(SchemaArgs),

    /// Wrap plain-text notes as FHIR DocumentReference NDJSON
    Docref(DocrefArgs),
}

/// Arguments for the csv command
#[derive(Args, Debug)]
pub struct CsvArgs {
    /// CSV files in the value set directory (default: `valuesets` in study.yml)
    pub files: Vec<String>,
}

/// Where codes are read from in a ValueSet document
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSource {
    /// compose.include[].concept[]
    Compose,
    /// expansion.contains[]
    Expansion,
}

/// Kind of code-list view to write
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<prefix>__<name>`
    Define,
    /// `<prefix>__include_<name>`
    Include,
    /// `<prefix>__exclude_<name>`
    Exclude,
}

/// Arguments for the define command
#[derive(Args, Debug)]
pub struct DefineArgs {
    /// ValueSet JSON file in the value set directory
    pub file: String,

    /// View name, prefixed on write
    #[arg(short, long)]
    pub name: String,

    /// Section of the document codes are read from
    #[arg(long, value_enum, default_value = "compose")]
    pub from: CodeSource,

    /// Kind of view to write
    #[arg(short, long, value_enum, default_value = "define")]
    pub kind: ListKind,

    /// Keep only expansion entries matching any of these terms (implies --from expansion)
    #[arg(short, long)]
    pub search: Vec<String>,
}

/// Arguments for the filter command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// ValueSet JSON file in the value set directory
    pub file: String,

    /// Case-insensitive search terms matched against "<code> <display>"
    #[arg(short, long, required = true)]
    pub search: Vec<String>,

    /// Output file name in the value set directory
    #[arg(short, long)]
    pub output: String,
}

/// Arguments for the criteria command
#[derive(Args, Debug)]
pub struct CriteriaArgs {
    /// View name, prefixed on write
    pub name: String,

    /// Column names (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// SQL literal value, repeated once per column in column order (e.g. `--value "'a,b'"`)
    #[arg(long = "value", required = true)]
    pub values: Vec<String>,
}

/// Arguments for the union command
#[derive(Args, Debug)]
pub struct UnionArgs {
    /// Output view name, prefixed on write
    pub name: String,

    /// Source code-list views
    #[arg(required = true)]
    pub views: Vec<String>,
}

/// Resource counted by a cube
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceArg {
    Patient,
    Encounter,
    Document,
}

impl From<ResourceArg> for CountResource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Patient => CountResource::Patient,
            ResourceArg::Encounter => CountResource::Encounter,
            ResourceArg::Document => CountResource::Document,
        }
    }
}

/// Arguments for the cube command
#[derive(Args, Debug)]
pub struct CubeArgs {
    /// Line-level source table
    pub source: String,

    /// Grouping columns (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Resource whose distinct references are counted
    #[arg(short, long, value_enum, default_value = "patient")]
    pub resource: ResourceArg,

    /// Minimum distinct subjects per cell (default: `min_subject` in study.yml)
    #[arg(long, env = "CG_MIN_SUBJECT")]
    pub min_subject: Option<u32>,

    /// Explicit output name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Filter clause on source rows (repeatable)
    #[arg(long = "where")]
    pub where_clauses: Vec<String>,
}

/// Arguments for the make command
#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Minimum distinct subjects per cell for every cube, including cubes that set their own
    #[arg(long, env = "CG_MIN_SUBJECT")]
    pub min_subject: Option<u32>,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Annotation JSON files to check against the schema instead of printing it
    #[arg(long)]
    pub check: Vec<String>,

    /// Write the schema document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the docref command
#[derive(Args, Debug)]
pub struct DocrefArgs {
    /// Plain-text note files
    #[arg(required = true)]
    pub notes: Vec<String>,

    /// Directory NDJSON files are written to
    #[arg(short, long)]
    pub output: String,

    /// Patient id per note (comma-separated; default: patient-1, patient-2, ...)
    #[arg(long, value_delimiter = ',')]
    pub subjects: Vec<String>,

    /// Encounter id per note (comma-separated; default: enc-1, enc-2, ...)
    #[arg(long, value_delimiter = ',')]
    pub encounters: Vec<String>,
}

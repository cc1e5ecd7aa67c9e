use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::render::OutputFormat;
use crate::repair::RepairStrategy;
use crate::table::TableKind;

#[derive(Parser, Debug)]
#[command(
    name = "recruit-data",
    version,
    about = "Builds the recruiting site's company data module from the CSV exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Parse, join and write the company data module")]
    Build(BuildArgs),
    #[command(about = "Report dropped rows, duplicate names and companies missing data")]
    Check(CheckArgs),
    #[command(about = "Reassemble dropped rows of one table into a separate CSV for review")]
    Repair(RepairArgs),
    #[command(
        about = "Write copies of the three tables without the named companies; kept records are copied byte for byte"
    )]
    Prune(PruneArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    #[arg(long, default_value = "公司介绍.csv")]
    pub profile_csv: PathBuf,

    #[arg(long, default_value = "企业图片.csv")]
    pub image_csv: PathBuf,

    #[arg(long, default_value = "企业业务板块和内推岗位.csv")]
    pub business_csv: PathBuf,
}

impl SourceArgs {
    pub fn path_for(&self, kind: TableKind) -> PathBuf {
        let file = match kind {
            TableKind::Profile => &self.profile_csv,
            TableKind::Images => &self.image_csv,
            TableKind::Business => &self.business_csv,
        };
        self.data_dir.join(file)
    }
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Module)]
    pub format: OutputFormat,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Fail instead of warning when any source row was dropped"
    )]
    pub strict: bool,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    pub list_limit: usize,
}

#[derive(Args, Debug, Clone)]
pub struct RepairArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[arg(long, value_enum, default_value_t = TableKind::Profile)]
    pub table: TableKind,

    #[arg(long, value_enum, default_value_t = RepairStrategy::Realign)]
    pub strategy: RepairStrategy,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PruneArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[arg(long = "company", required = true)]
    pub companies: Vec<String>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

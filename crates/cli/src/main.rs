mod clipboard;
mod cmd;
mod logging;
mod prompt;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tb", version, about = "Fill «placeholder» text templates from the terminal")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List catalog entries (category, template, shortcut)
    List(ListArgs),

    /// Show the input controls a template asks for
    Vars(VarsArgs),

    /// Fill a template's placeholders and print the result
    Fill(FillArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict to one category
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print "category/template" lines only
    #[arg(long)]
    pub quiet: bool,
}

/// How to pick a catalog record.
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Category of the template
    #[arg(long)]
    pub category: Option<String>,

    /// Template name within the category
    #[arg(long)]
    pub template: Option<String>,

    /// Look the template up by its shortcut instead
    #[arg(long, conflicts_with_all = ["category", "template"])]
    pub shortcut: Option<String>,
}

#[derive(Debug, Args)]
pub struct VarsArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FillArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Pre-filled value as NAME=VALUE (repeatable); checkbox variables
    /// accept true/false, yes/no, on/off, 1/0
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Never prompt; variables without a --var keep their defaults
    #[arg(long)]
    pub batch: bool,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::List(args) => {
            cmd::list::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Vars(args) => {
            cmd::vars::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Fill(args) => {
            cmd::fill::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
    }
}

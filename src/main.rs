use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use revgraph::commands::GraphView;
use revgraph::commands::plumbing::rows::RowsOptions;
use revgraph::commands::porcelain::render::RenderOptions;
use revgraph::dag::dag_file::DagFile;
use revgraph::domain::revision::Revision;
use revgraph::term::PagerWriter;
use revgraph::{ColorMode, GlyphSet};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "revgraph",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Render revision DAGs as text commit graphs",
    long_about = "revgraph lays out revision DAGs the way a history viewer does: \
    one row per revision, walked from the highest number down, with columns, \
    lane colors and connecting edges computed incrementally along the way.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "render",
        about = "Render a DAG description as a commit graph",
        long_about = "This command parses a DAG description and draws the walked revision range \
        as a text commit graph. Long output is paged when stdout is a terminal."
    )]
    Render {
        #[arg(index = 1, help = "Path to the DAG description; stdin when omitted")]
        file: Option<PathBuf>,
        #[arg(
            long,
            help = "Revision to start the walk from (defaults to the highest defined)"
        )]
        start: Option<u64>,
        #[arg(
            long,
            default_value_t = 0,
            help = "Lowest revision to walk down to, inclusive"
        )]
        stop: u64,
        #[arg(
            long,
            value_enum,
            default_value_t = GlyphSet::Unicode,
            help = "Character set used for drawing"
        )]
        glyphs: GlyphSet,
        #[arg(
            long,
            value_enum,
            default_value_t = ColorMode::Auto,
            help = "When to colorize graph lanes"
        )]
        color: ColorMode,
        #[arg(long, help = "Write straight to stdout instead of paging")]
        no_pager: bool,
    },
    #[command(
        name = "rows",
        about = "Dump the raw row geometry of a walk",
        long_about = "This command prints one line per walked revision with its column, color, \
        parents and edges. The output format is stable and meant for scripts."
    )]
    Rows {
        #[arg(index = 1, help = "Path to the DAG description; stdin when omitted")]
        file: Option<PathBuf>,
        #[arg(
            long,
            help = "Revision to start the walk from (defaults to the highest defined)"
        )]
        start: Option<u64>,
        #[arg(
            long,
            default_value_t = 0,
            help = "Lowest revision to walk down to, inclusive"
        )]
        stop: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Render {
            file,
            start,
            stop,
            glyphs,
            color,
            no_pager,
        } => {
            color.apply();
            let dag = load_dag(file.as_deref())?;
            let opts = RenderOptions {
                start: start.map(Revision::new),
                stop: Revision::new(*stop),
                glyphs: *glyphs,
            };

            if *no_pager
                || std::env::var_os("NO_PAGER").is_some()
                || !std::io::stdout().is_terminal()
            {
                let view = GraphView::new(dag, Box::new(std::io::stdout()));
                view.render(&opts)?
            } else {
                let pager = minus::Pager::new();
                let view = GraphView::new(dag, Box::new(PagerWriter::new(pager.clone())));
                view.render(&opts)?;
                minus::page_all(pager)?
            }
        }
        Commands::Rows { file, start, stop } => {
            let dag = load_dag(file.as_deref())?;
            let view = GraphView::new(dag, Box::new(std::io::stdout()));

            view.rows(&RowsOptions {
                start: start.map(Revision::new),
                stop: Revision::new(*stop),
            })?
        }
    }

    Ok(())
}

fn load_dag(file: Option<&Path>) -> Result<DagFile> {
    match file {
        Some(path) => DagFile::load(path),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read DAG description from stdin")?;

            DagFile::parse(&text)
        }
    }
}

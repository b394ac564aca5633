use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mazewalk::{
    grid::{CellMarker, Grid},
    logger::{DevLogger, NullSink, StepSink},
    position::Position,
    solver::Algorithm,
    MazeError,
};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mazewalk", version, about = "Explore a grid maze breadth- or depth-first, logging each step")]
struct Cli {
    /// Path to a maze file (rows of comma-separated two-char cells: "  ", XX, SP, FP). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Exploration order
    #[arg(short, long, value_enum, default_value_t=Method::Bfs)]
    method: Method,

    /// Step-by-step mode (pauses after each devlog step). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum devlogs to write (0 = unlimited)
    #[arg(long, default_value_t=0)]
    max_logs: usize,

    /// Emit devlogs to console with colors
    #[arg(long)]
    color: bool,

    /// Directory for devlog files
    #[arg(long, default_value = "devlogs")]
    log_dir: PathBuf,

    /// Skip devlogs; only print the result
    #[arg(short, long)]
    quiet: bool,

    /// Print the exploration tree as an indented outline
    #[arg(long)]
    outline: bool,

    /// Print the exploration tree as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Method { Bfs, Dfs }

fn read_maze(input: &Option<PathBuf>) -> Result<Grid> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(s.parse::<Grid>()?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut grid = read_maze(&cli.input).context("parse maze")?;
    let start = grid.find(CellMarker::Start).ok_or(MazeError::MissingMarker("start"))?;
    let finish = grid.find(CellMarker::Finish).ok_or(MazeError::MissingMarker("finish"))?;

    let algorithm = match cli.method {
        Method::Bfs => Algorithm::Bfs,
        Method::Dfs => Algorithm::Dfs,
    };

    let mut devlog = if cli.quiet { None } else { Some(DevLogger::new(&cli.log_dir, cli.color, cli.step, cli.max_logs)?) };
    let mut quiet = NullSink;
    let sink: &mut dyn StepSink = match devlog.as_mut() {
        Some(l) => l,
        None => &mut quiet,
    };

    let mut search = algorithm.searcher();
    let outcome = search.solve(&mut grid, &Position::at(start), finish, sink)?;

    let summary = match outcome.tree() {
        None => format!("{}: NOT FOUND", search.name()),
        Some(tree) => {
            let mut s = format!("{}: explored {} cells", search.name(), tree.len());
            if let Some(fp) = tree.finish() {
                let path: Vec<String> = tree.path_to(fp).iter().map(ToString::to_string).collect();
                s.push_str(&format!("\nPath to finish ({} steps): {}", tree.depth(fp), path.join(" -> ")));
            }
            s
        }
    };
    if let Some(l) = devlog.as_mut() { l.log("Result", &summary)?; }

    println!("\n{}", summary);
    if let Some(tree) = outcome.tree() {
        print!("{}", grid.to_pretty_string(cli.color));
        #[cfg(feature = "serde")]
        if cli.json { println!("{}", tree.to_json()?); }
        if cli.outline { print!("{}", tree.to_outline()); }
    }
    Ok(())
}

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};

use crate::grid::Grid;

/// Receives a read-only snapshot of the grid after each change the search makes.
pub trait StepSink {
    fn step(&mut self, title: &str, grid: &Grid) -> Result<()>;
}

/// Discards every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StepSink for NullSink {
    fn step(&mut self, _title: &str, _grid: &Grid) -> Result<()> { Ok(()) }
}

/// Keeps `(title, grid text)` pairs in memory.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub steps: Vec<(String, String)>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn last_grid(&self) -> Option<&str> { self.steps.last().map(|(_, g)| g.as_str()) }
}

impl StepSink for Recorder {
    fn step(&mut self, title: &str, grid: &Grid) -> Result<()> {
        self.steps.push((title.to_string(), grid.to_text()));
        Ok(())
    }
}

/// Writes each step to `devlog(N).txt` and echoes it to the console.
pub struct DevLogger {
    dir: PathBuf,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        Ok(Self { dir, color, step, max_logs, counter: 0 })
    }

    /// Steps written so far.
    pub fn written(&self) -> usize { self.counter }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> { self.emit(title, details, details) }

    // file copy stays plain even when the console copy is colored
    fn emit(&mut self, title: &str, details: &str, console: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = self.dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path).with_context(|| format!("writing {}", path.display()))?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), console);
        } else {
            println!("➤ {}\n{}", title, console);
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io;
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }
}

impl StepSink for DevLogger {
    fn step(&mut self, title: &str, grid: &Grid) -> Result<()> {
        let plain = format!("{}\n--------------", grid.to_pretty_string(false));
        if !self.color { return self.emit(title, &plain, &plain); }
        let console = format!("{}\n--------------", grid.to_pretty_string(true));
        self.emit(title, &plain, &console)
    }
}

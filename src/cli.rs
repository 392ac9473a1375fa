use clap::{Parser, Subcommand};
use cppview::services::ports::{ExplorerConfig, WorkspaceFolder};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cppview", version, about = "C/C++ aware workspace explorer")]
pub struct Cli {
    /// Lines read from the top of a source file when looking for includes.
    #[arg(long, global = true)]
    pub scan_lines: Option<usize>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Print the fully expanded tree.
    Tree {
        roots: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Reprint the tree whenever the first root changes.
    Watch { roots: Vec<PathBuf> },
    /// Run one panel command, e.g. `cppView.createFile`.
    Exec {
        command_id: String,
        path: Option<PathBuf>,
        #[arg(long = "root")]
        roots: Vec<PathBuf>,
    },
}

impl Cli {
    pub fn config(&self) -> ExplorerConfig {
        let mut config = ExplorerConfig::default();
        if let Some(lines) = self.scan_lines {
            config.include_scan_lines = lines;
        }
        config
    }
}

/// Workspace folders for `roots`, defaulting to the current directory.
pub fn workspace_folders(roots: &[PathBuf]) -> std::io::Result<Vec<WorkspaceFolder>> {
    if roots.is_empty() {
        let cwd = std::env::current_dir()?;
        return Ok(vec![WorkspaceFolder::from_path(cwd)]);
    }
    roots
        .iter()
        .map(|root| root.canonicalize().map(WorkspaceFolder::from_path))
        .collect()
}

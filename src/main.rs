use clap::Parser;
use cppview::services::adapters::LocalFileProvider;
use cppview::services::ports::ExplorerConfig;
use cppview::services::RefreshReceiver;
use cppview::views::{expand_tree, render_text};
use cppview::{ActionOutcome, CppViewPanel};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod cli;
mod logging;
mod terminal_host;

use cli::{Cli, CliCommand};
use terminal_host::TerminalHost;

const WATCH_POLL: Duration = Duration::from_millis(200);

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logging = logging::init();
    let config = cli.config();

    let result = match cli.command {
        CliCommand::Tree { roots, json } => print_tree(&roots, config, json),
        CliCommand::Watch { roots } => watch(&roots, config),
        CliCommand::Exec {
            command_id,
            path,
            roots,
        } => exec(&command_id, path, &roots, config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("cppview: {}", e);
            ExitCode::FAILURE
        }
    }
}

type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

fn open_panel(
    roots: &[PathBuf],
    config: ExplorerConfig,
) -> std::io::Result<CppViewPanel<TerminalHost>> {
    let folders = cli::workspace_folders(roots)?;
    Ok(CppViewPanel::new(
        TerminalHost::new(folders),
        Box::new(LocalFileProvider::new()),
        config,
    ))
}

fn print_tree(roots: &[PathBuf], config: ExplorerConfig, json: bool) -> CliResult {
    let panel = open_panel(roots, config)?;
    let tree = expand_tree(&panel.builder());
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        println!("{}", panel.title());
        print!("{}", render_text(&tree));
    }
    Ok(ExitCode::SUCCESS)
}

fn watch(roots: &[PathBuf], config: ExplorerConfig) -> CliResult {
    let term = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&term))?;
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&term))?;

    let mut panel = open_panel(roots, config)?;
    if !panel.activate() {
        return Err("could not watch the workspace".into());
    }

    let redraw = |panel: &CppViewPanel<TerminalHost>| {
        println!("== {} ==", panel.title());
        print!("{}", render_text(&expand_tree(&panel.builder())));
    };
    redraw(&panel);

    redraw_on_refresh(panel.refresh_receiver(), &term, || redraw(&panel));

    panel.deactivate();
    Ok(ExitCode::SUCCESS)
}

/// One redraw per refresh signal, until `stop` is raised.
fn redraw_on_refresh(refresh: &RefreshReceiver, stop: &AtomicBool, mut redraw: impl FnMut()) {
    while !stop.load(Ordering::Relaxed) {
        if refresh.recv_timeout(WATCH_POLL) {
            tracing::debug!("refresh");
            redraw();
        }
    }
}

fn exec(
    command_id: &str,
    path: Option<PathBuf>,
    roots: &[PathBuf],
    config: ExplorerConfig,
) -> CliResult {
    let panel = open_panel(roots, config)?;
    let node = match path {
        Some(path) => Some(panel.builder().node_for_path(&path.canonicalize()?)?),
        None => None,
    };

    // failures were already reported through the host
    match panel.run_command_id(command_id, node.as_ref()) {
        Ok(ActionOutcome::Cancelled) => Ok(ExitCode::from(2)),
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

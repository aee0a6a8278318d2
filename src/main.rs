mod app;
mod components;
mod config;
mod error;
mod event;
mod fs;
mod handler;
mod icons;
mod logging;
mod navigation;
mod theme;
mod tui;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use crate::app::{App, ViewSettings};
use crate::config::{AppConfig, GeneralConfig, LogConfig, ThemeConfig, TreeConfig};
use crate::error::{AppError, Result};
use crate::event::{Event, EventSource};
use crate::tui::{install_panic_hook, Tui};

/// Browse a directory tree in the terminal.
#[derive(Parser, Debug)]
#[command(name = "ftree", version, about)]
struct Cli {
    /// Root directory to browse (defaults to the current directory)
    path: Option<PathBuf>,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use ASCII markers instead of Nerd Font icons
    #[arg(long)]
    no_icons: bool,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Color scheme: dark, light or custom
    #[arg(long)]
    theme: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Config overrides carried by command-line flags.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                mouse: self.no_mouse.then_some(false),
            },
            tree: TreeConfig {
                use_icons: self.no_icons.then_some(false),
                indent_width: None,
            },
            theme: ThemeConfig {
                scheme: self.theme.clone(),
                custom: None,
            },
            log: LogConfig {
                file: self.log_file.clone(),
                level: None,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the root directory: the given path or the working directory.
fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let root = path
        .canonicalize()
        .map_err(|_| AppError::InvalidPath(format!("{} does not exist", path.display())))?;
    if !root.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));

    if let Some(log_file) = config.log_file() {
        logging::init_global(&log_file, config.log_level());
    }

    let root = resolve_root(cli.path.as_deref())?;
    tracing::info!(root = %root.display(), "starting");

    // The whole tree is built before any UI is shown.
    let mut app = App::new(&root, ViewSettings::from_config(&config))?;

    install_panic_hook();
    let mut tui = Tui::new(config.mouse_enabled())?;
    let size = tui.size()?;
    app.resize(size.width, size.height);

    let result = run_loop(&mut tui, &mut app);
    tui.restore()?;
    result
}

/// Draw, wait for one event, apply it; until quit.
fn run_loop(tui: &mut Tui, app: &mut App) -> Result<()> {
    let mut events = EventSource::new();

    while !app.should_quit {
        tui.terminal_mut().draw(|frame| ui::render(app, frame))?;

        match events.next()? {
            Event::Key(key) => handler::handle_key_event(app, key),
            Event::Mouse(mouse) => handler::handle_mouse_event(app, mouse),
            Event::Resize(width, height) => app.resize(width, height),
        }
    }

    tracing::info!("quit");
    Ok(())
}

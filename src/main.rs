mod app;
mod domain;
mod error;
mod feed;
mod filter;
mod input;
mod notifications;
mod persistence;
mod scheduler;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_data_dir, format_legacy_reminder, init_local_data_dir, log_file, write_export,
    FileStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use store::ItemStore;

#[derive(Parser)]
#[command(name = "daydesk")]
#[command(about = "A terminal dashboard for tasks, notes and reminders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .daydesk directory in the current directory
    Init,
    /// Add a task without opening the dashboard
    Add {
        /// Task text
        text: String,
    },
    /// Print stored tasks, notes and reminders
    List,
    /// Write a JSON backup of all data
    Export {
        /// Output file or directory. Defaults to the current directory.
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Remove all stored data
    Clear {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.command {
        Some(Commands::Init) => init_local_data_dir()?,
        _ => ensure_data_dir()?,
    };
    init_logging(&data_dir)?;
    log::info!("Using data directory {}", data_dir.display());

    match cli.command {
        Some(Commands::Init) => {
            println!("Initialized daydesk directory: {}", data_dir.display());
            println!();
            println!("daydesk will now use this local directory for storage.");
            println!("Run 'daydesk' to open the dashboard.");
            Ok(())
        }
        Some(Commands::Add { text }) => {
            let mut store = open_store(&data_dir);
            store.add_task(&text)?;
            println!("Task added: {}", text.trim());
            Ok(())
        }
        Some(Commands::List) => {
            let store = open_store(&data_dir);
            print_listing(&store);
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let store = open_store(&data_dir);
            let output = match output {
                Some(path) => PathBuf::from(path),
                None => std::env::current_dir()?,
            };
            let path = write_export(store.storage(), &output, Utc::now())?;
            println!("Exported data to {}", path.display());
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                anyhow::bail!("Refusing to clear data without --yes");
            }
            let mut store = open_store(&data_dir);
            store.clear_all();
            println!("All data cleared");
            Ok(())
        }
        None => run_tui(&data_dir),
    }
}

/// Send log output to the data directory so it never garbles the terminal UI
fn init_logging(data_dir: &Path) -> Result<()> {
    let path = log_file(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn open_store(data_dir: &Path) -> ItemStore {
    ItemStore::load(Box::new(FileStore::new(data_dir)))
}

fn print_listing(store: &ItemStore) {
    let stats = store.stats();
    println!("Tasks ({})", stats.task_summary());
    for task in store.tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {:<6} {}", mark, task.priority.to_tag(), task.text);
    }

    println!();
    println!("Notes ({})", store.notes().len());
    for note in store.notes() {
        println!("  {}  {}", note.timestamp, note.text);
    }

    println!();
    println!("Reminders ({})", store.reminders().len());
    for reminder in store.reminders() {
        println!("  {}", format_legacy_reminder(reminder));
    }
}

fn run_tui(data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir);
    let export_dir = std::env::current_dir()?;
    let mut app = AppState::new(store, export_dir);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("Dashboard exited with error: {:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now(), Local::now());
    }
}

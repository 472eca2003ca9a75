use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::path::PathBuf;

use scrollthumb::app::App;
use scrollthumb::config::Config;
use scrollthumb::error::{self, AppError, ConfigError};
use scrollthumb::events::{Action, EventHandler};
use scrollthumb::pane::ScrollPane;
use scrollthumb::{log, tui};

const USAGE: &str = "\
Usage: scrollthumb [FILE] [OPTIONS]

Show FILE (or built-in sample text) in a scrollable pane with a draggable
scrollbar overlay and a scroll activity indicator.

Options:
  -q, --quiet-ms <MS>    Quiet period before the activity flag clears
  -o, --offset <PX>      Pixels added to the rendered thumb position
  -a, --always-active    Keep the scrollbar visible without hovering
  -h, --help             Print this help";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    file: Option<PathBuf>,
    quiet_period_ms: Option<u64>,
    thumb_offset: Option<f64>,
    always_active: Option<bool>,
    help: bool,
}

fn parse_args(args: &[String]) -> error::Result<CliArgs> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--quiet-ms" | "-q" => {
                let value = option_value(args, i, "quiet-ms")?;
                cli.quiet_period_ms = Some(value.parse().map_err(|_| invalid("quiet-ms", value))?);
                i += 2;
                continue;
            }
            "--offset" | "-o" => {
                let value = option_value(args, i, "offset")?;
                let offset: f64 = value.parse().map_err(|_| invalid("offset", value))?;
                if !offset.is_finite() {
                    return Err(invalid("offset", value));
                }
                cli.thumb_offset = Some(offset);
                i += 2;
                continue;
            }
            "--always-active" | "-a" => cli.always_active = Some(true),
            "--help" | "-h" => cli.help = true,
            arg if !arg.starts_with('-') => cli.file = Some(PathBuf::from(arg)),
            arg => {
                eprintln!("Warning: ignoring unknown option '{}'", arg);
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn option_value<'a>(args: &'a [String], i: usize, key: &'static str) -> error::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| invalid(key, "<missing>"))
}

fn invalid(key: &'static str, value: &str) -> AppError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
    .into()
}

fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)
        .map_err(|e| AppError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| AppError::Terminal(e.to_string()))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Precedence: CLI > env var > config file > default
    let config =
        Config::load().with_overrides(cli.quiet_period_ms, cli.thumb_offset, cli.always_active);
    log::log(&format!("Config: {:?}", config));

    let (pane, title) = match &cli.file {
        Some(path) => (
            ScrollPane::from_file(path, config.cell_height())?,
            path.display().to_string(),
        ),
        None => (ScrollPane::sample(config.cell_height()), "sample".to_string()),
    };

    let mut terminal = setup_terminal()?;
    let mut app = App::new(pane, title, config);

    let result = run_app(&mut terminal, &mut app).await;

    app.shutdown();
    restore_terminal(&mut terminal)?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut scrolling = app.activity.scrolling.clone();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if !matches!(action, Action::None | Action::PointerMove { .. }) {
                            log::log_event(&format!("{:?}", action));
                        }
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            // The quiet-period timer flipped the activity flag; redraw
            Ok(()) = scrolling.changed() => {}
        }
    }

    Ok(())
}

//! Binary entrypoint for the termquest CLI.
//!
//! Commands:
//! - `play [--username <name>] [--hostname <name>]` - interactive session on stdin/stdout
//! - `replay <script> [--json]` - run a file of commands and print the transcript
//! - `init` - create a starter `termquest.toml`
//!
//! See the library crate docs for module-level details: `termquest::`.
use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use termquest::config::{Config, DEFAULT_CONFIG_PATH};
use termquest::new_session;
use termquest::terminal::{ControlCommand, Emphasis, Severity, TranscriptRecord};
use termquest::GameSession;

const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Parser)]
#[command(name = "termquest")]
#[command(about = "A text adventure played through a terminal-style command interpreter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play {
        /// Initial username (overrides the config file)
        #[arg(short, long)]
        username: Option<String>,

        /// Initial hostname (overrides the config file)
        #[arg(long)]
        hostname: Option<String>,
    },
    /// Feed a script of commands through a fresh session
    Replay {
        /// File with one command per line; blank lines are skipped
        script: String,

        /// Print the final session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(None, cli.verbose);
            info!("Initializing new termquest configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Configuration file created at {}", cli.config);
        }
        Commands::Play { username, hostname } => {
            let mut config = Config::load_or_default(&cli.config).await?;
            config.apply_overrides(username, hostname);
            config.validate()?;
            init_logging(Some(&config), cli.verbose);
            info!("Starting termquest v{}", env!("CARGO_PKG_VERSION"));

            let session = new_session(&config)?;
            run_shell(session).await?;
            info!("Session ended");
        }
        Commands::Replay { script, json } => {
            let config = Config::load_or_default(&cli.config).await?;
            config.validate()?;
            init_logging(Some(&config), cli.verbose);

            let content = tokio::fs::read_to_string(&script)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read script {}: {}", script, e))?;
            let mut session = new_session(&config)?;
            let mut count = 0usize;
            for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
                session.handle_command(line);
                count += 1;
            }
            info!("Replayed {} commands from {}", count, script);

            if json {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            } else {
                let color = atty::is(atty::Stream::Stdout);
                for record in session.history() {
                    println!("$ {}", record.command());
                    println!("{}\n", render_record(record, color));
                }
            }
        }
    }

    Ok(())
}

/// Interactive loop: prompt, read a line, run it, render what changed.
/// Input is handled strictly one line at a time.
async fn run_shell(mut session: GameSession) -> Result<()> {
    let color = atty::is(atty::Stream::Stdout);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type \"help\" for a list of commands.\n");
    loop {
        print_prompt(&session, color)?;
        let Some(raw) = lines.next_line().await? else {
            println!();
            break;
        };
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let before = session.transcript().len();
        session.handle_command(line);
        let after = session.transcript().len();

        if after < before || line == ControlCommand::Clear.keyword() {
            if color {
                print!("{}", CLEAR_SCREEN);
            }
            continue;
        }
        for record in &session.transcript().as_slice()[before..] {
            println!("{}\n", render_record(record, color));
        }
    }
    Ok(())
}

fn print_prompt(session: &GameSession, color: bool) -> Result<()> {
    let prompt = session.identity().prompt();
    if color {
        print!("\x1b[1;32m{}{} ", prompt, RESET);
    } else {
        print!("{} ", prompt);
    }
    std::io::stdout().flush()?;
    Ok(())
}

fn emphasis_code(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Command => "\x1b[1;36m",
        Emphasis::Description => "\x1b[2m",
        Emphasis::Keyword => "\x1b[1;33m",
    }
}

/// Output text with ANSI emphasis applied, or as-is when `color` is off.
fn render_record(record: &TranscriptRecord, color: bool) -> String {
    let text = record.output();
    if !color {
        return text.to_string();
    }
    let base = match record.severity() {
        Severity::Error => "\x1b[31m",
        Severity::Info => "",
    };

    let mut out = String::from(base);
    let mut cursor = 0;
    for span in record.spans() {
        if span.start < cursor {
            continue;
        }
        let (Some(before), Some(styled)) = (text.get(cursor..span.start), span.slice(text)) else {
            continue;
        };
        out.push_str(before);
        out.push_str(emphasis_code(span.emphasis));
        out.push_str(styled);
        out.push_str(RESET);
        out.push_str(base);
        cursor = span.end;
    }
    out.push_str(text.get(cursor..).unwrap_or(""));
    if !base.is_empty() {
        out.push_str(RESET);
    }
    out
}

fn init_logging(config: Option<&Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(file) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(file));
        // Mirror to the console only in an interactive terminal
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}

mod player;

use clap::{Args, Parser, Subcommand};
use player::TerminalPlayer;
use pomo_core::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "Pomodoro interval timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer in this terminal (default)
    Run(RunArgs),

    /// List completion sounds
    Sounds,

    /// Play a completion sound
    TestSound {
        /// Sound name (defaults to the configured one)
        name: Option<String>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Stop after this many phases complete
    #[arg(long, default_value_t = 1)]
    phases: u32,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Focus length in minutes
    #[arg(long)]
    focus: Option<u32>,

    /// Short break length in minutes
    #[arg(long)]
    short_break: Option<u32>,

    /// Long break length in minutes
    #[arg(long)]
    long_break: Option<u32>,

    /// Focus sessions before a long break
    #[arg(long)]
    sessions: Option<u32>,

    /// Completion sound
    #[arg(long)]
    sound: Option<String>,

    /// Print completions as JSON lines and nothing else
    #[arg(long)]
    json: bool,

    /// Don't redraw the countdown
    #[arg(long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    pomo_core::logging::init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    // Config is parsed per command so `config init` can replace a broken file
    match cli.command {
        Some(Commands::Run(args)) => cmd_run(args, load_config(config_path)?),
        Some(Commands::Sounds) => cmd_sounds(&load_config(config_path)?),
        Some(Commands::TestSound { name }) => cmd_test_sound(name, &load_config(config_path)?),
        Some(Commands::Config { action }) => cmd_config(action, config_path),
        None => {
            // Default to "run" command
            let args = RunArgs {
                phases: 1,
                tick_ms: 1000,
                ..Default::default()
            };
            cmd_run(args, load_config(config_path)?)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_or_default(path),
        None => Config::load(),
    }
}

fn cmd_run(args: RunArgs, mut config: Config) -> Result<()> {
    if let Some(minutes) = args.focus {
        config.timer.focus_minutes = minutes;
    }
    if let Some(minutes) = args.short_break {
        config.timer.short_break_minutes = minutes;
    }
    if let Some(minutes) = args.long_break {
        config.timer.long_break_minutes = minutes;
    }
    if let Some(sessions) = args.sessions {
        config.timer.sessions_before_long_break = sessions;
    }
    if let Some(ref name) = args.sound {
        config.sound.selected = name.parse()?;
    }
    let settings = config.to_settings()?;
    tracing::debug!("Running {} phase(s) with {:?}", args.phases, settings);

    let mut engine = TimerEngine::new(settings, local_today());
    let mut notifier = Notifier::new(TerminalPlayer::new(
        config.sound.dir.clone(),
        config.sound.player.clone(),
    ));
    let redraw = !(args.json || args.quiet);
    let interval = Duration::from_millis(args.tick_ms);
    let commands = spawn_input_reader();
    let mut input_open = true;
    let mut completed = 0;

    if !args.json {
        println!("Space/Enter: start/pause  r: reset  s: skip  x: reset session");
    }
    engine.start(local_today());

    loop {
        // Apply pending keyboard commands before the next tick
        loop {
            match commands.try_recv() {
                Ok(command) => {
                    engine.apply(command, local_today());
                    if !args.json {
                        println!(
                            "\n{:?}: {} {} ({})",
                            command,
                            engine.phase_label(),
                            engine.formatted_time(),
                            if engine.is_running() { "running" } else { "paused" }
                        );
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    input_open = false;
                    break;
                }
            }
        }

        if engine.is_running() {
            if let Some(event) = engine.tick() {
                completed += 1;
                report_completion(&engine, &event, args.json)?;
                notifier.announce(&event);

                if completed >= args.phases {
                    break;
                }

                // Host comes back to the foreground for the next phase
                engine.check_daily_reset(local_today());
                engine.start(local_today());
            } else if redraw {
                print!("\r{} ", engine.title());
                io::stdout().flush()?;
            }
        } else if !input_open {
            if !args.json {
                println!("\nPaused with no more input, exiting.");
            }
            break;
        }

        std::thread::sleep(interval);
    }

    Ok(())
}

fn report_completion(engine: &TimerEngine, event: &PhaseCompleted, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }

    println!();
    println!("✓ {} complete, next up: {}", event.from, event.to);
    if event.to.is_break() {
        println!("  Step away for {}.", format_clock(engine.phase_duration()));
    } else {
        println!("  Back to focus for {}.", format_clock(engine.phase_duration()));
    }
    println!(
        "  Focus sessions: {}  Short breaks: {}  Session {}/{}",
        engine.completed_focus_sessions(),
        engine.completed_short_breaks(),
        engine.session_number(),
        engine.settings().cycle_length()
    );
    Ok(())
}

/// Forward one command per stdin line; the channel closes with stdin
fn spawn_input_reader() -> Receiver<Command> {
    let (tx, rx) = channel::<Command>();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_input(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                None => eprintln!("Unknown command: {:?}", line.trim()),
            }
        }
    });
    rx
}

fn parse_input(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(Command::Toggle);
    }
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Command::from_key(key),
        _ => trimmed.parse().ok(),
    }
}

fn cmd_sounds(config: &Config) -> Result<()> {
    for sound in SoundId::ALL {
        let marker = if sound == config.sound.selected { "*" } else { " " };
        println!("{} {}", marker, sound);
    }
    Ok(())
}

fn cmd_test_sound(name: Option<String>, config: &Config) -> Result<()> {
    let sound: SoundId = match name {
        Some(name) => name.parse()?,
        None => config.sound.selected,
    };
    let mut notifier = Notifier::new(TerminalPlayer::new(
        config.sound.dir.clone(),
        config.sound.player.clone(),
    ));
    notifier.preview(sound);
    println!("Tested {}", sound);
    Ok(())
}

fn cmd_config(action: ConfigAction, path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_config_path()?,
    };

    match action {
        ConfigAction::Show => {
            let config = Config::load_from_or_default(&path)?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(Error::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(&path)?;
            println!("✓ Wrote {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(""), Some(Command::Toggle));
        assert_eq!(parse_input(" \n"), Some(Command::Toggle));
        assert_eq!(parse_input("s"), Some(Command::Skip));
        assert_eq!(parse_input("reset-session"), Some(Command::ResetSession));
        assert_eq!(parse_input("q"), None);
    }
}

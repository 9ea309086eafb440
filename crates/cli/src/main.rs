//! kinda - KindaVM keyboard and mouse emulation
//!
//! Drives a USB HID gadget device so the machine it is plugged into sees a
//! real keyboard, mouse and media-key controller.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use kindavm_hid_common::{DEFAULT_DEVICE_PATH, GadgetConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::MouseCommands;

#[derive(Parser)]
#[command(name = "kinda")]
#[command(about = "KindaVM - USB HID keyboard and mouse emulation")]
#[command(version)]
#[command(long_about = "
kinda writes keyboard, mouse, media and power reports to a USB HID gadget
device. Every action is sent as a press report followed by a release report,
with a short settle delay after each so the host registers them separately.

Run 'kinda check' to verify the gadget device is present.
")]
struct Cli {
    /// HID gadget device to write reports to
    #[arg(long, global = true, env = "KINDA_HID_DEVICE", default_value = DEFAULT_DEVICE_PATH)]
    device: PathBuf,

    /// Milliseconds to wait after each report (0 disables the pause)
    #[arg(long, global = true, env = "KINDA_SETTLE_DELAY_MS", default_value_t = 10)]
    delay_ms: u64,

    /// Print reports as hex instead of writing them to the device
    #[arg(long, global = true)]
    dry_run: bool,

    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type a text string (reads stdin when no text is given)
    #[command(after_help = "Escape sequences \\n, \\t and \\b type Enter, Tab and Backspace.")]
    Type {
        /// Words to type, joined by single spaces
        text: Vec<String>,
    },

    /// Send a navigation, media or power key
    #[command(visible_alias = "special")]
    #[command(after_help = commands::keyboard::SPECIAL_KEY_HELP)]
    SpecialKey {
        /// Key name, e.g. f1, esc, pageup, play, volume-up, power
        key: String,
    },

    /// Send a raw HID keycode with an optional modifier byte
    #[command(visible_alias = "key")]
    RawKey {
        /// Keycode (decimal, or 0x/0o/0b prefixed)
        keycode: String,
        /// Modifier bitmask (decimal, or 0x/0o/0b prefixed)
        modifier: Option<String>,
    },

    /// Mouse movement, clicks, scrolling and dragging
    #[command(subcommand)]
    Mouse(MouseCommands),

    /// Translate newline-delimited JSON browser events from stdin
    Events,

    /// Check that the HID gadget device is present
    Check,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    fn gadget_config(&self) -> GadgetConfig {
        GadgetConfig::new(&self.device, self.delay_ms)
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout with a zero exit.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            if e.print().is_err() {
                eprintln!("{e}");
            }
            std::process::exit(error::EXIT_VALIDATION);
        }
    };

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            std::process::exit(error::exit_code(&e));
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.gadget_config();
    let open_sink = || commands::open_sink(&config, cli.dry_run);

    match &cli.command {
        Commands::Type { text } => commands::keyboard::type_text(&mut open_sink()?, text),
        Commands::SpecialKey { key } => commands::keyboard::special_key(&mut open_sink()?, key),
        Commands::RawKey { keycode, modifier } => {
            commands::keyboard::raw_key(&mut open_sink()?, keycode, modifier.as_deref())
        }
        Commands::Mouse(cmd) => commands::mouse::execute(&mut open_sink()?, cmd),
        Commands::Events => commands::events::execute(open_sink()?, cli.json),
        Commands::Check => commands::device::check(&config, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["kinda", "check"])?;
        assert!(!cli.dry_run);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        let config = cli.gadget_config();
        assert_eq!(config.device_path(), std::path::Path::new("/dev/hidg0"));
        assert_eq!(config.settle_delay(), Duration::from_millis(10));
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "kinda",
            "type",
            "hi",
            "--device",
            "/dev/hidg1",
            "--delay-ms",
            "0",
            "--dry-run",
        ])?;
        assert!(cli.dry_run);
        assert_eq!(cli.gadget_config(), GadgetConfig::new("/dev/hidg1", 0));
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        let cli = Cli::try_parse_from(["kinda", "-vvv", "check"])?;
        assert_eq!(cli.verbose, 3);
        Ok(())
    }

    #[test]
    fn parse_type_words() -> TestResult {
        let cli = Cli::try_parse_from(["kinda", "type", "Hello", "World"])?;
        match cli.command {
            Commands::Type { text } => assert_eq!(text, vec!["Hello", "World"]),
            _ => return Err("expected type command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_aliases() -> TestResult {
        let cli = Cli::try_parse_from(["kinda", "special", "f1"])?;
        assert!(matches!(cli.command, Commands::SpecialKey { .. }));

        let cli = Cli::try_parse_from(["kinda", "key", "0x04", "0x02"])?;
        assert!(matches!(
            cli.command,
            Commands::RawKey { ref keycode, modifier: Some(ref m) } if keycode == "0x04" && m == "0x02"
        ));
        Ok(())
    }

    #[test]
    fn parse_mouse_negative_move() -> TestResult {
        let cli = Cli::try_parse_from(["kinda", "mouse", "move", "-10", "20"])?;
        assert!(matches!(
            cli.command,
            Commands::Mouse(MouseCommands::Move { x: -10, y: 20 })
        ));
        Ok(())
    }

    #[test]
    fn parse_mouse_click_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["kinda", "mouse", "click"])?;
        match cli.command {
            Commands::Mouse(MouseCommands::Click { button, count }) => {
                assert_eq!(button, "left");
                assert_eq!(count, 1);
            }
            _ => return Err("expected mouse click".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_rejects_non_integer_scroll() {
        assert!(Cli::try_parse_from(["kinda", "mouse", "scroll", "lots"]).is_err());
    }
}

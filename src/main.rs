use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixell_bank::cli::{handle_account_command, AccountCommands};
use pixell_bank::config::{PixellPaths, Settings};

#[derive(Parser)]
#[command(
    name = "pixell",
    version,
    about = "Pixell River bank accounts with service charges and client alerts",
    long_about = "Open a chequing, savings or investment account, apply deposits and \
                  withdrawals in order, and see the resulting balance and service \
                  charge. Attach a client to receive low-balance and large-transaction \
                  alerts."
)]
struct Cli {
    /// Configuration directory (overrides PIXELL_BANK_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Account(AccountCommands),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with defaults if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config {
        Some(dir) => PixellPaths::with_base_dir(dir),
        None => PixellPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings.log_filter);

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&settings, cmd)?;
        }
        Some(Commands::Config { init }) => {
            if init && !paths.is_initialized() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            let status = if paths.is_initialized() {
                "present"
            } else {
                "not written (defaults in use)"
            };

            println!("Pixell River Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {} ({})", paths.settings_file().display(), status);
            println!();
            println!("Settings:");
            println!("  Log filter:  {}", settings.log_filter);
            println!("  Echo alerts: {}", settings.echo_alerts);
        }
        None => {
            println!("Pixell River - bank accounts with service charges and alerts");
            println!();
            println!("Run 'pixell --help' for usage information.");
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use contacts::cli::{
    handle_backup_command, handle_contact_command, handle_export, handle_import, run_menu,
    BackupCommands, ContactCommands,
};
use contacts::config::{ContactPaths, Settings};
use contacts::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact book",
    long_about = "Keeps name/phone pairs in a plain text file. Run without a \
                  subcommand for the interactive menu, or use the subcommands \
                  below for one-shot operations."
)]
struct Cli {
    /// Directory holding the contact store, backup, CSV and settings files
    #[arg(long, global = true, env = "CONTACTS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Contact(ContactCommands),

    /// Export contacts to CSV
    Export {
        /// Output file (defaults to contacts.csv in the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all contacts with the rows of a CSV file
    Import {
        /// Input file (defaults to contacts.csv in the data directory)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Launch the interactive menu
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = match cli.data_dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Contact(cmd)) => handle_contact_command(&storage, cmd)?,
        Some(Commands::Export { output }) => handle_export(&storage, output)?,
        Some(Commands::Import { input }) => handle_import(&storage, input)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, cmd)?,
        Some(Commands::Config) => {
            println!("Contacts Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Contact store:  {}", paths.contacts_file().display());
            println!("Backup file:    {}", paths.backup_file().display());
            println!("CSV file:       {}", paths.csv_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Malformed lines: {:?}", settings.malformed_lines);
        }
        Some(Commands::Menu) | None => {
            let stdin = std::io::stdin();
            run_menu(&storage, &mut stdin.lock())?;
        }
    }

    Ok(())
}

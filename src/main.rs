use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_report::cli::{handle_print_command, PrintArgs};
use ledger_report::config::{ReportPaths, Settings};
use ledger_report::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "ledger-report",
    version,
    about = "Earnings and expenses reports from ledger records",
    long_about = "ledger-report renders the records of a ledger period as a \
                  column-aligned report, with earnings and expenses grouped \
                  by category and shown side by side or stacked."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the earnings and expenses report of a records file
    Print(PrintArgs),

    /// Write default settings to the config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Print(args) => {
            let report = handle_print_command(&settings, &args)?;
            if !report.is_empty() {
                println!("{}", report);
            }
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("ledger-report Configuration");
            println!("===========================");
            println!();
            println!("Paths:");
            println!("  Base directory: {}", paths.base_dir().display());
            println!("  Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Stacked layout:   {}", settings.stacked_layout);
            println!("  Entry sort:       {}", settings.entry_sort);
            println!("  Category sort:    {}", settings.category_sort);
            println!(
                "  Default category: {}",
                settings.default_category.as_deref().unwrap_or("(none)")
            );
            println!("  Show ID:          {}", settings.show_id);
            println!("  Date format:      {}", settings.date_format);
            let widths = settings.column_widths;
            println!(
                "  Column widths:    name {}, value {}, date {}, id {}",
                widths.name, widths.value, widths.date, widths.id
            );
        }
    }

    Ok(())
}

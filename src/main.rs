use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_saver::cli::{run_view, Menu, Prompter};
use budget_saver::config::{paths::DATA_DIR_ENV, BudgetPaths, ChartMode, Settings};
use budget_saver::logging::init_tracing;
use budget_saver::services::SheetReset;
use budget_saver::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget-saver",
    version,
    about = "Track income, expenses and savings in a spreadsheet-compatible report",
    long_about = "budget-saver records a budget session (income, expenses and an optional \
                  saving) as rows of a CSV report, and charts monthly savings by income \
                  type for any date range. Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Directory holding config.json and the report file
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Print transactions within a date range and chart their savings
    View {
        /// Start date (dd-mm-yyyy)
        #[arg(short, long)]
        start: String,

        /// End date (dd-mm-yyyy)
        #[arg(short, long)]
        end: String,

        /// Override the configured chart mode
        #[arg(long, value_enum)]
        chart: Option<ChartMode>,
    },

    /// Delete every row of the report sheet
    Reset,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = BudgetPaths::resolve(cli.data_dir);
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths, &settings)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let prompter = Prompter::new(stdin.lock(), io::stdout());
            Menu::new(&storage, &settings, prompter).run()?;
        }
        Commands::View { start, end, chart } => {
            let mode = chart.unwrap_or(settings.chart);
            run_view(&storage, &settings, mode, &start, &end, &mut io::stdout())?;
        }
        Commands::Reset => {
            SheetReset::new(&storage, settings.pacing()).run(&mut io::stdout())?;
        }
        Commands::Config => {
            println!("budget-saver Configuration");
            println!("==========================");
            let paths = storage.paths();
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Report file:    {}", storage.report.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Pacing (ms):     {}", settings.pacing_ms);
            println!("  Chart mode:      {:?}", settings.chart);
        }
    }

    Ok(())
}

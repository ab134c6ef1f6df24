use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aimers", version, about = "Aimers study companion CLI")]
struct Cli {
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's overview
    Dashboard {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Academic track selection
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Generate today's study plan
    Plan(commands::plan::PlanArgs),
    /// Focus timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Daily prayer checklist
    Salat {
        #[command(subcommand)]
        action: commands::salat::SalatAction,
    },
    /// Daily study statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Exam countdowns
    Exam {
        #[command(subcommand)]
        action: commands::exam::ExamAction,
    },
    /// Show a reminder quote
    Quote {
        /// Show the quote after this index instead of a random one
        #[arg(long)]
        next: Option<usize>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AIMERS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Dashboard { json } => commands::dashboard::run(json),
        Commands::Track { action } => commands::track::run(action),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Salat { action } => commands::salat::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Exam { action } => commands::exam::run(action),
        Commands::Quote { next } => commands::quote::run(next),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

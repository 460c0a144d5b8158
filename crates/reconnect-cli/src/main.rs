use clap::{CommandFactory, Parser, Subcommand};
use reconnect_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "reconnect", version, about = "Reconnect CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Contact management
    Contact {
        #[command(subcommand)]
        action: commands::contact::ContactAction,
    },
    /// Log and list calls and texts
    Interaction {
        #[command(subcommand)]
        action: commands::interaction::InteractionAction,
    },
    /// Who to reach out to next
    Suggest(commands::suggest::SuggestArgs),
    /// Suggestion settings (mode and counts)
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Check-in message templates
    Templates {
        /// Name to fill in
        #[arg(long, default_value = reconnect_core::templates::DEFAULT_NAME)]
        name: String,
    },
    /// Add example contacts to an empty store
    Seed,
    /// Show data location and record counts
    Status,
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

// Reads the config without creating the data directory, so commands that
// never touch the store leave the filesystem alone.
fn init_tracing() {
    let fallback = Config::read()
        .map(|c| c.log.filter)
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Contact { action } => commands::contact::run(action),
        Commands::Interaction { action } => commands::interaction::run(action),
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Templates { name } => commands::templates::run(&name),
        Commands::Seed => commands::status::seed(),
        Commands::Status => commands::status::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "reconnect",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

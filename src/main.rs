use clap::Parser;
use rdvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => rdvault::cli::commands::init::execute(&cli),
        Commands::List => rdvault::cli::commands::list::execute(&cli),
        Commands::Add {
            ref name,
            ref address,
            ref username,
            ref password,
        } => rdvault::cli::commands::add::execute(
            &cli,
            name.as_deref(),
            address.as_deref(),
            username.as_deref(),
            password.as_deref(),
        ),
        Commands::Edit {
            position,
            ref name,
            ref address,
            ref username,
            ref password,
        } => rdvault::cli::commands::edit::execute(
            &cli,
            position,
            name.as_deref(),
            address.as_deref(),
            username.as_deref(),
            password.as_deref(),
        ),
        Commands::Delete { position, force } => {
            rdvault::cli::commands::delete::execute(&cli, position, force)
        }
        Commands::Connect { position } => rdvault::cli::commands::connect::execute(&cli, position),
        Commands::Backup { ref destination } => {
            rdvault::cli::commands::backup::execute(&cli, destination)
        }
        Commands::Restore { ref source, force } => {
            rdvault::cli::commands::restore::execute(&cli, source, force)
        }
    };

    if let Err(e) = result {
        rdvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::errors::error_code;
use services::store::JsonFileStore;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.json {
            let envelope = serde_json::json!({
                "ok": false,
                "error": {"code": error_code(&err), "message": err.to_string()}
            });
            println!("{}", envelope);
        } else {
            eprintln!("error: {}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::open_default()?;

    match &cli.command {
        Commands::Submit {
            category,
            location,
            description,
            photo,
        } => commands::handle_submit(
            cli.json,
            &store,
            category.clone(),
            location.clone(),
            description.clone(),
            photo.clone(),
        ),
        Commands::List { category, status } => {
            commands::handle_list(cli.json, &store, category.as_deref(), *status)
        }
        Commands::Show { id } => commands::handle_show(cli.json, &store, id),
        Commands::Dashboard { status } => commands::handle_dashboard(cli.json, &store, *status),
        Commands::SetStatus { id, status } => {
            commands::handle_set_status(cli.json, &store, id, *status)
        }
    }
}

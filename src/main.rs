use clap::Parser;
use learning_journal::cli::{
    handle_add, handle_delete, handle_edit, handle_menu, handle_view, Cli, Commands,
};
use learning_journal::config::resolve_database_path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise stay quiet unless --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let db = resolve_database_path(cli.db);

    let result = match cli.command {
        None | Some(Commands::Menu) => handle_menu(&db),
        Some(Commands::Add {
            topic,
            know,
            questions,
            aha,
        }) => handle_add(&db, topic, know, questions, aha),
        Some(Commands::View) => handle_view(&db),
        Some(Commands::Edit {
            id,
            topic,
            know,
            questions,
            aha,
        }) => handle_edit(&db, id, topic, know, questions, aha),
        Some(Commands::Delete { id, force }) => handle_delete(&db, id, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! gisty - GitHub gists from the command line.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use commands::utils::AppContext;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    output::set_quiet(cli.quiet);

    if let Err(e) = run(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gisty={log_level},gisty_api={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        commands::completions::run(shell);
        return Ok(());
    }

    let ctx = AppContext::new(&cli)?;

    match cli.command {
        Commands::Get { id } => commands::get::run(&ctx, &id),
        Commands::List { user } => commands::list::run(&ctx, &user),
        Commands::Create {
            files,
            description,
            public,
            user,
        } => commands::create::run(
            &ctx,
            &commands::create::CreateOptions {
                files,
                description,
                public,
                user,
            },
        ),
        Commands::Update {
            id,
            files,
            description,
        } => commands::update::run(&ctx, &id, &files, description.as_deref()),
        Commands::Comment { gist_id, body } => commands::comment::run(&ctx, &gist_id, &body),
        Commands::Comments { gist_id } => commands::comments::run(&ctx, &gist_id),
        Commands::Completions { .. } => Ok(()),
    }
}

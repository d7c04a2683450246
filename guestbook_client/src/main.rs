//! Terminal front end for the guestbook page

use anyhow::Result;
use clap::{Parser, Subcommand};
use guestbook_client::{
    render::{render_feed, render_status},
    ClientConfig, FormFields, GuestbookPage, HttpApi, SubmitOutcome, DEFAULT_API_BASE_URL,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(about = "Read and sign the guestbook", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "GUESTBOOK_API_URL", default_value = DEFAULT_API_BASE_URL, global = true)]
    api_url: String,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the messages.
    Feed,

    /// Leave a message, then show the messages.
    Sign {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let api = HttpApi::new(ClientConfig::new(cli.api_url));
    let mut page = GuestbookPage::new(api);
    page.load_messages().await;

    match cli.command {
        Commands::Feed => {}
        Commands::Sign { name, email, message } => {
            page.form = FormFields::new(name, email, message);
            if let SubmitOutcome::Blocked(fields) = page.submit().await {
                eprintln!("Please fill out: {}", fields.join(", "));
            }
        }
    }

    if let Some(status) = render_status(&page.status) {
        println!("{}\n", status);
    }
    print!("{}", render_feed(&page.feed));

    Ok(())
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("guestbook_client={},guestbook={}", level, level).into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

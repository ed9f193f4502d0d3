use clap::Parser;
use dotenv::dotenv;
use telegram_writer::run_from_env;

/// telegram-writer - relays an inbound HTTP request body to a Telegram chat
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Port the local development server binds to (dev mode only)
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Load settings, init logging and run the selected front end
    run_from_env(args.port).await
}

//! `openrouter-ping`: send one chat-completion request to check an API key.

use clap::Parser;
use openrouter_ping::config::{
    DEFAULT_BASE_URL, DEFAULT_ENV_FILE, DEFAULT_KEY_NAME, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
use openrouter_ping::logging::init_tracing;
use openrouter_ping::{credential, report, ChatCompletionClient, ChatMessage, ClientConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const SEPARATOR: &str = "==================================================";

#[derive(Parser, Debug)]
#[command(name = "openrouter-ping")]
#[command(about = "Check an OpenRouter API key with a single chat completion")]
#[command(version)]
struct Cli {
    /// Message sent to the model
    #[arg(default_value = "Hello! Say something in Russian.")]
    message: String,

    /// File holding KEY=VALUE lines
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Name of the API key entry
    #[arg(long, default_value = DEFAULT_KEY_NAME)]
    key_name: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds, 0 for none
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("Checking OpenRouter API key");
    println!("{SEPARATOR}");

    let key = match credential::resolve_credential(&cli.env_file, &cli.key_name) {
        Ok(key) => key,
        Err(err) => {
            for line in report::render_error(&err) {
                eprintln!("{line}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let timeout = (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs));
    let config = ClientConfig::default()
        .with_base_url(cli.base_url)
        .with_request_timeout(timeout);
    let client = ChatCompletionClient::new(config)?;

    let request = ChatCompletionClient::build_request(
        &cli.model,
        vec![ChatMessage::user(cli.message.as_str())],
        cli.max_tokens,
    )?;

    println!("URL: {}", client.config().endpoint());
    println!("Model: {}", request.model);
    println!("Message: {}", cli.message);
    println!();

    let outcome = match client.send(&request, &key).await {
        Ok(raw) => {
            println!("Status code: {}", raw.status);
            ChatCompletionClient::interpret(raw)
        }
        Err(err) => Err(err),
    };

    for line in report::render_outcome(&outcome) {
        println!("{line}");
    }

    println!();
    println!("{SEPARATOR}");
    if outcome.is_ok() {
        println!("PASSED: the API key works");
    } else {
        println!("FAILED: problem with the API key or the service");
    }

    Ok(ExitCode::SUCCESS)
}

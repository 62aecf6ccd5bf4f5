use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use cli::repl::{self, ReplCommand};
use cli::{ChatSession, ClientError, Mode, RelayClient, SendOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("request failed")]
    RequestFailed,
}

#[derive(Parser, Debug)]
#[command(name = "chat-cli", about = "Terminal chat client for the text/image relay")]
struct Cli {
    #[arg(long, env = "CHAT_RELAY_URL", default_value = "http://127.0.0.1:3001")]
    base_url: String,

    #[arg(long, env = "CHAT_TIMEOUT_SECS", help = "Per-request timeout; waits indefinitely when unset")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the relay is up.
    Ping,
    /// Send one text prompt and print the reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Generate one image and print its URL.
    Image {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Interactive conversation.
    Chat {
        #[arg(long, value_enum, default_value_t = Mode::Text)]
        mode: Mode,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = RelayClient::new(&cli.base_url, cli.timeout_secs.map(Duration::from_secs))?;

    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::Ask { prompt } => run_once(client, Mode::Text, &prompt.join(" ")).await,
        Command::Image { prompt } => run_once(client, Mode::Image, &prompt.join(" ")).await,
        Command::Chat { mode } => run_chat(client, mode).await,
    }
}

async fn run_ping(client: &RelayClient) -> Result<(), CliError> {
    let health = client.health().await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}

async fn run_once(client: RelayClient, mode: Mode, prompt: &str) -> Result<(), CliError> {
    let mut session = ChatSession::new(client, mode);
    let outcome = session.send_message(prompt).await;
    if let Some(message) = session.last_message().filter(|_| outcome != SendOutcome::Ignored) {
        match outcome {
            SendOutcome::Failed => eprintln!("{}", repl::render(message)),
            _ => println!("{}", repl::render(message)),
        }
    }
    match outcome {
        SendOutcome::Replied => Ok(()),
        SendOutcome::Ignored | SendOutcome::Failed => Err(CliError::RequestFailed),
    }
}

async fn run_chat(client: RelayClient, mode: Mode) -> Result<(), CliError> {
    eprintln!("connected to {} ({})", client.base_url(), repl::HELP);
    let mut session = ChatSession::new(client, mode);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", repl::prompt_label(session.conversation().mode()));
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match repl::parse_line(&line) {
            ReplCommand::Send(input) => match session.send_message(&input).await {
                SendOutcome::Ignored => {}
                SendOutcome::Replied | SendOutcome::Failed => {
                    if let Some(message) = session.last_message() {
                        println!("{}", repl::render(message));
                    }
                }
            },
            ReplCommand::SetMode(mode) => {
                session.conversation_mut().set_mode(mode);
                eprintln!("mode: {}", mode.as_str());
            }
            ReplCommand::ToggleMode => {
                let mode = session.conversation_mut().toggle_mode();
                eprintln!("mode: {}", mode.as_str());
            }
            ReplCommand::History => {
                let json = serde_json::to_string_pretty(session.conversation().messages())?;
                println!("{json}");
            }
            ReplCommand::Help => eprintln!("{}", repl::HELP),
            ReplCommand::Quit => break,
            ReplCommand::Unknown(command) => eprintln!("unknown command /{command}; {}", repl::HELP),
        }
    }
    Ok(())
}

use chat_widget::app::{App, AppMessage};
use chat_widget::cli::{parse_args, run_cli_command, RunArgs};
use chat_widget::completion::StreamEvent;
use chat_widget::config::WidgetConfig;

use color_eyre::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const QUIT_COMMAND: &str = "/quit";

/// Logs go to stderr so stdout carries only answer text.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'chat-widget --help' for usage.");
            std::process::exit(2);
        }
    };
    let Some(RunArgs { overrides, query }) = run_cli_command(command) else {
        return Ok(());
    };

    init_tracing();

    let config = WidgetConfig::resolve(&overrides)?;
    if let Err(e) = config.require_token() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let http = Arc::new(chat_widget::adapters::ReqwestHttpClient::new());

    let succeeded = runtime.block_on(async move {
        let mut app = App::with_http(config, http);
        match query {
            Some(query) => run_once(&mut app, &query).await,
            None => run_interactive(&mut app).await,
        }
    })?;

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

fn print_fragment(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn print_prompt(app: &App) -> Result<()> {
    print_fragment(&format!("{} ", app.config.placeholder))
}

/// Answer a single query. Returns `false` when it ended in an error.
async fn run_once(app: &mut App, query: &str) -> Result<bool> {
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| color_eyre::eyre::eyre!("message receiver already taken"))?;

    if app.submit(query).is_none() {
        return Ok(true);
    }

    while let Some(msg) = message_rx.recv().await {
        match app.handle_message(msg) {
            Some(StreamEvent::Chunk(text)) => print_fragment(&text)?,
            Some(StreamEvent::Done) => {
                println!();
                return Ok(true);
            }
            Some(StreamEvent::Error(message)) => {
                println!();
                eprintln!("Error: {}", message);
                return Ok(false);
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Read one query per line until `/quit` or end of input.
///
/// A new line while a reply is still streaming supersedes it.
async fn run_interactive(app: &mut App) -> Result<bool> {
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    println!("{}", app.config.title);
    print_prompt(app)?;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) if line.trim() == QUIT_COMMAND => app.quit(),
                    Some(line) => {
                        if app.is_streaming() {
                            println!();
                        }
                        if app.submit(&line).is_none() {
                            print_prompt(app)?;
                        }
                    }
                    // Let a reply that is still streaming finish before exiting.
                    None => {
                        stdin_open = false;
                        if !app.is_streaming() {
                            app.quit();
                        }
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                let Some(msg) = msg else {
                    app.quit();
                    continue;
                };
                match app.handle_message(msg) {
                    Some(StreamEvent::Chunk(text)) => print_fragment(&text)?,
                    Some(StreamEvent::Done) => {
                        println!();
                        if stdin_open {
                            print_prompt(app)?;
                        }
                    }
                    Some(StreamEvent::Error(message)) => {
                        println!();
                        eprintln!("Error: {}", message);
                        if stdin_open {
                            print_prompt(app)?;
                        }
                    }
                    _ => {}
                }
                if !stdin_open && !app.is_streaming() {
                    app.quit();
                }
            }
        }

        if app.should_quit {
            return Ok(app.state.error.is_none());
        }
    }
}

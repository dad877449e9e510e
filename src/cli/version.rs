//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: chat-widget [FLAGS] [QUERY...]

Streams answers from an OpenAI-compatible chat completion endpoint.
With a QUERY, prints the answer and exits. Without, reads one query per line.

Flags:
  --url <URL>            Completion endpoint
  --model <MODEL>        Model name
  --token <TOKEN>        Bearer token
  --placeholder <TEXT>   Interactive prompt text
  --query-string <QS>    Host query string, e.g. '?model=gpt-4&token=XXX'
  -V, --version          Print version
  -h, --help             Print this help

Environment:
  CHAT_WIDGET_URL, CHAT_WIDGET_MODEL, CHAT_WIDGET_TOKEN
  RUST_LOG               Log filter (logs go to stderr)
";

pub fn version_string() -> String {
    format!("chat-widget {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_string());
}

pub fn handle_help_command() {
    print!("{}", USAGE);
}

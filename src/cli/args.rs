//! Command-line argument parsing.

use crate::config::ConfigOverrides;
use crate::error::ConfigError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Answer queries
    Run(RunArgs),
}

/// Arguments for answering queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    pub overrides: ConfigOverrides,
    /// Positional words joined by spaces; `None` selects interactive mode
    pub query: Option<String>,
}

/// Parse command-line arguments, skipping the program name.
///
/// `--version` and `--help` win over everything else. Anything after `--`
/// is treated as query text.
///
/// # Examples
///
/// ```
/// use chat_widget::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chat-widget".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut run = RunArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" => &mut run.overrides.url,
            "--model" => &mut run.overrides.model,
            "--token" => &mut run.overrides.token,
            "--placeholder" => &mut run.overrides.placeholder,
            "--query-string" => &mut run.overrides.query_string,
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ConfigError::UnknownFlag(flag.to_string()));
            }
            _ => {
                words.push(arg.clone());
                continue;
            }
        };
        let value = args.next().ok_or_else(|| ConfigError::MissingValue { flag: arg.clone() })?;
        *slot = Some(value);
    }

    let query = words.join(" ");
    if !query.trim().is_empty() {
        run.query = Some(query);
    }
    Ok(CliCommand::Run(run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let args: Vec<String> = std::iter::once("chat-widget")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_wins_over_query() {
        assert_eq!(parse(&["what", "is", "-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args_is_interactive() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunArgs::default())));
    }

    #[test]
    fn test_parse_flags_and_query() {
        let command = parse(&["--model", "gpt-4", "what", "is", "rust", "--token", "abc"]).unwrap();
        let CliCommand::Run(run) = command else {
            panic!("expected Run, got {:?}", command);
        };
        assert_eq!(run.overrides.model.as_deref(), Some("gpt-4"));
        assert_eq!(run.overrides.token.as_deref(), Some("abc"));
        assert_eq!(run.query.as_deref(), Some("what is rust"));
    }

    #[test]
    fn test_parse_query_string_flag() {
        let command = parse(&["--query-string", "?url=http://localhost"]).unwrap();
        let CliCommand::Run(run) = command else {
            panic!("expected Run");
        };
        assert_eq!(run.overrides.query_string.as_deref(), Some("?url=http://localhost"));
        assert_eq!(run.query, None);
    }

    #[test]
    fn test_parse_double_dash_passes_flags_through() {
        let command = parse(&["--", "--url", "is", "a", "flag"]).unwrap();
        let CliCommand::Run(run) = command else {
            panic!("expected Run");
        };
        assert_eq!(run.overrides.url, None);
        assert_eq!(run.query.as_deref(), Some("--url is a flag"));
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--url"]),
            Err(ConfigError::MissingValue { flag: "--url".to_string() })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ConfigError::UnknownFlag("--unknown".to_string()))
        );
    }

    #[test]
    fn test_lone_dash_is_query_text() {
        let CliCommand::Run(run) = parse(&["-"]).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(run.query.as_deref(), Some("-"));
    }
}

//! Command-line argument parsing for codefolio.
//!
//! Hand-rolled: the surface is a handful of flags and one subcommand.

use std::path::PathBuf;

use crate::content::Language;
use crate::error::ConfigError;
use crate::theme::Theme;

/// Options for the interactive UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiArgs {
    /// Content path to open first.
    pub file: Option<String>,
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    /// Replay the welcome screen and tour even if already seen.
    pub welcome: bool,
    /// Keep preferences in memory only.
    pub no_persist: bool,
    pub prefs: Option<PathBuf>,
    pub log: Option<String>,
}

/// Options for `codefolio export`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    pub path: String,
    pub language: Language,
    pub theme: Theme,
    /// Output file; stdout when absent.
    pub out: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Forget stored preferences
    Reset { prefs: Option<PathBuf> },
    /// Render one content node to HTML
    Export(ExportArgs),
    /// Run the TUI application (default)
    RunTui(TuiArgs),
}

fn value_for<I>(flag: &str, args: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .filter(|value| !value.starts_with("--"))
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}

fn parse_theme(flag: &str, value: String) -> Result<Theme, ConfigError> {
    Theme::from_id(&value).ok_or(ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
        expected: "dark or light",
    })
}

fn parse_language(flag: &str, value: String) -> Result<Language, ConfigError> {
    Language::from_id(&value).ok_or(ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
        expected: "typescript, javascript, python, cpp or pseudocode",
    })
}

fn parse_export<I>(mut args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut path = None;
    let mut language = Language::default();
    let mut theme = Theme::default();
    let mut out = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => language = parse_language("--lang", value_for("--lang", &mut args)?)?,
            "--theme" => theme = parse_theme("--theme", value_for("--theme", &mut args)?)?,
            "--out" | "-o" => out = Some(PathBuf::from(value_for("--out", &mut args)?)),
            flag if flag.starts_with('-') => return Err(ConfigError::UnknownOption(arg)),
            _ if path.is_none() => path = Some(arg),
            _ => return Err(ConfigError::UnexpectedArgument(arg)),
        }
    }

    let path = path.ok_or(ConfigError::MissingExportPath)?;
    Ok(CliCommand::Export(ExportArgs {
        path,
        language,
        theme,
        out,
    }))
}

/// Parse command-line arguments and return the command to execute.
///
/// `args` includes the program name, as from `std::env::args()`.
///
/// # Examples
///
/// ```
/// use codefolio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["codefolio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1).peekable();
    if args.peek().map(String::as_str) == Some("export") {
        args.next();
        return parse_export(args);
    }

    let mut tui = TuiArgs::default();
    let mut reset = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--reset" => reset = true,
            "--welcome" => tui.welcome = true,
            "--no-persist" => tui.no_persist = true,
            "--file" => tui.file = Some(value_for("--file", &mut args)?),
            "--theme" => tui.theme = Some(parse_theme("--theme", value_for("--theme", &mut args)?)?),
            "--lang" => {
                tui.language = Some(parse_language("--lang", value_for("--lang", &mut args)?)?)
            }
            "--prefs" => tui.prefs = Some(PathBuf::from(value_for("--prefs", &mut args)?)),
            "--log" => tui.log = Some(value_for("--log", &mut args)?),
            flag if flag.starts_with('-') => return Err(ConfigError::UnknownOption(arg)),
            _ => return Err(ConfigError::UnexpectedArgument(arg)),
        }
    }

    if reset {
        return Ok(CliCommand::Reset { prefs: tui.prefs });
    }
    Ok(CliCommand::RunTui(tui))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let mut all = vec!["codefolio".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(TuiArgs::default())));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["--welcome", "-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_tui_options() {
        let parsed = parse(&[
            "--file",
            "/portfolio/skills.ts",
            "--theme",
            "light",
            "--lang",
            "py",
            "--no-persist",
        ]);
        assert_eq!(
            parsed,
            Ok(CliCommand::RunTui(TuiArgs {
                file: Some("/portfolio/skills.ts".to_string()),
                theme: Some(Theme::Light),
                language: Some(Language::Python),
                no_persist: true,
                ..TuiArgs::default()
            }))
        );
    }

    #[test]
    fn test_parse_reset_with_prefs() {
        assert_eq!(
            parse(&["--reset", "--prefs", "/tmp/p.json"]),
            Ok(CliCommand::Reset {
                prefs: Some(PathBuf::from("/tmp/p.json"))
            })
        );
    }

    #[test]
    fn test_parse_export() {
        let parsed = parse(&["export", "/portfolio/contact.ts", "--lang", "javascript", "-o", "out.html"]);
        assert_eq!(
            parsed,
            Ok(CliCommand::Export(ExportArgs {
                path: "/portfolio/contact.ts".to_string(),
                language: Language::JavaScript,
                theme: Theme::Dark,
                out: Some(PathBuf::from("out.html")),
            }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["--bogus"]),
            Err(ConfigError::UnknownOption("--bogus".to_string()))
        );
        assert_eq!(
            parse(&["--theme"]),
            Err(ConfigError::MissingValue {
                flag: "--theme".to_string()
            })
        );
        assert!(matches!(
            parse(&["--theme", "sepia"]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(parse(&["export"]), Err(ConfigError::MissingExportPath));
        assert_eq!(
            parse(&["stray"]),
            Err(ConfigError::UnexpectedArgument("stray".to_string()))
        );
    }
}

//! Command-line interface definitions.

use clap::{ArgAction, ColorChoice, Parser};
use std::path::PathBuf;

/// Make the near-white background of an image transparent
///
/// Exits with status 1 on usage errors, unreadable input or a failed write.
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Image to read (any format the decoder supports)
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// PNG file to write
    #[arg(value_name = "OUTPUT", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Print version (`-V` is taken by --verbose)
    #[arg(long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_v_is_verbose() {
        let cli = Cli::try_parse_from(["nobg", "-V", "in.png", "out.png"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_long_version_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["nobg", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_parses_input_and_output() {
        let cli = Cli::try_parse_from(["nobg", "logo.jpg", "logo.png"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("logo.jpg"));
        assert_eq!(cli.output, PathBuf::from("logo.png"));
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_flags_anywhere() {
        let cli =
            Cli::try_parse_from(["nobg", "-V", "in.webp", "out.png", "--color", "never"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_missing_output_is_rejected() {
        let err = Cli::try_parse_from(["nobg", "logo.jpg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_extra_argument_is_rejected() {
        let err = Cli::try_parse_from(["nobg", "a.jpg", "b.png", "c.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["nobg", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}

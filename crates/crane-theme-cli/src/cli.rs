//! Command-line definition and output mode selection.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Text, with color swatches when stdout supports colors.
    #[default]
    Auto,
    /// Text, always with color swatches.
    Term,
    /// Plain text.
    Text,
    Json,
    Yaml,
}

impl OutputMode {
    /// Reads the global `--output` flag from a (sub)command's matches.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("output").map(|s| s.as_str()) {
            Some("term") => OutputMode::Term,
            Some("text") => OutputMode::Text,
            Some("json") => OutputMode::Json,
            Some("yaml") => OutputMode::Yaml,
            _ => OutputMode::Auto,
        }
    }

    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json | OutputMode::Yaml => false,
        }
    }
}

fn overrides_arg() -> Arg {
    Arg::new("overrides")
        .long("overrides")
        .short('f')
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("YAML or JSON file of theme overrides")
}

fn color_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("COLOR")
        .help(help)
}

/// Builds the `crane-theme` command.
pub fn command() -> Command {
    Command::new("crane-theme")
        .about("Inspect and resolve crane-theme design tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("MODE")
                .global(true)
                .value_parser(["auto", "term", "text", "json", "yaml"])
                .default_value("auto")
                .help("Output mode: auto, term, text, json, or yaml"),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print resolved token values")
                .arg(overrides_arg())
                .arg(
                    Arg::new("tokens")
                        .value_name("TOKEN")
                        .action(ArgAction::Append)
                        .num_args(0..)
                        .help("Token names to resolve (all tokens when omitted)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate an override file and the token registry")
                .arg(overrides_arg()),
        )
        .subcommand(
            Command::new("contrast")
                .about("Choose a foreground color for a background")
                .arg(
                    Arg::new("background")
                        .value_name("BACKGROUND")
                        .required(true)
                        .help("Background color, e.g. '#0b3d91' or 'navy'"),
                )
                .arg(color_arg("light", "Candidate for light backgrounds [default: textColor]"))
                .arg(color_arg("dark", "Candidate for dark backgrounds [default: textColorDark]"))
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .value_name("LIGHTNESS")
                        .value_parser(value_parser!(f32))
                        .help("Lightness (0-100) below which a background is dark"),
                )
                .arg(overrides_arg()),
        )
}

//! Subcommand handlers. Each returns the text to print on success.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use crane_theme::{
    validate_registry, Color, ContrastOptions, Overrides, ThemeResolver, Token,
};
use serde::Serialize;

use crate::cli::OutputMode;
use crate::output::{dim, render_or_serialize, resolved_text, swatch, warn};

/// Dispatches parsed arguments to the matching handler.
pub fn run(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("resolve", sub)) => resolve(sub),
        Some(("check", sub)) => check(sub),
        Some(("contrast", sub)) => contrast(sub),
        Some((name, _)) => bail!("unknown command '{name}'"),
        None => bail!("no command given"),
    }
}

fn load_overrides(matches: &ArgMatches) -> Result<Option<(PathBuf, Overrides)>> {
    let Some(path) = matches.get_one::<PathBuf>("overrides") else {
        return Ok(None);
    };
    let overrides = Overrides::from_file(path)
        .with_context(|| format!("failed to load overrides from {}", path.display()))?;
    Ok(Some((path.clone(), overrides)))
}

fn load_theme(matches: &ArgMatches) -> Result<ThemeResolver> {
    match load_overrides(matches)? {
        Some((path, overrides)) => ThemeResolver::with_overrides(&overrides)
            .with_context(|| format!("invalid theme overrides in {}", path.display())),
        None => Ok(ThemeResolver::new()),
    }
}

fn resolve(matches: &ArgMatches) -> Result<String> {
    let mode = OutputMode::from_matches(matches);
    let theme = load_theme(matches)?;

    let names: Vec<&String> = matches
        .get_many::<String>("tokens")
        .map(|names| names.collect())
        .unwrap_or_default();
    let tokens = names
        .iter()
        .map(|name| Token::from_name(name).ok_or_else(|| anyhow!("unknown token '{name}'")))
        .collect::<Result<Vec<_>>>()?;

    let mut resolved = theme.resolve_all();
    if !tokens.is_empty() {
        resolved = resolved.select(&tokens);
    }
    render_or_serialize(&resolved, mode, resolved_text)
}

#[derive(Debug, Serialize)]
struct CheckReport {
    source: Option<String>,
    overrides: usize,
    tokens: usize,
    unknown_keys: Vec<String>,
}

fn check_text(report: &CheckReport, use_color: bool) -> String {
    let mut out = format!(
        "ok: {} overrides from {}, {} tokens resolve\n",
        report.overrides,
        report.source.as_deref().unwrap_or("defaults"),
        report.tokens
    );
    for key in &report.unknown_keys {
        out.push_str(&warn(&format!("unknown key: {key}"), use_color));
        out.push('\n');
    }
    out
}

fn check(matches: &ArgMatches) -> Result<String> {
    let mode = OutputMode::from_matches(matches);
    validate_registry().context("token registry is invalid")?;

    let loaded = load_overrides(matches)?;
    let (source, theme, count) = match &loaded {
        Some((path, overrides)) => {
            let theme = ThemeResolver::with_overrides(overrides)
                .with_context(|| format!("invalid theme overrides in {}", path.display()))?;
            (Some(path.display().to_string()), theme, overrides.len())
        }
        None => (None, ThemeResolver::new(), 0),
    };

    let report = CheckReport {
        source,
        overrides: count,
        tokens: theme.resolve_all().iter().filter(|(_, v)| v.is_some()).count(),
        unknown_keys: theme.unknown_keys().into_iter().map(String::from).collect(),
    };
    for key in &report.unknown_keys {
        log::info!("override '{key}' is not a registered token");
    }
    render_or_serialize(&report, mode, check_text)
}

#[derive(Debug, Serialize)]
struct ContrastReport {
    background: Color,
    lightness: f32,
    threshold: f32,
    color: Color,
}

fn contrast_text(report: &ContrastReport, use_color: bool) -> String {
    format!(
        "{}{} {}\n",
        swatch(report.color, use_color),
        report.color,
        dim(
            &format!(
                "(background lightness {:.1} vs threshold {})",
                report.lightness, report.threshold
            ),
            use_color
        )
    )
}

fn parse_color(matches: &ArgMatches, name: &str) -> Result<Option<Color>> {
    matches
        .get_one::<String>(name)
        .map(|value| Color::parse(value).with_context(|| format!("invalid --{name} color")))
        .transpose()
}

fn contrast(matches: &ArgMatches) -> Result<String> {
    let mode = OutputMode::from_matches(matches);
    let theme = load_theme(matches)?;

    let background = matches
        .get_one::<String>("background")
        .ok_or_else(|| anyhow!("missing background color"))?;
    let background = Color::parse(background).context("invalid background color")?;

    let mut options = ContrastOptions::new(background);
    options.light = parse_color(matches, "light")?;
    options.dark = parse_color(matches, "dark")?;
    options.threshold = matches.get_one::<f32>("threshold").copied();

    let report = ContrastReport {
        background,
        lightness: background.lightness(),
        threshold: options
            .threshold
            .unwrap_or(theme.contrast_luminance_threshold() as f32),
        color: theme.contrast_color(&options),
    };
    render_or_serialize(&report, mode, contrast_text)
}

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use focus_finder::config::ConfigManager;
use focus_finder::i18n;
use focus_finder::session::{renderer_for, terminal, Session};
use focus_finder::types::{AggregationMode, ColorMode, Language};

/// Command-line arguments for focus-finder
#[derive(Parser, Debug)]
#[command(name = "focus-finder")]
#[command(about = "Find the TV genres shared by up to three audience groups")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "FOCUS_FINDER_CONFIG")]
    config: Option<PathBuf>,

    /// Display language (detected from the locale by default)
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// When to color the output
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Genre scoring policy
    #[arg(short, long, value_enum)]
    mode: Option<AggregationMode>,

    /// Do not clear the terminal on startup
    #[arg(long)]
    no_clear: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Print one-shot results as JSON
    #[arg(long, requires = "groups")]
    json: bool,

    /// Rank these groups once instead of prompting
    groups: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut manager =
        ConfigManager::load(args.config.as_deref()).context("Failed to load configuration")?;
    manager
        .update(|config| {
            if args.lang.is_some() {
                config.display.language = args.lang;
            }
            if let Some(color) = args.color {
                config.display.color = color;
            }
            if let Some(mode) = args.mode {
                config.ranking.mode = mode;
            }
            if args.no_clear {
                config.display.clear_screen = false;
            }
        })
        .context("Invalid command-line options")?;
    let config = manager.get();

    let mut stdout = io::stdout().lock();

    if args.print_config {
        write!(stdout, "{}", manager.to_toml()?)?;
        return Ok(());
    }

    let language = config.display.language.unwrap_or_else(i18n::detect_language);
    log::info!("display language: {}", language);

    let color = !args.json && terminal::detect_color(config.display.color);
    let session = Session::new(language, config, renderer_for(color));

    if !args.groups.is_empty() {
        let genres = session.rank_names(&args.groups)?;
        if args.json {
            session.presenter().present_json(&mut stdout, &genres)?;
        } else {
            session.presenter().present_ranking(&mut stdout, &genres)?;
        }
        return Ok(());
    }

    if config.display.clear_screen {
        terminal::clear_screen(&mut stdout).context("Failed to clear terminal")?;
    }

    let mut stdin = io::stdin().lock();
    session.run(&mut stdin, &mut stdout)?;
    Ok(())
}

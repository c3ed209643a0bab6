use anyhow::{Context, Result};
use color_chips_config::Config;
use color_chips_engine::{ChipOptions, ColorChips, Pipeline, html, markdown};
use std::{env, fs, path::PathBuf, process};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn load_options(explicit: Option<PathBuf>) -> Result<ChipOptions> {
    match explicit {
        Some(path) => match Config::load_from_path(&path)? {
            Some(config) => Ok(config.chips),
            None => anyhow::bail!("Config file '{}' not found", path.display()),
        },
        None => {
            // Missing default config just means built-in styles
            let config = Config::load()?;
            if config.is_none() {
                tracing::debug!(
                    path = %Config::config_path().display(),
                    "no config file, using default chip styles"
                );
            }
            Ok(config.map(|c| c.chips).unwrap_or_default())
        }
    }
}

/// argv[0], or the binary name when the caller passed an empty argv.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("color-chips-cli", String::as_str)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_chips=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, config_path) = match args.len() {
        2 => (PathBuf::from(&args[1]), None),
        3 => (PathBuf::from(&args[1]), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Usage: {} <markdown-file> [config-file]", program_name(&args));
            eprintln!(
                "Default config file: {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let options = load_options(config_path)?;
    let source = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read markdown file '{}'", input.display()))?;

    let pipeline = Pipeline::new().with_stage(ColorChips::new(&options));
    let mut tree = markdown::to_tree(&source);
    pipeline.run(&mut tree);

    tracing::info!(input = %input.display(), "rendered");
    print!("{}", html::render(&tree));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_from_argv() {
        let args = vec!["/usr/bin/chips".to_string(), "notes.md".to_string()];
        assert_eq!(program_name(&args), "/usr/bin/chips");
    }

    #[test]
    fn test_program_name_with_empty_argv() {
        assert_eq!(program_name(&[]), "color-chips-cli");
    }
}

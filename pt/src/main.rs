use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use prtemplate::cli::{Cli, Command};
use prtemplate::config::Config;
use prtemplate::{TemplateLocator, compose, update_block};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

/// Read generated content from a file, or stdin when no path is given
fn read_content(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).context(format!("Failed to read {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let workspace = cli.workspace.unwrap_or_else(|| config.workspace.clone());
    let locator = TemplateLocator::new(&workspace);

    info!("prtemplate starting in {}", workspace.display());

    match cli.command {
        Command::List { json } => {
            let templates = locator.enumerate()?;
            if json {
                let listing: Vec<_> = templates
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "path": t.path,
                            "filename": t.filename,
                            "source": t.source,
                            "is_default_candidate": t.is_default_candidate,
                            "preview": t.preview(config.preview_chars),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else if templates.is_empty() {
                println!("No templates found");
            } else {
                for t in &templates {
                    let marker = if t.is_default_candidate {
                        "*".green()
                    } else {
                        " ".normal()
                    };
                    println!(
                        "{} {} {}",
                        marker,
                        t.source.as_str().yellow(),
                        t.path.display()
                    );
                    if let Some(line) = t.preview(config.preview_chars).lines().next() {
                        println!("    {}", line.dimmed());
                    }
                }
            }
        }
        Command::Default => match locator.default_template()? {
            Some(t) => {
                eprintln!("{}", t.path.display().to_string().cyan());
                print!("{}", t.content);
            }
            None => println!("No templates found"),
        },
        Command::Show { path } => match locator.find_by_path(&path)? {
            Some(t) => print!("{}", t.content),
            None => eyre::bail!("Template not found: {}", path.display()),
        },
        Command::Compose { template, content } => {
            let generated = read_content(content.as_ref())?;
            let body = match template {
                Some(p) => {
                    locator
                        .find_by_path(&p)?
                        .map(|t| t.content)
                        .ok_or_else(|| eyre::eyre!("Template not found: {}", p.display()))?
                }
                None => locator
                    .default_template()?
                    .map(|t| t.content)
                    .unwrap_or_default(),
            };
            println!("{}", compose(&body, &generated));
        }
        Command::Update { body, content } => {
            let generated = read_content(content.as_ref())?;
            let existing = std::fs::read_to_string(&body)
                .context(format!("Failed to read {}", body.display()))?;
            println!("{}", update_block(&existing, &generated)?);
        }
    }

    Ok(())
}

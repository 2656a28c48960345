use clap::Parser;
use doctag::application::{
    init, ConfigService, IndexOptions, IndexService, OpenService, PreviewService,
};
use doctag::cli::{format_item_list, format_open_request, format_preview, Cli, Commands};
use doctag::domain::tags::{IndexStyle, ReadmeFilter};
use doctag::error::DoctagError;
use doctag::infrastructure::{Config, DoctagRepository, FileSystemRepository};
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Load the discovered configuration, falling back to defaults when no
/// .doctag directory exists (search paths may still come from --path or
/// DOCTAG_PATH).
fn load_config() -> Result<Config, DoctagError> {
    match FileSystemRepository::discover() {
        Ok(repo) => repo.load_config(),
        Err(DoctagError::NotDoctagDirectory(_)) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

fn build_options(
    style: Option<String>,
    lang: Option<String>,
    readme: Option<String>,
    paths: Vec<PathBuf>,
) -> Result<IndexOptions, DoctagError> {
    let style = style
        .as_deref()
        .map(IndexStyle::from_str)
        .transpose()
        .map_err(DoctagError::Config)?;
    let readme = readme
        .as_deref()
        .map(ReadmeFilter::from_str)
        .transpose()
        .map_err(DoctagError::Config)?;

    Ok(IndexOptions {
        style,
        langs: lang,
        readme,
        paths,
    })
}

fn warn_skipped(skipped: &[PathBuf]) {
    for path in skipped {
        eprintln!("Warning: skipped unreadable tag file: {}", path.display());
    }
}

fn run(cli: Cli) -> Result<(), DoctagError> {
    match cli.command {
        Commands::Init { path, search_paths } => init::init(&path, search_paths),

        Commands::List {
            style,
            lang,
            readme,
            paths,
            json,
        } => {
            let config = load_config()?;
            let options = build_options(style, lang, readme, paths)?;

            let outcome = IndexService::new(config).execute(&options)?;
            warn_skipped(&outcome.skipped);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.items)?);
            } else {
                println!("{}", format_item_list(&outcome.items).trim_end());
            }
            Ok(())
        }

        Commands::Preview {
            tag,
            height,
            style,
            lang,
            readme,
            paths,
            json,
        } => {
            let config = load_config()?;
            let options = build_options(style, lang, readme, paths)?;

            let mut service = PreviewService::new(config);
            let preview = service.execute(&options, &tag, height)?;

            // An item without action data is a no-op, not a failure.
            if let Some(preview) = preview {
                if json {
                    println!("{}", serde_json::to_string_pretty(&preview)?);
                } else {
                    println!("{}", format_preview(&preview).trim_end());
                }
            }
            Ok(())
        }

        Commands::Open {
            tag,
            command,
            style,
            lang,
            readme,
            paths,
            json,
        } => {
            let config = load_config()?;
            let options = build_options(style, lang, readme, paths)?;

            let service = OpenService::new(config);
            let request = service.execute(&options, &tag, &command)?;

            if let Some(request) = request {
                if json {
                    println!("{}", serde_json::to_string_pretty(&request)?);
                } else {
                    println!("{}", format_open_request(&request).trim_end());
                }
            }
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("paths = {:?}", config.paths);
                println!("help_lang = {}", config.help_lang);
                println!("style = {}", format!("{:?}", config.style).to_lowercase());
                println!("readme = {}", format!("{:?}", config.readme).to_lowercase());
                println!(
                    "resolver = {}",
                    format!("{:?}", config.resolver).to_lowercase()
                );
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: doctag config [--list | <key> [<value>]]");
                println!("Valid keys: paths, help_lang, style, readme, resolver");
                Ok(())
            }
        }
    }
}

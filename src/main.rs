use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use astroview::{Options, Viewer, ViewerError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML options file. Missing sections keep their defaults.
    #[arg(short, long)]
    options: Option<PathBuf>,
    /// Directory that relative texture paths resolve against.
    #[arg(short, long)]
    textures: Option<PathBuf>,
    /// Window title.
    #[arg(long, default_value = "Astroview")]
    title: String,
    /// Print the options JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print the default options as TOML and exit.
    #[arg(long)]
    print_default_options: bool,
}

fn run(args: Args) -> Result<(), ViewerError> {
    if args.print_schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        writeln!(std::io::stdout().lock(), "{schema}")?;
        return Ok(());
    }
    if args.print_default_options {
        let toml = Options::default().to_toml_string()?;
        write!(std::io::stdout().lock(), "{toml}")?;
        return Ok(());
    }

    let mut options = match &args.options {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };
    if let Some(dir) = args.textures {
        options.textures.base_dir = Some(dir);
    }

    Viewer::builder()
        .with_options(options)
        .with_title(args.title)
        .build()
        .run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

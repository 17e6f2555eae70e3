use anyhow::Context;
use clap::Parser;
use gko_config::GkoConfig;

mod cli;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("gko error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = GkoConfig::load_with_file(cli.config.as_deref())
        .context("failed to load configuration")?;
    init_tracing(cli.log_level(&config.logging.level))?;

    let settings = cli.output_settings(&config.output);

    if cli.schema {
        print!("{}", output::render_schema(settings.pretty)?);
        return Ok(());
    }

    let mut sources = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        sources.push((path.display().to_string(), source));
    }
    tracing::debug!(files = sources.len(), "extracting outline");

    let outline = gko_parser::extract_files(
        sources
            .iter()
            .map(|(file, source)| (file.as_str(), source.as_str())),
    )?;

    print!("{}", output::render(&outline, settings)?);
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GKO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

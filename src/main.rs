use std::path::Path;

use clap::Parser;

use callboard::cli::{Cli, Commands};
use callboard::config::StaticConfig;
use callboard::runtime;
use callboard::system::init_logging;

fn generate_config(output_path: Option<String>, force: bool) -> anyhow::Result<()> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());
    if Path::new(&path).exists() && !force {
        anyhow::bail!("{} already exists, use --force to overwrite", path);
    }

    StaticConfig::write_sample_config(&path)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
    println!("Sample configuration written to {}", path);
    Ok(())
}

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Some(Commands::ConfigGen { output_path, force }) = cli.command {
        if let Err(e) = generate_config(output_path, force) {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let config = match StaticConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime::run_server(&config).await {
        tracing::error!("Server exited with error: {:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

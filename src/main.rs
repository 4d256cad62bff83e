// main.rs - CLI entry point

use tournament_loader::cli::{apply_file_names, Config};
use tournament_loader::error::error_chain;
use tournament_loader::logging;
use tournament_loader::prelude::*;

fn main() {
    logging::init();

    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let raw: Vec<String> = std::env::args().collect();
    let raw: Vec<&str> = raw.iter().map(String::as_str).collect();

    let mut args = match parse_args(&raw) {
        Ok(args) => args,
        Err(early) => {
            return match early.status {
                // --help
                Ok(()) => {
                    println!("{}", early.output);
                    Ok(())
                }
                Err(()) => Err(early.output.trim_end().to_string()),
            };
        }
    };

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let mut config = Config::new();
    if let Some(config_path) = args.config.clone() {
        (args, config) = args.with_config_file(&config_path)?;
        if !args.json {
            println!("📄 Loaded configuration from: {}", config_path);
        }
    }

    let cwd = std::env::current_dir()
        .map_err(|e| format!("Failed to resolve current working directory: {}", e))?;
    let mut settings = validate_args(&args, &cwd)?;
    if let Some(names) = &config.files {
        apply_file_names(&mut settings, names)?;
    }

    if !args.json {
        println!("🚀 tournament-loader v{}", env!("CARGO_PKG_VERSION"));
        println!("📂 Input directory: {}", settings.input_dir.display());
    }
    tracing::debug!(?settings, "resolved settings");

    let inputs = load_inputs(&settings).map_err(|e| error_chain(&e))?;

    print_summary(&inputs, settings.overwrite, args.json)
}

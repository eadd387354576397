use anyhow::Context;
use clap::Parser;
use pointcalc::app::commands::{run_add, run_demo, run_point};
use pointcalc::domain::ports::{resolve_log_level, resolve_overflow_policy, ConfigProvider};
use pointcalc::utils::{logger, validation::Validate};
use pointcalc::{print_point, CalcError, CliConfig, Command, Point, TomlConfig};
use std::io::Write;

fn load_file_config(config: &CliConfig) -> anyhow::Result<TomlConfig> {
    let Some(path) = &config.config else {
        return Ok(TomlConfig::default());
    };
    let file_config =
        TomlConfig::from_file(path).with_context(|| format!("loading config from {}", path))?;
    file_config
        .validate()
        .with_context(|| format!("validating config from {}", path))?;
    Ok(file_config)
}

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let file_config = match load_file_config(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            let code = e.downcast_ref::<CalcError>().map_or(1, CalcError::exit_code);
            std::process::exit(code);
        }
    };

    let providers: [&dyn ConfigProvider; 2] = [&config, &file_config];
    let level = resolve_log_level(&providers);
    if file_config.log_json() {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    let policy = resolve_overflow_policy(&providers);
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Overflow policy: {}", policy);

    let command = config.command.clone().unwrap_or(Command::Demo);
    if let Command::Point { x, y } = command {
        if !config.json {
            // 寫入失敗一律忽略，與 print_point 一致
            print_point(Point::new(x, y));
            return;
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match command {
        Command::Add { a, b } => run_add(&mut out, policy, a, b, config.json),
        Command::Point { x, y } => run_point(&mut out, Point::new(x, y), config.json),
        Command::Demo => run_demo(&mut out, policy, config.json),
    }
    .and_then(|()| out.flush().map_err(CalcError::from));

    if let Err(e) = result {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

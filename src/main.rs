// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Get | List | Cpu | Exit | Options | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use corelib_native::cli::global::GlobalOptions;
use corelib_native::cli::{self, Command};
use corelib_native::cmd::config::run_options_command;
use corelib_native::cmd::cpu::run_cpu_command;
use corelib_native::cmd::env::{run_get_command, run_list_command};
use corelib_native::config::loader::ConfigLoader;
use corelib_native::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use corelib_native::logging::{LogConfig, LogGuard, init_logging};
use corelib_native::shim::EnvironmentShim;

use mimalloc::MiMalloc;
use tracing::warn;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &sources, log_guard)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(
    cli: &cli::Cli,
    config: &Config,
    sources: &[String],
    log_guard: LogGuard,
) -> ExitCode {
    let shim = EnvironmentShim::os();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(Into::into)
        }
        Some(Command::Options) => run_options_command(config, sources, &mut out),
        Some(Command::Get(args)) => run_get_command(args, &shim, &mut out),
        Some(Command::List(args)) => run_list_command(args, &shim, config, &mut out),
        Some(Command::Cpu) => run_cpu_command(&shim, &mut out),
        Some(Command::Exit(args)) => {
            if let Err(e) = out.flush() {
                warn!("failed to flush stdout before exit: {e}");
            }
            drop(out);
            drop(log_guard);
            shim.terminate(args.code)
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result.and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> corelib_native::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `storehub_core` linkage and schema bootstrap without a transport.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use storehub_core::db::migrations::current_user_version;
use storehub_core::StoreHubConfig;

fn main() -> ExitCode {
    println!("storehub_core ping={}", storehub_core::ping());
    println!("storehub_core version={}", storehub_core::core_version());

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = match StoreHubConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("storehub_core config error={err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = storehub_core::init_logging_from_config(&config) {
        eprintln!("storehub_core logging error={err}");
        return ExitCode::FAILURE;
    }

    match config
        .open_database()
        .and_then(|conn| current_user_version(&conn))
    {
        Ok(version) => {
            println!("storehub_core schema_version={version}");
            println!(
                "storehub_core tenant_header={}",
                config.tenant_resolver().header_name()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("storehub_core database error={err}");
            ExitCode::FAILURE
        }
    }
}

use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Narrated,
}

mod commands;
mod output;
mod tty;

use commands::{migrate, plan};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "relocator")]
#[command(version = VERSION)]
#[command(about = "Relocate components/ into src/components/ and rewrite their imports")]
struct Cli {
    /// Project root containing components/ and App.tsx
    #[arg(long, global = true, default_value = ".")]
    root: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy components into the new layout and patch the entry point (default)
    Migrate(migrate::MigrateArgs),
    /// Preview the migration plan against the files on disk
    Plan(plan::PlanArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Migrate(args) if !args.json => ResponseMode::Narrated,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Migrate(migrate::MigrateArgs::default()));

    let global = match GlobalArgs::resolve(&cli.root) {
        Ok(global) => global,
        Err(err) => {
            let exit_code = output::exit_code_for_error(err.code);
            let _ = output::print_result::<serde_json::Value>(Err(err));
            return std::process::ExitCode::from(exit_code_to_u8(exit_code));
        }
    };

    if let ResponseMode::Narrated = response_mode(&command) {
        return match commands::run_narrated(command, &global) {
            Ok(exit_code) => std::process::ExitCode::from(exit_code_to_u8(exit_code)),
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                let _ = output::print_result::<serde_json::Value>(Err(err));
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        };
    }

    let (json_result, exit_code) = commands::run_json(command, &global);
    let _ = output::print_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

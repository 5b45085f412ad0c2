use std::path::PathBuf;

pub type CmdResult<T> = relocator::Result<(T, i32)>;

#[derive(Debug)]
pub(crate) struct GlobalArgs {
    /// Project root every plan path is resolved against.
    pub root: PathBuf,
}

impl GlobalArgs {
    pub fn resolve(root: &str) -> relocator::Result<Self> {
        let expanded = shellexpand::tilde(root).to_string();
        let root = PathBuf::from(expanded);

        if !root.is_dir() {
            return Err(relocator::Error::validation_invalid_argument(
                "root",
                format!("Not a directory: {}", root.display()),
            ));
        }

        Ok(GlobalArgs { root })
    }
}

pub mod migrate;
pub mod plan;

/// Run a command whose output is human-readable narration on stdout.
pub(crate) fn run_narrated(
    command: crate::Commands,
    global: &GlobalArgs,
) -> relocator::Result<i32> {
    match command {
        crate::Commands::Migrate(args) => migrate::run_narrated(args, global),
        _ => Err(relocator::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support narrated output",
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (relocator::Result<serde_json::Value>, i32) {
    crate::tty::status("relocator is working...");

    match command {
        crate::Commands::Migrate(args) => dispatch!(args, global, migrate),
        crate::Commands::Plan(args) => dispatch!(args, global, plan),
    }
}

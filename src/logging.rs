use std::fs::OpenOptions;
use std::io;

use env_logger::{Builder, Target};

use crate::config::Config;

/// Routes the log macros to the configured file. The terminal belongs to the
/// dashboard, so nothing is written to stderr. `RUST_LOG` still overrides
/// the configured level.
pub fn init(config: &Config) -> io::Result<()> {
    if let Some(dir) = config.log_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&config.log_file)?;

    Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

use crate::{Result, Twenty48Error};
use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Rotating files in this directory. Required while the terminal is in raw mode.
    File(PathBuf),
    Stderr,
}

/// Start the global logger. `RUST_LOG` overrides `level`.
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(level: &str, target: LogTarget) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(level)
        .map_err(|e| Twenty48Error::Logging(format!("invalid log level '{}': {}", level, e)))?
        .format(opt_format);

    let logger = match target {
        LogTarget::File(directory) => logger
            .log_to_file(FileSpec::default().directory(directory))
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            ),
        LogTarget::Stderr => logger,
    };

    logger
        .start()
        .map_err(|e| Twenty48Error::Logging(format!("cannot start logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let handle = setup_logging("info", LogTarget::File(dir.path().to_path_buf())).unwrap();

        log::info!("logging test line");
        handle.flush();

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(!files.is_empty());
    }
}

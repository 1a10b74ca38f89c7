use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::Path;

/// Start the global logger. `RUST_LOG` wins over `level`.
///
/// With a directory, logs go to rotating files there (10 MB, numbered, last
/// one kept); otherwise to stderr. Keep the handle alive for the whole run.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            )
            .start(),
        None => logger.format(flexi_logger::colored_default_format).start(),
    }
}

//! Logger setup driven by the `logfile` and `logoverwrite` options

use crate::config::options::registrations::{LOG_FILE, LOG_OVERWRITE};
use crate::config::options::OptionsRegistry;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open the log file, truncating it when `overwrite` is set
pub fn open_log_file(path: &Path, overwrite: bool) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(!overwrite)
        .truncate(overwrite)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))
}

/// Logger configured from the options, not yet installed
///
/// Verbosity comes from `RUST_LOG`. Output goes to `logfile` when it is set and
/// to standard error otherwise. The log file is opened here.
pub fn builder(options: &OptionsRegistry) -> Result<env_logger::Builder> {
    let logfile = options.get(LOG_FILE)?.as_string()?;
    let overwrite = options.get(LOG_OVERWRITE)?.as_bool()?;

    let mut builder = env_logger::Builder::from_default_env();
    if !logfile.is_empty() {
        let file = open_log_file(Path::new(&logfile), overwrite)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    Ok(builder)
}

/// Install the global logger
pub fn init(options: &OptionsRegistry) -> Result<()> {
    builder(options)?.try_init().context("Failed to initialize logger")?;

    let logfile = options.get(LOG_FILE)?.as_string()?;
    log::debug!("Logging to {}", if logfile.is_empty() { "stderr" } else { logfile.as_str() });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{OptionDefinition, OptionKind, OptionValue};
    use crate::config::Config;
    use std::io::Write;

    fn temp_log(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pms-{}-{}.log", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_append_keeps_previous_content() {
        let path = temp_log("append");
        std::fs::write(&path, "first\n").unwrap();

        let mut file = open_log_file(&path, false).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_overwrite_truncates() {
        let path = temp_log("overwrite");
        std::fs::write(&path, "stale\n").unwrap();

        let mut file = open_log_file(&path, true).unwrap();
        file.write_all(b"fresh\n").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_builder_without_logfile_opens_nothing() {
        let config = Config::with_defaults().unwrap();
        assert_eq!(config.options.get(LOG_FILE).unwrap(), OptionValue::String(String::new()));

        assert!(builder(&config.options).is_ok());
    }

    #[test]
    fn test_builder_opens_configured_file() {
        let path = temp_log("builder");
        std::fs::write(&path, "stale\n").unwrap();

        let config = Config::with_defaults().unwrap();
        config.options.set(LOG_FILE, path.to_str().unwrap()).unwrap();
        config.options.set(LOG_OVERWRITE, "true").unwrap();
        builder(&config.options).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_builder_rejects_wrong_kind() {
        let options = OptionsRegistry::new();
        for (key, kind) in [(LOG_FILE, OptionKind::Int), (LOG_OVERWRITE, OptionKind::Bool)] {
            options
                .register(OptionDefinition {
                    key: key.to_string(),
                    description: String::new(),
                    kind,
                })
                .unwrap();
        }

        let err = builder(&options).unwrap_err();
        assert!(err.to_string().contains("Expected String"), "{}", err);
    }

    #[test]
    fn test_builder_requires_registered_options() {
        let err = builder(&OptionsRegistry::new()).unwrap_err();
        assert!(err.to_string().contains("unknown option 'logfile'"), "{}", err);
    }
}

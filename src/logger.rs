use crate::constants::{APP_NAME, ENV_ENABLE_LOGGING, ENV_LOG_DIR, ENV_LOG_VERBOSE};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

struct Logger {
    path: PathBuf,
    verbose: bool,
    enabled: bool,
}

impl Logger {
    fn init() -> Self {
        let dir = std::env::var(ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_log_dir());
        let _ = fs::create_dir_all(&dir);

        // Use different log file names for debug vs release
        let filename = if cfg!(debug_assertions) {
            format!("{}-dev.log", APP_NAME)
        } else {
            format!("{}.log", APP_NAME)
        };
        let path = dir.join(filename);

        let verbose = std::env::var(ENV_LOG_VERBOSE)
            .map(|v| v == "1")
            .unwrap_or(false);

        // Debug builds always log; release builds only with the opt-in variable
        let enabled = if cfg!(debug_assertions) {
            true
        } else {
            std::env::var(ENV_ENABLE_LOGGING)
                .map(|v| v == "1")
                .unwrap_or(false)
        };

        Self {
            path,
            verbose,
            enabled,
        }
    }

    fn rotate_if_needed(&self) {
        if let Ok(meta) = fs::metadata(&self.path) {
            if meta.len() > MAX_LOG_BYTES {
                let backup = self.path.with_extension("log.bak");
                let _ = fs::remove_file(&backup);
                let _ = fs::rename(&self.path, &backup);
            }
        }
    }

    fn timestamp() -> String {
        Local::now().to_rfc3339()
    }

    fn log(&self, level: &str, message: &str) {
        if !self.enabled {
            return;
        }

        self.rotate_if_needed();
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = writeln!(file, "{} [{}] {}", Self::timestamp(), level, message);
        }
    }
}

fn default_log_dir() -> PathBuf {
    let base = std::env::var("LOCALAPPDATA")
        .or_else(|_| std::env::var("XDG_STATE_HOME"))
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local").join("state")))
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join(APP_NAME).join("logs")
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

fn get_logger() -> Option<&'static Logger> {
    Some(LOGGER.get_or_init(Logger::init))
}

pub fn init_logger() {
    let _ = get_logger();
}

pub fn log_debug(message: &str) {
    log_internal("DEBUG", message, false);
}

pub fn log_debug_verbose(message: &str) {
    log_internal("DEBUG", message, true);
}

pub fn log_info(message: &str) {
    log_internal("INFO", message, false);
}

pub fn log_warn(message: &str) {
    log_internal("WARN", message, false);
}

pub fn log_error(message: &str) {
    log_internal("ERROR", message, false);
}

fn log_internal(level: &str, message: &str, verbose_only: bool) {
    let Some(logger) = get_logger() else {
        return;
    };
    if verbose_only && !logger.verbose {
        return;
    }

    // Console echo on stderr in dev builds; stdout belongs to the form
    #[cfg(debug_assertions)]
    eprintln!("[{}] {}", level, message);

    logger.log(level, message);
}

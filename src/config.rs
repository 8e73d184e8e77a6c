use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Runtime locations. The JSON data files and the log directory are the
/// only deployment-specific settings the engine has.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolve from `HAISOU_DATA_DIR` and `HAISOU_LOG_DIR`. Defaults are
    /// `data/` under the working directory, with logs kept next to the data.
    pub fn from_env() -> Self {
        Self::resolve(
            env::var_os("HAISOU_DATA_DIR"),
            env::var_os("HAISOU_LOG_DIR"),
        )
    }

    fn resolve(data_dir: Option<OsString>, log_dir: Option<OsString>) -> Self {
        let data_dir = data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let log_dir = log_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("logs"));
        Self { data_dir, log_dir }
    }
}

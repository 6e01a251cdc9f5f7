use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/slider, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("slider")
}

/// Get the config file path (~/.config/slider/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the log file (platform cache dir, falling back to home)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("slider")
}

/// Default file for `file` submission mode
pub fn default_submissions_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(get_home_dir)
        .join("slider")
        .join("submissions.jsonl")
}

/// Expand a path string, handling `~`
///
/// Relative paths without `~` are kept relative to the working directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}

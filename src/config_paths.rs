//! Where tabdock keeps its files: `tabdock/` under the platform config
//! directory (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on
//! Windows, `~/Library/Application Support` on macOS).

use std::path::PathBuf;

fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("tabdock"))
}

/// Engine configuration, `tabdock/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("config.yaml"))
}

/// Rotating log files, `tabdock/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_app_dir() {
        if let (Some(config), Some(logs)) = (config_file(), logs_dir()) {
            assert!(config.ends_with("tabdock/config.yaml"));
            assert!(logs.ends_with("tabdock/logs"));
            assert_eq!(config.parent(), logs.parent());
        }
    }
}

use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "keyrace";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|pd| pd.config_dir().join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("keyrace.log"))
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_local_dir().join("keyrace.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_end_in_expected_file_names() {
        if let Some(p) = AppDirs::config_path() {
            assert!(p.ends_with("config.json"));
        }
        if let Some(p) = AppDirs::log_path() {
            assert!(p.ends_with("keyrace.log"));
        }
    }
}

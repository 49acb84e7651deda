use std::{fs, path::PathBuf};

use log::LevelFilter;
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    default_size: Option<i32>,
    log_level: Option<String>,
}

impl Settings {
    pub fn get_default_size(&self) -> i32 {
        self.default_size.unwrap_or(25)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Warn)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mrun")
            .join("settings.ron")
    }

    pub fn reset_config(path: PathBuf) {
        let default_settings_string = include_str!("./default_settings.ron");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, default_settings_string).unwrap();
    }

    pub fn load(path: PathBuf) -> Self {
        let default_settings_string = include_str!("./default_settings.ron");

        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        match fs::read_to_string(&path) {
            Ok(settings_string) => match options.from_str(&settings_string) {
                Ok(settings) => settings,
                Err(err) => {
                    panic!("Error reading settings file ({:?}), {}", path, err);
                }
            },
            Err(_) => {
                if let Some(parent) = path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                let _ = fs::write(&path, default_settings_string);
                options.from_str(default_settings_string).unwrap()
            }
        }
    }
}

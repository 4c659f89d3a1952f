use crate::commands::{CmdMessage, CmdResult};
use crate::config::DogearConfig;
use crate::error::{DogearError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes settings in `config_dir`. Every key/value shown is an
/// info message of the form `key = value`.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DogearConfig::load(config_dir)?;
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            for (key, value) in config.list_all() {
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
        }
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => {
                return Err(DogearError::InvalidConfig(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        },
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).map_err(DogearError::InvalidConfig)?;
            config.save(config_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }
    Ok(result)
}

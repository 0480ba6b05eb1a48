use crate::commands::{CmdMessage, CmdResult, FlashdeckPaths};
use crate::config::{unknown_key, FlashdeckConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &FlashdeckPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = FlashdeckConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = FlashdeckConfig::load(dir)?;
            let val = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = FlashdeckConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashdeckError;

    fn paths(dir: &tempfile::TempDir) -> FlashdeckPaths {
        FlashdeckPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(&paths, ConfigAction::Set("stats-days".into(), "14".into())).unwrap();
        assert_eq!(result.config.unwrap().stats_days, 14);

        let result = run(&paths, ConfigAction::ShowKey("stats-days".into())).unwrap();
        assert_eq!(result.messages[0].content, "14");
    }

    #[test]
    fn invalid_value_fails_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(&paths, ConfigAction::Set("stats-days".into(), "0".into()));
        assert!(matches!(result, Err(FlashdeckError::Config(_))));

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), FlashdeckConfig::default());
    }

    #[test]
    fn unknown_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("bogus".into()));
        assert!(matches!(result, Err(FlashdeckError::Config(_))));
    }
}

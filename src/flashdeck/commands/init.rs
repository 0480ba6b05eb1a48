use crate::commands::{CmdMessage, CmdResult, FlashdeckPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &FlashdeckPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized flashdeck store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = FlashdeckPaths {
            data_dir: dir.path().join("a").join("b"),
        };
        run(&paths).unwrap();
        assert!(paths.data_dir.is_dir());
    }
}

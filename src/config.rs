use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Config;

pub fn load_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[service]\ndefault_max_size = 5\nmax_section_size = 20\npasscode_length = 8\n"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.service.default_max_size, 5);
        assert_eq!(config.service.max_section_size, 20);
        assert_eq!(config.service.passcode_length, 8);
    }

    #[test]
    fn test_load_config_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.service.default_max_size, 8);
        assert_eq!(config.service.passcode_length, 6);
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config(Path::new("/nonexistent/config.toml")).is_err());
    }
}

use crate::domain::model::FortuneList;
use crate::utils::error::{HelloError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fortune file layout:
///
/// ```toml
/// fortunes = [
///     "You will have a great day!",
///     "Hello from ${USER}",
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneFile {
    pub fortunes: Vec<String>,
}

impl FortuneFile {
    /// 從 TOML 檔案載入籤詩
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelloError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelloError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelloError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_list(self) -> Result<FortuneList> {
        FortuneList::new(self.fortunes)
    }
}

/// Loads and validates a fortune file in one step.
pub fn load_fortunes<P: AsRef<Path>>(path: P) -> Result<FortuneList> {
    let list = FortuneFile::from_file(&path)?.into_list()?;
    tracing::debug!(
        "Loaded {} fortunes from {}",
        list.len(),
        path.as_ref().display()
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let file = FortuneFile::from_toml_str(r#"fortunes = ["a", "b"]"#).unwrap();
        assert_eq!(file.fortunes, vec!["a", "b"]);
        assert_eq!(file.into_list().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_env_var_is_left_as_is() {
        let file =
            FortuneFile::from_toml_str(r#"fortunes = ["${HELLO_FORTUNE_SURELY_UNSET_VAR}"]"#)
                .unwrap();
        assert_eq!(file.fortunes[0], "${HELLO_FORTUNE_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let result = FortuneFile::from_toml_str("title = \"nope\"");
        let err = result.unwrap_err();
        assert!(matches!(err, HelloError::ConfigValidationError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let file = FortuneFile::from_toml_str("fortunes = []").unwrap();
        assert!(matches!(file.into_list(), Err(HelloError::EmptyFortuneList)));
    }
}

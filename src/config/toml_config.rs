use crate::config::PeriodNames;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// 名稱設定檔的頂層結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct NamesDocument {
    #[serde(default)]
    names: PeriodNames,
}

impl PeriodNames {
    /// 從 TOML 檔案載入名稱表
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading period names from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名稱表，並驗證結果
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        let document: NamesDocument = toml::from_str(&processed_content)?;
        document.names.validate()?;
        Ok(document.names)
    }
}

/// 替換環境變數 (例如 ${LOCALE_DAYS})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

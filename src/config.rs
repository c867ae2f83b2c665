//! 配置加载
//!
//! 可选的 TOML 配置文件 (~/.config/htoi/config.toml)，
//! 所有字段都有默认值，文件缺失时直接使用默认配置。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 提示符文本（区域宽度按字符数计算，建议保持 ASCII）
    pub prompt: String,
    /// 历史记录条数上限，None 表示不设上限
    pub history_limit: Option<usize>,
    /// --debug 模式下追加写入的日志文件
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "htoi > ".to_string(),
            history_limit: None,
            log_file: PathBuf::from("debug.log"),
        }
    }
}

/// 配置文件路径 (~/.config/htoi/config.toml)
pub fn config_path() -> io::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("htoi");

    Ok(config_dir.join("config.toml"))
}

/// 从 TOML 文件加载配置，文件不存在时返回默认配置
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(config)
}

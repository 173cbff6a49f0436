//! # Config 模块
//!
//! 生成器配置。
//!
//! ## 配置优先级
//!
//! 1. 配置文件 (anim-gen.json，可选)
//! 2. 默认值（工程内固定路径）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名（相对于工作目录）
pub const CONFIG_FILE: &str = "anim-gen.json";

/// 生成器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// 管道模型文件
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// 动画输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// 输出 debug 级别日志（逐文件记录）
    #[serde(default)]
    pub debug: bool,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(
        "src/main/resources/Common/Blocks/HytaleIndustries_ItemPipes/HytaleIndustries_ItemPipes_Pipe.blockymodel",
    )
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/main/resources/Common/Blocks/Animations/ItemPipes")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            output_dir: default_output_dir(),
            debug: false,
        }
    }
}

impl GeneratorConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时静默使用默认配置；读取或解析失败时打印警告并使用默认配置。
    /// 此时日志尚未初始化，警告直接写到 stderr。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("⚠️ 配置文件解析失败: {}，使用默认配置", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("⚠️ 配置文件读取失败: {}，使用默认配置", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_paths() {
        let config = GeneratorConfig::default();
        assert!(
            config
                .model_path
                .ends_with("HytaleIndustries_ItemPipes/HytaleIndustries_ItemPipes_Pipe.blockymodel")
        );
        assert!(config.output_dir.ends_with("Animations/ItemPipes"));
        assert!(!config.debug);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"output_dir": "out"}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.model_path, default_model_path());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load(dir.path().join(CONFIG_FILE));
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(GeneratorConfig::load(&path), GeneratorConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"model_path": "pipe.blockymodel", "debug": true}"#).unwrap();

        let config = GeneratorConfig::load(&path);
        assert_eq!(config.model_path, PathBuf::from("pipe.blockymodel"));
        assert_eq!(config.output_dir, default_output_dir());
        assert!(config.debug);
    }
}

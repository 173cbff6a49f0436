//! # Error 模块
//!
//! 定义 pipe-anim 中使用的错误类型。

use std::path::PathBuf;
use thiserror::Error;

/// 动画生成错误
#[derive(Error, Debug)]
pub enum AnimError {
    /// 模型文件读取失败
    #[error("读取模型文件失败: {path:?}")]
    ReadModel {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 模型文件解析失败
    #[error("解析模型文件失败: {path:?}")]
    ParseModel {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 输出目录创建失败
    #[error("创建输出目录失败: {path:?}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 动画文件写入失败
    #[error("写入动画文件失败: {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 动画文档序列化失败
    #[error("动画文档序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 无效的 sideConfig 值（严格解码）
    #[error("无效的 sideConfig 值: {raw}")]
    InvalidSideConfig { raw: u32 },
}

/// Result 类型别名
pub type AnimResult<T> = Result<T, AnimError>;

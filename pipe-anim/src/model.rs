//! # Model 模块
//!
//! blockymodel 节点树的最小只读表示。
//!
//! 只关心 `nodes` / `name` / `children` 三个字段，其余字段忽略。
//! 解析是宽松的：缺失或为 `null` 的列表视为空，列表中的非对象条目被跳过，
//! 非字符串的 `name` 视为没有名字。

use crate::error::{AnimError, AnimResult};
use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// blockymodel 文档
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockyModel {
    /// 根节点列表
    #[serde(default, deserialize_with = "lenient_nodes")]
    pub nodes: Vec<ModelNode>,
}

/// 模型节点
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelNode {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_nodes")]
    pub children: Vec<ModelNode>,
}

impl ModelNode {
    /// 创建有名字的节点
    pub fn named(name: impl Into<String>, children: Vec<ModelNode>) -> Self {
        Self {
            name: Some(name.into()),
            children,
        }
    }
}

impl BlockyModel {
    pub fn new(nodes: Vec<ModelNode>) -> Self {
        Self { nodes }
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> AnimResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AnimError::ReadModel {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json_str(&content).map_err(|source| AnimError::ParseModel {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), roots = model.nodes.len(), "模型加载完成");
        Ok(model)
    }

    /// 按深度优先先序遍历所有有名字的节点
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        let mut stack: Vec<&ModelNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                stack.extend(node.children.iter().rev());
                if let Some(name) = node.name.as_deref() {
                    return Some(name);
                }
            }
            None
        })
    }
}

/// 收集名字以 `prefix` 开头的节点（遍历顺序）
pub fn gather_prefixed_names<'a>(model: &'a BlockyModel, prefix: &str) -> Vec<&'a str> {
    model
        .node_names()
        .filter(|name| name.starts_with(prefix))
        .collect()
}

fn lenient_nodes<'de, D>(deserializer: D) -> Result<Vec<ModelNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    items
        .into_iter()
        .filter(Value::is_object)
        .map(|item| ModelNode::deserialize(item).map_err(de::Error::custom))
        .collect()
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(name) => Ok(Some(name)),
        _ => Ok(None),
    }
}

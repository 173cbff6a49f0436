//! # Animation 模块
//!
//! blockyanim 动画文档结构与构建。
//!
//! 每个 sideConfig 对应一份单关键帧动画：在 `time = 1` 时把各分组节点的
//! shapeStretch 阶跃到规则表给出的缩放，并保持最后一帧。

use crate::error::AnimResult;
use crate::model::{BlockyModel, gather_prefixed_names};
use crate::rules::{Scale, group_prefix, visibility_rules};
use crate::side_config::SideConfig;
use serde::Serialize;
use serde::ser::Serializer;
use std::collections::HashMap;

/// 文档格式版本
pub const FORMAT_VERSION: u32 = 1;

/// 动画时长（帧）
pub const DURATION: u32 = 1;

/// 关键帧插值方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationType {
    Step,
}

/// 关键帧
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe<T> {
    pub time: u32,
    pub delta: T,
    pub interpolation_type: InterpolationType,
}

/// 单个节点的动画通道
///
/// 字段顺序即输出顺序。除 shapeStretch 外的通道本工具不写入，
/// 保持为空数组。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAnimation {
    pub position: Vec<Keyframe<serde_json::Value>>,
    pub orientation: Vec<Keyframe<serde_json::Value>>,
    pub scale: Vec<Keyframe<serde_json::Value>>,
    pub shape_stretch: Vec<Keyframe<Scale>>,
    pub shape_visible: Vec<Keyframe<serde_json::Value>>,
    pub shape_uv_offset: Vec<Keyframe<serde_json::Value>>,
}

impl NodeAnimation {
    /// 在第 1 帧阶跃到指定缩放
    pub fn stretch_to(scale: Scale) -> Self {
        Self {
            shape_stretch: vec![Keyframe {
                time: 1,
                delta: scale,
                interpolation_type: InterpolationType::Step,
            }],
            ..Self::default()
        }
    }

    /// 最终的 shapeStretch 缩放
    pub fn final_stretch(&self) -> Option<Scale> {
        self.shape_stretch.last().map(|k| k.delta)
    }
}

/// 按插入顺序保存的节点动画表
///
/// 重复插入同名节点时覆盖旧值，但保留其首次出现的位置。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeAnimations {
    entries: Vec<(String, NodeAnimation)>,
    index: HashMap<String, usize>,
}

impl NodeAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖
    pub fn insert(&mut self, name: impl Into<String>, animation: NodeAnimation) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = animation,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, animation));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&NodeAnimation> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 节点名（插入顺序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeAnimation)> {
        self.entries.iter().map(|(name, anim)| (name.as_str(), anim))
    }
}

impl Serialize for NodeAnimations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, anim)| (name, anim)))
    }
}

/// blockyanim 文档
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDocument {
    pub format_version: u32,
    pub duration: u32,
    pub hold_last_keyframe: bool,
    pub node_animations: NodeAnimations,
}

impl AnimationDocument {
    pub fn new(node_animations: NodeAnimations) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            duration: DURATION,
            hold_last_keyframe: true,
            node_animations,
        }
    }
}

/// 根据 sideConfig 构建动画文档
///
/// 按方向顺序、再按分组顺序，为每个匹配 `<模型方向>_<分组>` 前缀的
/// 节点写入一条 shapeStretch 关键帧。
pub fn make_animation(config: &SideConfig, model: &BlockyModel) -> AnimationDocument {
    let mut node_animations = NodeAnimations::new();

    for (direction, state) in config.iter() {
        for &(suffix, scale) in visibility_rules(state) {
            let prefix = group_prefix(direction, suffix);
            for name in gather_prefixed_names(model, &prefix) {
                node_animations.insert(name, NodeAnimation::stretch_to(scale));
            }
        }
    }

    AnimationDocument::new(node_animations)
}

/// 序列化为最终文件内容（2 空格缩进，末尾换行）
pub fn render_document(document: &AnimationDocument) -> AnimResult<String> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

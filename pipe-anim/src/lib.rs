//! # Pipe Anim
//!
//! 物品管道（Item Pipe）动画资源生成的核心库。
//!
//! ## 架构概述
//!
//! 物品管道的每个面都有一个连接状态（Default / Extract / None），
//! 六个面的组合被打包成一个整数 `sideConfig`（每个方向 2 bit）。
//! 游戏侧根据该整数切换到 `State<NNN>` 交互状态，并播放对应的
//! `HytaleIndustries_ItemPipe_State_<NNN>.blockyanim` 动画。
//!
//! 本库负责离线生成全部 3^6 = 729 份动画：
//!
//! ```text
//! blockymodel ──► BlockyModel ──► gather_prefixed_names
//!                                        │
//! SideConfig ──► visibility_rules ──► make_animation ──► render_document ──► 文件
//!      │
//!      └──► encode() ──► 文件名
//! ```
//!
//! ## 模块结构
//!
//! - [`direction`]：方向定义与模型空间镜像
//! - [`side_config`]：连接状态与 sideConfig 编解码
//! - [`rules`]：状态 → 分组缩放规则表
//! - [`model`]：blockymodel 节点树与前缀名收集
//! - [`animation`]：动画文档结构与构建
//! - [`output`]：批量写出动画文件
//! - [`error`]：错误类型定义

pub mod animation;
pub mod direction;
pub mod error;
pub mod model;
pub mod output;
pub mod rules;
pub mod side_config;

// 重导出核心类型
pub use animation::{
    AnimationDocument, InterpolationType, Keyframe, NodeAnimation, NodeAnimations, make_animation,
    render_document,
};
pub use direction::Direction;
pub use error::{AnimError, AnimResult};
pub use model::{BlockyModel, ModelNode, gather_prefixed_names};
pub use output::{GenerationReport, write_all_animations, write_animation};
pub use rules::{GroupSuffix, Scale, group_prefix, visibility_rules};
pub use side_config::{SIDE_CONFIG_COUNT, SideConfig, State, all_side_configs};

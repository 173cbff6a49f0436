//! # Rules 模块
//!
//! 连接状态 → 模型分组可见性的固定规则表。
//!
//! 分组隐藏通过把 shapeStretch 缩放到 (0,0,0) 实现，
//! 可见则为 (1,1,1)，不使用 shapeVisible 通道。

use crate::direction::Direction;
use crate::side_config::State;
use serde::{Deserialize, Serialize};

/// 每个方向下的模型分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSuffix {
    /// 状态指示灯
    Indicator,
    /// 连接支架
    Bars,
    /// 普通连接时的能量条
    EnergyPassive,
    /// 熄灭的能量条
    EnergyOff,
    /// 抽取时的能量条
    EnergyActive,
}

impl GroupSuffix {
    pub const ALL: [GroupSuffix; 5] = [
        GroupSuffix::Indicator,
        GroupSuffix::Bars,
        GroupSuffix::EnergyPassive,
        GroupSuffix::EnergyOff,
        GroupSuffix::EnergyActive,
    ];

    /// 模型节点命名中的后缀
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indicator => "Indicator",
            Self::Bars => "Bars",
            Self::EnergyPassive => "Energy_Passive",
            Self::EnergyOff => "Energy_Off",
            Self::EnergyActive => "Energy_Active",
        }
    }
}

/// 三维整数缩放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scale {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Scale {
    pub const VISIBLE: Scale = Scale::splat(1);
    pub const HIDDEN: Scale = Scale::splat(0);

    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v, z: v }
    }
}

const V: Scale = Scale::VISIBLE;
const H: Scale = Scale::HIDDEN;

const EXTRACT_RULES: [(GroupSuffix, Scale); 5] = [
    (GroupSuffix::Indicator, V),
    (GroupSuffix::Bars, V),
    (GroupSuffix::EnergyPassive, H),
    (GroupSuffix::EnergyOff, H),
    (GroupSuffix::EnergyActive, V),
];

const DEFAULT_RULES: [(GroupSuffix, Scale); 5] = [
    (GroupSuffix::Indicator, V),
    (GroupSuffix::Bars, V),
    (GroupSuffix::EnergyPassive, V),
    (GroupSuffix::EnergyOff, H),
    (GroupSuffix::EnergyActive, H),
];

const NONE_RULES: [(GroupSuffix, Scale); 5] = [
    (GroupSuffix::Indicator, H),
    (GroupSuffix::Bars, H),
    (GroupSuffix::EnergyPassive, H),
    (GroupSuffix::EnergyOff, H),
    (GroupSuffix::EnergyActive, H),
];

/// 获取某个状态下各分组的缩放（按 [`GroupSuffix::ALL`] 顺序）
pub fn visibility_rules(state: State) -> &'static [(GroupSuffix, Scale); 5] {
    match state {
        State::Extract => &EXTRACT_RULES,
        State::Default => &DEFAULT_RULES,
        State::None => &NONE_RULES,
    }
}

/// 节点名前缀：`<模型方向>_<分组后缀>`
pub fn group_prefix(direction: Direction, suffix: GroupSuffix) -> String {
    format!("{}_{}", direction.model_direction(), suffix.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_of(state: State, suffix: GroupSuffix) -> Scale {
        visibility_rules(state)
            .iter()
            .find(|(s, _)| *s == suffix)
            .map(|(_, scale)| *scale)
            .unwrap()
    }

    #[test]
    fn test_rules_cover_every_suffix_in_order() {
        for state in State::ALL {
            let suffixes: Vec<GroupSuffix> =
                visibility_rules(state).iter().map(|(s, _)| *s).collect();
            assert_eq!(suffixes, GroupSuffix::ALL);
        }
    }

    #[test]
    fn test_default_rules() {
        assert_eq!(scale_of(State::Default, GroupSuffix::Indicator), V);
        assert_eq!(scale_of(State::Default, GroupSuffix::Bars), V);
        assert_eq!(scale_of(State::Default, GroupSuffix::EnergyPassive), V);
        assert_eq!(scale_of(State::Default, GroupSuffix::EnergyOff), H);
        assert_eq!(scale_of(State::Default, GroupSuffix::EnergyActive), H);
    }

    #[test]
    fn test_extract_rules() {
        assert_eq!(scale_of(State::Extract, GroupSuffix::Indicator), V);
        assert_eq!(scale_of(State::Extract, GroupSuffix::Bars), V);
        assert_eq!(scale_of(State::Extract, GroupSuffix::EnergyPassive), H);
        assert_eq!(scale_of(State::Extract, GroupSuffix::EnergyOff), H);
        assert_eq!(scale_of(State::Extract, GroupSuffix::EnergyActive), V);
    }

    #[test]
    fn test_none_hides_everything() {
        assert!(visibility_rules(State::None).iter().all(|(_, s)| *s == H));
    }

    #[test]
    fn test_group_prefix_uses_model_direction() {
        assert_eq!(
            group_prefix(Direction::North, GroupSuffix::EnergyPassive),
            "South_Energy_Passive"
        );
        assert_eq!(group_prefix(Direction::East, GroupSuffix::Bars), "West_Bars");
        assert_eq!(group_prefix(Direction::Up, GroupSuffix::Indicator), "Up_Indicator");
    }
}

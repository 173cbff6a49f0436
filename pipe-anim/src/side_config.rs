//! # SideConfig 模块
//!
//! 管道六个面的连接状态，以及其整数编码。
//!
//! ## 编码格式
//!
//! 每个方向占 2 bit，位偏移为 `2 * direction.index()`：
//!
//! ```text
//! bit:  11-10  9-8  7-6  5-4  3-2  1-0
//! dir:  Down   Up   East West South North
//! ```
//!
//! 状态码：0 = Default，1 = Extract，2 = None，3 未使用。
//! 3^6 个组合只占用 4096 个编码中的 729 个。

use crate::direction::Direction;
use crate::error::{AnimError, AnimResult};
use std::fmt;

/// 合法组合总数（3^6）
pub const SIDE_CONFIG_COUNT: usize = 729;

/// 每个方向占用的位数
const BITS_PER_SIDE: usize = 2;

/// 单个方向的位掩码
const SIDE_MASK: u32 = 0b11;

/// 有效位范围（6 个方向 × 2 bit）
const RAW_MASK: u32 = (1 << (BITS_PER_SIDE * 6)) - 1;

/// 单个面的连接状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// 普通连接
    #[default]
    Default,
    /// 从相邻容器抽取物品
    Extract,
    /// 断开连接
    None,
}

impl State {
    /// 全部状态（按编码顺序，也是枚举时的迭代顺序）
    pub const ALL: [State; 3] = [State::Default, State::Extract, State::None];

    /// 状态码
    pub const fn code(self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Extract => 1,
            Self::None => 2,
        }
    }

    /// 从状态码解析（严格，3 返回 None）
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Default),
            1 => Some(Self::Extract),
            2 => Some(Self::None),
            _ => None,
        }
    }

    /// 扳手切换顺序：Default → Extract → None → Default
    pub const fn cycled(self) -> Self {
        match self {
            Self::Default => Self::Extract,
            Self::Extract => Self::None,
            Self::None => Self::Default,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Extract => "Extract",
            Self::None => "None",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 六个面的连接状态组合
///
/// 按 [`Direction::index`] 存储，所有方向总是存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SideConfig {
    states: [State; 6],
}

impl SideConfig {
    /// 按方向顺序构造
    pub const fn new(states: [State; 6]) -> Self {
        Self { states }
    }

    /// 所有方向使用同一状态
    pub const fn uniform(state: State) -> Self {
        Self { states: [state; 6] }
    }

    /// 获取某个方向的状态
    pub const fn get(&self, direction: Direction) -> State {
        self.states[direction.index()]
    }

    /// 返回修改了某个方向后的副本
    pub const fn with(mut self, direction: Direction, state: State) -> Self {
        self.states[direction.index()] = state;
        self
    }

    /// 按方向顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Direction, State)> + '_ {
        Direction::ALL.iter().map(|&dir| (dir, self.get(dir)))
    }

    /// 打包为整数编码
    pub fn encode(&self) -> u32 {
        self.iter().fold(0, |raw, (dir, state)| {
            raw | (state.code() << (dir.index() * BITS_PER_SIDE))
        })
    }

    /// 从整数编码解码（宽松）
    ///
    /// 与游戏侧读取行为一致：未使用的状态码 3 视为 Default，
    /// 超出 12 bit 的高位被忽略。
    pub fn decode(raw: u32) -> Self {
        let mut config = Self::default();
        for dir in Direction::ALL {
            let code = (raw >> (dir.index() * BITS_PER_SIDE)) & SIDE_MASK;
            config.states[dir.index()] = State::from_code(code).unwrap_or_default();
        }
        config
    }

    /// 从整数编码解码（严格）
    ///
    /// 出现状态码 3 或高位非零时返回错误。
    pub fn try_decode(raw: u32) -> AnimResult<Self> {
        if raw & !RAW_MASK != 0 {
            return Err(AnimError::InvalidSideConfig { raw });
        }
        let mut config = Self::default();
        for dir in Direction::ALL {
            let code = (raw >> (dir.index() * BITS_PER_SIDE)) & SIDE_MASK;
            config.states[dir.index()] =
                State::from_code(code).ok_or(AnimError::InvalidSideConfig { raw })?;
        }
        Ok(config)
    }

    /// 方块交互状态名，如 `State000`
    pub fn state_name(&self) -> String {
        format!("State{:03}", self.encode())
    }

    /// 动画文件名，如 `HytaleIndustries_ItemPipe_State_000.blockyanim`
    pub fn animation_file_name(&self) -> String {
        format!("HytaleIndustries_ItemPipe_State_{:03}.blockyanim", self.encode())
    }
}

impl fmt::Display for SideConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (dir, state)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", dir, state)?;
        }
        Ok(())
    }
}

/// 枚举全部 729 种组合
///
/// 顺序为笛卡尔积顺序：North 变化最慢，Down 变化最快，
/// 每一位按 Default、Extract、None 迭代。
pub fn all_side_configs() -> impl Iterator<Item = SideConfig> {
    (0..SIDE_CONFIG_COUNT).map(|mut n| {
        let mut states = [State::Default; 6];
        for slot in states.iter_mut().rev() {
            *slot = State::ALL[n % 3];
            n /= 3;
        }
        SideConfig::new(states)
    })
}

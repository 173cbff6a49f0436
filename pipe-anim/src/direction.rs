//! # Direction 模块
//!
//! 管道的六个连接面。
//!
//! 方向顺序固定为 North, South, West, East, Up, Down，
//! 与游戏侧 `Direction.index` 一致，sideConfig 的位布局依赖该顺序。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 连接面方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
    Up,
    Down,
}

impl Direction {
    /// 全部方向（按 index 排序）
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::Up,
        Direction::Down,
    ];

    /// 方向序号（0..6），决定 sideConfig 中的位偏移
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::West => 2,
            Self::East => 3,
            Self::Up => 4,
            Self::Down => 5,
        }
    }

    /// 模型空间中的方向
    ///
    /// blockymodel 的节点命名与逻辑方向在水平面上是镜像的：
    /// North/South 互换，West/East 互换，Up/Down 不变。
    pub const fn model_direction(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::Up => Self::Up,
            Self::Down => Self::Down,
        }
    }

    /// 相对的面（相邻方块上朝向本方块的那一面）
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// 模型节点命名中使用的名称
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::West => "West",
            Self::East => "East",
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ();

    /// 从字符串解析方向（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "west" => Ok(Self::West),
            "east" => Ok(Self::East),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn test_model_direction_mirrors_horizontal_axes() {
        assert_eq!(Direction::North.model_direction(), Direction::South);
        assert_eq!(Direction::South.model_direction(), Direction::North);
        assert_eq!(Direction::West.model_direction(), Direction::East);
        assert_eq!(Direction::East.model_direction(), Direction::West);
        assert_eq!(Direction::Up.model_direction(), Direction::Up);
        assert_eq!(Direction::Down.model_direction(), Direction::Down);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        // 与 model_direction 的区别只在竖直方向
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("EAST".parse::<Direction>(), Ok(Direction::East));
        assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
        assert!("left".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }
}

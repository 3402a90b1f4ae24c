use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::LottoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LotteryKind {
    /// 大乐透：前区 5/35 + 后区 2/12
    #[default]
    SuperLotto,
    /// 双色球：红球 6/33 + 蓝球 1/16
    DoubleColor,
}

impl LotteryKind {
    pub fn label(&self) -> &'static str {
        match self {
            LotteryKind::SuperLotto => "大乐透",
            LotteryKind::DoubleColor => "双色球",
        }
    }

    /// 两个号码区，顺序与结果元组一致。
    pub fn pools(&self) -> (Pool, Pool) {
        match self {
            LotteryKind::SuperLotto => (Pool::Front, Pool::Back),
            LotteryKind::DoubleColor => (Pool::Main, Pool::Special),
        }
    }
}

impl fmt::Display for LotteryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Front,
    Back,
    Main,
    Special,
}

impl Pool {
    pub fn max(&self) -> u8 {
        match self {
            Pool::Front => 35,
            Pool::Back => 12,
            Pool::Main => 33,
            Pool::Special => 16,
        }
    }

    pub fn pick_count(&self) -> usize {
        match self {
            Pool::Front => 5,
            Pool::Back => 2,
            Pool::Main => 6,
            Pool::Special => 1,
        }
    }

    pub fn range(&self) -> RangeInclusive<u8> {
        1..=self.max()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pool::Front => "前区",
            Pool::Back => "后区",
            Pool::Main => "红球",
            Pool::Special => "蓝球",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 用户勾选的喜欢号码，对应界面上的两组复选框。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    pub first: BTreeSet<u8>,
    pub second: BTreeSet<u8>,
}

impl Favorites {
    pub fn new<I, J>(first: I, second: J) -> Self
    where
        I: IntoIterator<Item = u8>,
        J: IntoIterator<Item = u8>,
    {
        Self {
            first: first.into_iter().collect(),
            second: second.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    SuperLotto { front: [u8; 5], back: [u8; 2] },
    DoubleColor { main: [u8; 6], special: u8 },
}

impl DrawResult {
    pub fn kind(&self) -> LotteryKind {
        match self {
            DrawResult::SuperLotto { .. } => LotteryKind::SuperLotto,
            DrawResult::DoubleColor { .. } => LotteryKind::DoubleColor,
        }
    }

    pub fn first(&self) -> &[u8] {
        match self {
            DrawResult::SuperLotto { front, .. } => front,
            DrawResult::DoubleColor { main, .. } => main,
        }
    }

    pub fn second(&self) -> &[u8] {
        match self {
            DrawResult::SuperLotto { back, .. } => back,
            DrawResult::DoubleColor { special, .. } => std::slice::from_ref(special),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, numbers: &[u8]) -> fmt::Result {
    write!(f, "[")?;
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", n)?;
    }
    write!(f, "]")
}

/// 写入日志的元组文本：`([1, 2, 3, 4, 5], [6, 7])` 或 `([1, 2, 3, 4, 5, 6], 7)`。
impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        match self {
            DrawResult::SuperLotto { front, back } => {
                write_list(f, front)?;
                write!(f, ", ")?;
                write_list(f, back)?;
            }
            DrawResult::DoubleColor { main, special } => {
                write_list(f, main)?;
                write!(f, ", {}", special)?;
            }
        }
        write!(f, ")")
    }
}

/// 检查喜欢号码是否都在号码区范围内，且数量不超过该区的开奖个数。
pub fn validate_favorites(pool: Pool, favorites: &BTreeSet<u8>) -> Result<(), LottoError> {
    if let Some(&number) = favorites.iter().find(|n| !pool.range().contains(n)) {
        return Err(LottoError::FavoriteOutOfRange { pool, number });
    }
    if favorites.len() > pool.pick_count() {
        return Err(LottoError::TooManyFavorites {
            pool,
            given: favorites.len(),
            max: pool.pick_count(),
        });
    }
    Ok(())
}

/// 解析用户输入的组数，只接受正整数。
pub fn parse_group_count(input: &str) -> Result<usize, LottoError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LottoError::InvalidCount(input.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_max() {
        assert_eq!(Pool::Front.max(), 35);
        assert_eq!(Pool::Back.max(), 12);
        assert_eq!(Pool::Main.max(), 33);
        assert_eq!(Pool::Special.max(), 16);
    }

    #[test]
    fn test_pool_pick_count() {
        assert_eq!(Pool::Front.pick_count(), 5);
        assert_eq!(Pool::Back.pick_count(), 2);
        assert_eq!(Pool::Main.pick_count(), 6);
        assert_eq!(Pool::Special.pick_count(), 1);
    }

    #[test]
    fn test_kind_pools() {
        assert_eq!(LotteryKind::SuperLotto.pools(), (Pool::Front, Pool::Back));
        assert_eq!(LotteryKind::DoubleColor.pools(), (Pool::Main, Pool::Special));
    }

    #[test]
    fn test_display_super_lotto() {
        let result = DrawResult::SuperLotto {
            front: [1, 7, 12, 28, 35],
            back: [3, 11],
        };
        assert_eq!(result.to_string(), "([1, 7, 12, 28, 35], [3, 11])");
    }

    #[test]
    fn test_display_double_color() {
        let result = DrawResult::DoubleColor {
            main: [2, 4, 9, 17, 25, 33],
            special: 16,
        };
        assert_eq!(result.to_string(), "([2, 4, 9, 17, 25, 33], 16)");
    }

    #[test]
    fn test_result_accessors() {
        let result = DrawResult::DoubleColor {
            main: [1, 2, 3, 4, 5, 6],
            special: 9,
        };
        assert_eq!(result.kind(), LotteryKind::DoubleColor);
        assert_eq!(result.first(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(result.second(), &[9]);
    }

    #[test]
    fn test_validate_favorites_ok() {
        let favs: BTreeSet<u8> = [1, 35].into_iter().collect();
        assert!(validate_favorites(Pool::Front, &favs).is_ok());
        assert!(validate_favorites(Pool::Back, &BTreeSet::new()).is_ok());
    }

    #[test]
    fn test_validate_favorites_out_of_range() {
        let favs: BTreeSet<u8> = [0].into_iter().collect();
        assert!(matches!(
            validate_favorites(Pool::Back, &favs),
            Err(LottoError::FavoriteOutOfRange { number: 0, .. })
        ));
        let favs: BTreeSet<u8> = [17].into_iter().collect();
        assert!(validate_favorites(Pool::Special, &favs).is_err());
    }

    #[test]
    fn test_validate_favorites_too_many() {
        let favs: BTreeSet<u8> = [1, 2, 3].into_iter().collect();
        assert!(matches!(
            validate_favorites(Pool::Back, &favs),
            Err(LottoError::TooManyFavorites { given: 3, max: 2, .. })
        ));
    }

    #[test]
    fn test_parse_group_count() {
        assert_eq!(parse_group_count("5").unwrap(), 5);
        assert_eq!(parse_group_count(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_group_count_rejects_non_positive() {
        for input in ["0", "-3", "", "abc", "2.5"] {
            assert!(matches!(
                parse_group_count(input),
                Err(LottoError::InvalidCount(_))
            ));
        }
    }
}

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{LottoError, Result};
use crate::models::{DrawResult, Favorites, LotteryKind, Pool};

/// 生成一注大乐透号码：前区 5 个 (1-35)，后区 2 个 (1-12)。
///
/// 喜欢号码一定出现在结果中，其余号码从去掉喜欢号码后的号码区中不放回抽取。
pub fn generate_super_lotto<R: Rng + ?Sized>(
    front_favorites: &BTreeSet<u8>,
    back_favorites: &BTreeSet<u8>,
    rng: &mut R,
) -> Result<DrawResult> {
    let front = draw_pool(Pool::Front, front_favorites, rng)?;
    let back = draw_pool(Pool::Back, back_favorites, rng)?;

    Ok(DrawResult::SuperLotto {
        front: to_array(&front),
        back: to_array(&back),
    })
}

/// 生成一注双色球号码：红球 6 个 (1-33)，蓝球 1 个 (1-16)。
pub fn generate_double_color<R: Rng + ?Sized>(
    main_favorites: &BTreeSet<u8>,
    special_favorite: Option<u8>,
    rng: &mut R,
) -> Result<DrawResult> {
    let main = draw_pool(Pool::Main, main_favorites, rng)?;
    let special = match special_favorite {
        Some(n) => n,
        None => rng.random_range(Pool::Special.range()),
    };

    Ok(DrawResult::DoubleColor {
        main: to_array(&main),
        special,
    })
}

/// 按彩票类型分派。双色球的第二组最多只能有一个喜欢号码。
pub fn generate<R: Rng + ?Sized>(
    kind: LotteryKind,
    favorites: &Favorites,
    rng: &mut R,
) -> Result<DrawResult> {
    let result = match kind {
        LotteryKind::SuperLotto => {
            generate_super_lotto(&favorites.first, &favorites.second, rng)?
        }
        LotteryKind::DoubleColor => {
            if favorites.second.len() > Pool::Special.pick_count() {
                return Err(LottoError::TooManyFavorites {
                    pool: Pool::Special,
                    given: favorites.second.len(),
                    max: Pool::Special.pick_count(),
                });
            }
            let special = favorites.second.iter().next().copied();
            generate_double_color(&favorites.first, special, rng)?
        }
    };
    debug!("{} 生成: {}", kind, result);
    Ok(result)
}

pub fn generate_many<R: Rng + ?Sized>(
    kind: LotteryKind,
    favorites: &Favorites,
    count: usize,
    rng: &mut R,
) -> Result<Vec<DrawResult>> {
    (0..count).map(|_| generate(kind, favorites, rng)).collect()
}

fn draw_pool<R: Rng + ?Sized>(
    pool: Pool,
    favorites: &BTreeSet<u8>,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let needed = pool
        .pick_count()
        .checked_sub(favorites.len())
        .ok_or(LottoError::TooManyFavorites {
            pool,
            given: favorites.len(),
            max: pool.pick_count(),
        })?;

    let available: Vec<u8> = pool.range().filter(|n| !favorites.contains(n)).collect();

    let mut numbers: Vec<u8> = favorites.iter().copied().collect();
    numbers.extend(available.choose_multiple(rng, needed).copied());
    numbers.sort_unstable();
    Ok(numbers)
}

fn to_array<const N: usize>(numbers: &[u8]) -> [u8; N] {
    let mut arr = [0u8; N];
    for (slot, &n) in arr.iter_mut().zip(numbers) {
        *slot = n;
    }
    arr
}

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Pool;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("{pool}喜欢号码过多：选了 {given} 个，最多 {max} 个")]
    TooManyFavorites { pool: Pool, given: usize, max: usize },

    #[error("{pool}号码 {number} 超出范围 (1-{max})", max = .pool.max())]
    FavoriteOutOfRange { pool: Pool, number: u8 },

    #[error("组数无效：'{0}'，必须是正整数")]
    InvalidCount(String),

    #[error("日志文件 {path:?} 读写失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("日志行格式错误：'{line}'")]
    MalformedEntry { line: String },
}

pub type Result<T> = std::result::Result<T, LottoError>;

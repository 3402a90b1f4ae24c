mod display;
mod form;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use caipiao_core::generator::generate_many;
use caipiao_core::history::{HistoryLog, history_path};
use caipiao_core::models::{DrawResult, Favorites, LotteryKind, parse_group_count, validate_favorites};
use crate::display::{display_history, display_results, display_summary};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum KindArg {
    /// 大乐透
    #[default]
    #[value(alias = "dlt")]
    SuperLotto,
    /// 双色球
    #[value(alias = "ssq")]
    DoubleColor,
}

impl From<KindArg> for LotteryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::SuperLotto => LotteryKind::SuperLotto,
            KindArg::DoubleColor => LotteryKind::DoubleColor,
        }
    }
}

#[derive(Parser)]
#[command(name = "caipiao", about = "彩票号码生成器（大乐透 / 双色球）")]
struct Cli {
    /// 历史日志文件（默认：当前目录下的 history.log）
    #[arg(long, global = true, env = "CAIPIAO_HISTORY")]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 生成号码并记录到历史日志
    Generate {
        /// 彩票类型
        #[arg(short, long, default_value = "super-lotto")]
        kind: KindArg,

        /// 生成组数（正整数）
        #[arg(short, long, default_value = "1", value_parser = parse_group_count)]
        count: usize,

        /// 喜欢的前区 / 红球号码，逗号分隔
        #[arg(short, long, value_delimiter = ',')]
        first: Vec<u8>,

        /// 喜欢的后区 / 蓝球号码，逗号分隔
        #[arg(short, long, value_delimiter = ',')]
        second: Vec<u8>,

        /// 随机种子，便于复现
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 交互模式：选择类型、组数和喜欢号码
    Interactive {
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 显示最近的历史记录
    History {
        /// 显示条数
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// 显示历史日志的路径
    LogPath,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let history = HistoryLog::new(cli.log.unwrap_or_else(history_path));

    match cli.command {
        Command::Generate {
            kind,
            count,
            first,
            second,
            seed,
        } => {
            let favorites = Favorites::new(first, second);
            cmd_generate(&history, kind.into(), count, &favorites, seed)
        }
        Command::Interactive { seed } => form::run(&history, &mut make_rng(seed)),
        Command::History { last } => cmd_history(&history, last),
        Command::LogPath => {
            println!("{}", history.path().display());
            Ok(())
        }
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// 校验喜欢号码，生成 `count` 注并按顺序追加到日志。
pub fn draw_and_log(
    history: &HistoryLog,
    kind: LotteryKind,
    count: usize,
    favorites: &Favorites,
    rng: &mut StdRng,
) -> Result<Vec<DrawResult>> {
    let (first_pool, second_pool) = kind.pools();
    validate_favorites(first_pool, &favorites.first)?;
    validate_favorites(second_pool, &favorites.second)?;

    let results = generate_many(kind, favorites, count, rng)?;
    history
        .append_all(&results)
        .with_context(|| format!("记录到 {} 失败", history.path().display()))?;
    info!("{} 组{}号码已记录到 {:?}", results.len(), kind, history.path());
    Ok(results)
}

fn cmd_generate(
    history: &HistoryLog,
    kind: LotteryKind,
    count: usize,
    favorites: &Favorites,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let results = draw_and_log(history, kind, count, favorites, &mut rng)?;
    display_results(kind, &results);
    display_summary(results.len(), history.path());
    Ok(())
}

fn cmd_history(history: &HistoryLog, last: usize) -> Result<()> {
    let entries = history.last_entries(last)?;
    if entries.is_empty() {
        println!("暂无历史记录。先运行：caipiao generate");
        return Ok(());
    }
    display_history(&entries);
    Ok(())
}

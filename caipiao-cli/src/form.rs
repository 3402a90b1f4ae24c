use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;

use caipiao_core::history::HistoryLog;
use caipiao_core::models::{Favorites, LotteryKind, Pool, parse_group_count, validate_favorites};

use crate::display::{display_pool_grid, display_results, display_summary};
use crate::draw_and_log;

#[derive(Debug, PartialEq)]
enum FormChoice {
    Lottery(LotteryKind),
    Quit,
}

fn parse_choice(input: &str) -> Option<FormChoice> {
    match input.trim().to_lowercase().as_str() {
        "1" | "大乐透" | "dlt" | "super-lotto" => Some(FormChoice::Lottery(LotteryKind::SuperLotto)),
        "2" | "双色球" | "ssq" | "double-color" => Some(FormChoice::Lottery(LotteryKind::DoubleColor)),
        "q" | "quit" | "exit" | "退出" => Some(FormChoice::Quit),
        _ => None,
    }
}

/// 解析喜欢号码，空格或逗号（含全角）分隔，空输入表示不选。
fn parse_favorites(input: &str) -> Result<BTreeSet<u8>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '，')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .with_context(|| format!("无法识别的号码：'{}'", s))
        })
        .collect()
}

fn display_menu() {
    println!();
    println!("── 彩票号码生成器 ──");
    println!("  1. 大乐透");
    println!("  2. 双色球");
    println!("  q. 退出");
    println!();
}

fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("读取输入失败")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn prompt_required(msg: &str) -> Result<String> {
    match prompt(msg)? {
        Some(input) => Ok(input),
        None => bail!("输入已结束"),
    }
}

fn prompt_count() -> Result<usize> {
    loop {
        let input = prompt_required("请输入生成组数：")?;
        match parse_group_count(&input) {
            Ok(count) => return Ok(count),
            Err(_) => println!("输入错误：请输入一个有效的正整数作为组数！"),
        }
    }
}

fn prompt_favorites(pool: Pool) -> Result<BTreeSet<u8>> {
    display_pool_grid(pool);
    loop {
        let input = prompt_required(&format!(
            "选择喜欢的{}号码（最多 {} 个，空格分隔，直接回车跳过）：",
            pool,
            pool.pick_count()
        ))?;
        match parse_favorites(&input) {
            Ok(favs) => match validate_favorites(pool, &favs) {
                Ok(()) => return Ok(favs),
                Err(e) => println!("{}，请重新输入。", e),
            },
            Err(e) => println!("{}，请重新输入。", e),
        }
    }
}

/// 交互循环：选择类型、输入组数和喜欢号码，生成并记录。
pub fn run(history: &HistoryLog, rng: &mut StdRng) -> Result<()> {
    loop {
        display_menu();
        let Some(input) = prompt("请选择彩票类型：")? else {
            return Ok(());
        };

        let kind = match parse_choice(&input) {
            Some(FormChoice::Lottery(kind)) => kind,
            Some(FormChoice::Quit) => {
                println!("再见！");
                return Ok(());
            }
            None => {
                println!("未知选项：'{}'", input);
                continue;
            }
        };

        let count = prompt_count()?;
        let (first_pool, second_pool) = kind.pools();
        let favorites = Favorites {
            first: prompt_favorites(first_pool)?,
            second: prompt_favorites(second_pool)?,
        };

        let results = draw_and_log(history, kind, count, &favorites, rng)?;
        display_results(kind, &results);
        display_summary(results.len(), history.path());
    }
}

use std::path::Path;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use caipiao_core::history::{LogEntry, TIMESTAMP_FORMAT};
use caipiao_core::models::{DrawResult, LotteryKind, Pool};

const GRID_COLUMNS: usize = 5;

pub fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_results(kind: LotteryKind, results: &[DrawResult]) {
    println!("\n生成的{}号码如下：\n", kind);

    let (first_pool, second_pool) = kind.pools();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "组".to_string(),
            format!("{}号码", first_pool),
            format!("{}号码", second_pool),
        ]);

    for (i, result) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("第{}组", i + 1)),
            Cell::new(format_numbers(result.first())).fg(Color::Red),
            Cell::new(format_numbers(result.second())).fg(Color::Blue),
        ]);
    }
    println!("{table}");
}

pub fn display_summary(count: usize, path: &Path) {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("\n已生成 {} 组号码，并记录到 {} 文件中！", count, file);
}

pub fn display_history(entries: &[LogEntry]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["时间", "类型", "号码", "后区 / 蓝球"]);

    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            entry.result.kind().to_string(),
            format_numbers(entry.result.first()),
            format_numbers(entry.result.second()),
        ]);
    }
    println!("{table}");
}

/// 号码区的可选号码，每行 5 个，对应界面上的复选框网格。
pub fn pool_grid(pool: Pool) -> String {
    let numbers: Vec<u8> = pool.range().collect();
    numbers
        .chunks(GRID_COLUMNS)
        .map(|row| {
            row.iter()
                .map(|n| format!("{:>3}", n))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_pool_grid(pool: Pool) {
    println!("── {} (1-{}) ──", pool, pool.max());
    println!("{}", pool_grid(pool));
}

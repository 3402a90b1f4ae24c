use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{debug, warn};

use crate::error::{LottoError, Result};
use crate::models::DrawResult;

pub const DEFAULT_FILE_NAME: &str = "history.log";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 默认日志路径：当前目录下的 `history.log`。
pub fn history_path() -> PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push(DEFAULT_FILE_NAME);
    path
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub result: DrawResult,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp.format(TIMESTAMP_FORMAT), self.result)
    }
}

/// 只追加的文本日志，每注号码一行。每次写入都重新打开文件，写完即关闭。
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, result: &DrawResult) -> Result<()> {
        self.append_at(result, Local::now().naive_local())
    }

    pub fn append_at(&self, result: &DrawResult, timestamp: NaiveDateTime) -> Result<()> {
        let entry = LogEntry {
            timestamp,
            result: *result,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{}", entry).map_err(|e| self.io_error(e))?;
        debug!("已写入 {:?}: {}", self.path, entry);
        Ok(())
    }

    /// 按调用顺序逐条追加。遇到第一个 I/O 错误即返回，不重试。
    pub fn append_all(&self, results: &[DrawResult]) -> Result<()> {
        for result in results {
            self.append(result)?;
        }
        Ok(())
    }

    /// 读回全部记录。文件不存在视为空历史，格式错误的行跳过并告警。
    pub fn read_entries(&self) -> Result<Vec<LogEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut entries = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_log_line(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("第 {} 行已跳过: {}", i + 1, e),
            }
        }
        Ok(entries)
    }

    /// 最近的 `last` 条记录，按写入顺序排列。
    pub fn last_entries(&self, last: usize) -> Result<Vec<LogEntry>> {
        let mut entries = self.read_entries()?;
        let skip = entries.len().saturating_sub(last);
        Ok(entries.split_off(skip))
    }

    fn io_error(&self, source: io::Error) -> LottoError {
        LottoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

pub fn parse_log_line(line: &str) -> Result<LogEntry> {
    let malformed = || LottoError::MalformedEntry {
        line: line.to_string(),
    };

    let (raw_timestamp, raw_result) = line.split_once(" - ").ok_or_else(malformed)?;
    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| malformed())?;
    let result = parse_result(raw_result.trim()).ok_or_else(malformed)?;

    Ok(LogEntry { timestamp, result })
}

fn parse_result(raw: &str) -> Option<DrawResult> {
    let inner = raw.strip_prefix('(')?.strip_suffix(')')?;
    let (first, rest) = inner.strip_prefix('[')?.split_once(']')?;
    let first = parse_numbers(first)?;
    let rest = rest.trim_start().strip_prefix(',')?.trim();

    match rest.strip_prefix('[') {
        Some(list) => {
            let second = parse_numbers(list.strip_suffix(']')?)?;
            Some(DrawResult::SuperLotto {
                front: first.try_into().ok()?,
                back: second.try_into().ok()?,
            })
        }
        None => Some(DrawResult::DoubleColor {
            main: first.try_into().ok()?,
            special: rest.parse().ok()?,
        }),
    }
}

fn parse_numbers(raw: &str) -> Option<Vec<u8>> {
    raw.split(',').map(|s| s.trim().parse::<u8>().ok()).collect()
}

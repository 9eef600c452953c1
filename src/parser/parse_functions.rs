//! 核心解析函数
//!
//! 行切分、keyspace 行解码、命令统计行解码。全部为纯函数，
//! 由 [`InfoParser`](super::InfoParser) 组合使用。

use memchr::memchr;

use super::constants::{CALLS_FIELD, EXPIRES_FIELD, KEYS_FIELD, USEC_FIELD, USEC_PER_CALL_FIELD};
use crate::error::ParseError;
use crate::parser_config::ParserConfig;
use crate::report::RawLine;
use crate::stats::{CommandStats, DatabaseStats, Numeric};
use crate::tools::{coerce_float, coerce_int, parse_int_prefix};

/// 将整段报告切分为原始行序列
///
/// 1. 按 `\n` 切分
/// 2. 丢弃空行以及首字符（不去空白）为注释前缀的行；注释行同时作为节标题记录
/// 3. 其余行去除首尾空白后按第一个分隔符切成键值对
pub fn split_report(text: &str, config: &ParserConfig) -> Vec<RawLine> {
    let mut lines = Vec::new();
    let mut section: Option<String> = None;

    for line in text.split('\n') {
        let Some(&first) = line.as_bytes().first() else {
            continue;
        };

        if first == config.comment_prefix {
            let title = line.get(1..).unwrap_or_default().trim();
            section = (!title.is_empty()).then(|| title.to_string());
            continue;
        }

        let (key, value) = split_line(line, config.key_value_separator);
        lines.push(RawLine {
            key: key.to_string(),
            value: value.map(str::to_string),
            section: section.clone(),
        });
    }

    lines
}

/// 去除首尾空白后在第一个分隔符处切分
///
/// 分隔符之后的内容（包括后续的分隔符）整体作为值；没有分隔符时值为 `None`。
#[inline]
pub fn split_line(line: &str, separator: u8) -> (&str, Option<&str>) {
    let trimmed = line.trim();
    match memchr(separator, trimmed.as_bytes()) {
        Some(idx) => (&trimmed[..idx], Some(&trimmed[idx + 1..])),
        None => (trimmed, None),
    }
}

/// 解码 keyspace 行，如 `db0:keys=3,expires=1,avg_ttl=0`
pub fn parse_database_line(line: &RawLine, config: &ParserConfig) -> Result<DatabaseStats, ParseError> {
    let suffix = line.key.get(config.database_prefix.len()..).unwrap_or_default();
    let index = parse_int_prefix(suffix).ok_or_else(|| ParseError::InvalidDatabaseIndex {
        key: line.key.clone(),
        value: line.value.clone(),
    })?;

    let value = line.value.as_deref().unwrap_or_default();
    Ok(DatabaseStats {
        index,
        keys: extract_counter(value, KEYS_FIELD, config),
        expires: extract_counter(value, EXPIRES_FIELD, config),
    })
}

/// 在子记录列表中查找 `name=` 开头的第一项并解析为整数
///
/// 缺失或值为空时为 0，非数字时为 `Numeric::Invalid`。
pub fn extract_counter(value: &str, name: &str, config: &ParserConfig) -> Numeric<i64> {
    let found = value.split(config.token_separator).find_map(|token| {
        token
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix(config.pair_separator))
    });

    match found {
        Some(raw) if !raw.is_empty() => coerce_int(raw),
        _ => Numeric::Valid(0),
    }
}

/// 解码命令统计行，如 `cmdstat_get:calls=10,usec=200,usec_per_call=20.00`
///
/// 返回 `(命令名, 统计)`。命令名为键去掉命令前缀后的剩余部分，为空时报错。
pub fn parse_command_line(
    line: &RawLine,
    config: &ParserConfig,
) -> Result<(String, CommandStats), ParseError> {
    let name = line
        .key
        .get(config.command_prefix.len()..)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ParseError::MalformedCommandKey {
            key: line.key.clone(),
            value: line.value.clone(),
        })?;

    let mut stats = CommandStats::default();
    let value = line.value.as_deref().unwrap_or_default();

    for token in value.split(config.token_separator) {
        if token.is_empty() {
            continue;
        }
        let (sub_key, raw) = token
            .split_once(config.pair_separator)
            .unwrap_or((token, ""));

        match sub_key {
            k if k == CALLS_FIELD => stats.calls = Some(coerce_int(raw)),
            k if k == USEC_FIELD => stats.usec = Some(coerce_int(raw)),
            k if k == USEC_PER_CALL_FIELD => stats.usec_per_call = Some(coerce_float(raw)),
            _ => {
                stats.extra.insert(sub_key.to_string(), raw.to_string());
            }
        }
    }

    Ok((name.to_string(), stats))
}

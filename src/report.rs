//! 原始行记录
//!
//! `RawLine` 是报告文本中一条非注释、非空行切分后的 `(key, value)` 对，
//! 所有派生视图都只读地建立在 `RawLine` 序列之上。

use crate::parser_config::ParserConfig;
use crate::tools::starts_with_pattern;

/// 一条原始的 `key:value` 行
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawLine {
    /// 第一个 `:` 之前的部分（整行已去除首尾空白）
    pub key: String,

    /// 第一个 `:` 之后的全部内容；行内没有 `:` 时为 `None`
    pub value: Option<String>,

    /// 该行所在的节，即之前最近一个 `# Name` 标题
    pub section: Option<String>,
}

impl RawLine {
    /// 创建一条不属于任何节的原始行
    pub fn new(key: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            key: key.into(),
            value: value.map(str::to_string),
            section: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// 按配置对该行分类
    pub fn kind(&self, config: &ParserConfig) -> LineKind {
        LineKind::classify(&self.key, config)
    }
}

/// 行的分类
///
/// 每一行至多属于一类，判断顺序固定：先 keyspace 前缀，再命令统计前缀，其余为普通字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `db` 前缀的 keyspace 统计行
    Database,
    /// `cmdstat_` 前缀的命令统计行
    Command,
    /// 普通字段
    Plain,
}

impl LineKind {
    pub fn classify(key: &str, config: &ParserConfig) -> Self {
        if starts_with_pattern(key, &config.database_prefix) {
            LineKind::Database
        } else if starts_with_pattern(key, &config.command_prefix) {
            LineKind::Command
        } else {
            LineKind::Plain
        }
    }
}

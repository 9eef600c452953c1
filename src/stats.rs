//! 派生视图的数据结构
//!
//! 包含 keyspace 统计（[`Databases`]）、命令统计（[`Commands`]）
//! 以及合并后的字段映射（[`Fields`]）。

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::ParseError;

/// 数值字段
///
/// 无法解析的数值不会报错，而是以 `Invalid` 保存原文。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Numeric<T> {
    /// 成功解析的数值
    Valid(T),
    /// 无法解析的原始文本
    Invalid(String),
}

impl<T: Copy> Numeric<T> {
    /// 有效时返回数值
    pub fn value(&self) -> Option<T> {
        match self {
            Numeric::Valid(v) => Some(*v),
            Numeric::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Numeric::Valid(_))
    }
}

/// 单个数据库的 keyspace 统计
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DatabaseStats {
    /// 数据库编号，取自键 `dbN` 中的 `N`
    pub index: i64,

    /// 键数量；缺失时为 0
    pub keys: Numeric<i64>,

    /// 设置了过期时间的键数量；缺失时为 0
    pub expires: Numeric<i64>,
}

/// keyspace 统计视图，按数据库编号升序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Databases {
    entries: BTreeMap<i64, DatabaseStats>,
    #[cfg_attr(feature = "serde", serde(skip))]
    errors: Vec<ParseError>,
}

impl Databases {
    /// 插入一条统计；编号重复时后者覆盖前者
    pub(crate) fn insert(&mut self, stats: DatabaseStats) {
        self.entries.insert(stats.index, stats);
    }

    pub(crate) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn get(&self, index: i64) -> Option<&DatabaseStats> {
        self.entries.get(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&i64, &DatabaseStats)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 编号无法解析而被跳过的行
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// 单个命令的统计
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommandStats {
    /// 调用次数
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub calls: Option<Numeric<i64>>,

    /// 累计耗时（微秒）
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub usec: Option<Numeric<i64>>,

    /// 平均每次调用耗时（微秒）
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub usec_per_call: Option<Numeric<f64>>,

    /// 其余子字段，保持原始字符串
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: IndexMap<String, String>,
}

/// 命令统计视图，保持报告中的出现顺序
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Commands {
    entries: IndexMap<String, CommandStats>,
    #[cfg_attr(feature = "serde", serde(skip))]
    errors: Vec<ParseError>,
}

impl Commands {
    /// 插入一条统计；命令名重复时原位覆盖
    pub(crate) fn insert(&mut self, name: String, stats: CommandStats) {
        self.entries.insert(name, stats);
    }

    pub(crate) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn get(&self, name: &str) -> Option<&CommandStats> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CommandStats)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 缺少命令名的 `cmdstat_` 行，单独收集而不进入映射
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// `fields` 映射中的值
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum FieldValue {
    /// 普通字段的原始值；行内没有 `:` 时为 `None`
    Plain(Option<String>),
    /// 合成的 `databases` 字段
    Databases(Databases),
    /// 合成的 `commands` 字段
    Commands(Commands),
}

/// 普通字段映射，附带合成的 `databases` 与 `commands`
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Fields {
    entries: IndexMap<String, FieldValue>,
}

impl Fields {
    pub(crate) fn insert(&mut self, key: String, value: FieldValue) -> Option<FieldValue> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// 普通字段的字符串值
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(FieldValue::Plain(value)) => value.as_deref(),
            _ => None,
        }
    }

    pub fn databases(&self) -> Option<&Databases> {
        self.entries.values().find_map(|v| match v {
            FieldValue::Databases(dbs) => Some(dbs),
            _ => None,
        })
    }

    pub fn commands(&self) -> Option<&Commands> {
        self.entries.values().find_map(|v| match v {
            FieldValue::Commands(cmds) => Some(cmds),
            _ => None,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Parser 配置模块
//!
//! 把 INFO 文本语法中用到的字面量（注释前缀、键值分隔符、行分类前缀等）
//! 集中成一个配置结构，默认值即 Redis `INFO` 的格式。

use crate::error::ParseError;
use crate::parser::constants::{
    COMMAND_PREFIX, COMMENT_PREFIX, DATABASE_PREFIX, KEY_VALUE_SEPARATOR, PAIR_SEPARATOR,
    TOKEN_SEPARATOR,
};

/// Parser 配置
///
/// 定义解析器如何切分行、如何对行进行分类。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// 注释/节标题行的首字符
    pub comment_prefix: u8,

    /// 键与值之间的分隔符，只在第一次出现处切分
    pub key_value_separator: u8,

    /// keyspace 统计行的键前缀，如 `db0`
    pub database_prefix: String,

    /// 命令统计行的键前缀，如 `cmdstat_get`
    pub command_prefix: String,

    /// 子记录之间的分隔符，如 `keys=1,expires=0`
    pub token_separator: char,

    /// 子记录内部名称与值的分隔符
    pub pair_separator: char,
}

impl ParserConfig {
    /// Redis `INFO` 输出的默认配置
    pub fn redis_default() -> Self {
        Self {
            comment_prefix: COMMENT_PREFIX,
            key_value_separator: KEY_VALUE_SEPARATOR,
            database_prefix: DATABASE_PREFIX.to_string(),
            command_prefix: COMMAND_PREFIX.to_string(),
            token_separator: TOKEN_SEPARATOR,
            pair_separator: PAIR_SEPARATOR,
        }
    }

    /// 设置 keyspace 行前缀
    pub fn with_database_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.database_prefix = prefix.into();
        self
    }

    /// 设置命令统计行前缀
    pub fn with_command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }

    /// 校验配置
    ///
    /// 分隔符必须是 ASCII（按字节切分时才能落在字符边界上），
    /// 两个分类前缀不能为空，且不能互为前缀，否则分类顺序会吞掉另一类。
    pub fn validate(&self) -> Result<(), ParseError> {
        if !self.comment_prefix.is_ascii() || !self.key_value_separator.is_ascii() {
            return Err(ParseError::InvalidConfig(
                "comment prefix and key/value separator must be ASCII".to_string(),
            ));
        }
        if self.database_prefix.is_empty() || self.command_prefix.is_empty() {
            return Err(ParseError::InvalidConfig(
                "classification prefixes must not be empty".to_string(),
            ));
        }
        if self.command_prefix.starts_with(&self.database_prefix) {
            return Err(ParseError::InvalidConfig(format!(
                "command prefix '{}' is shadowed by database prefix '{}'",
                self.command_prefix, self.database_prefix
            )));
        }
        if self.database_prefix.starts_with(&self.command_prefix) {
            return Err(ParseError::InvalidConfig(format!(
                "database prefix '{}' is shadowed by command prefix '{}'",
                self.database_prefix, self.command_prefix
            )));
        }
        if self.token_separator == self.pair_separator {
            return Err(ParseError::InvalidConfig(
                "token and pair separators must differ".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::redis_default()
    }
}

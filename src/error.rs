//! 错误类型定义
//!
//! 解析本身是尽力而为的：除配置校验外，这里的错误都不会中断解析，
//! 而是收集在对应视图的 `errors` 中供调用方检查。

use thiserror::Error;

/// 解析错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `db` 前缀行的索引部分不是整数，例如 `dbfoo:keys=1`
    #[error("invalid database index in key '{key}'")]
    InvalidDatabaseIndex {
        /// 原始键
        key: String,
        /// 原始值（无 `:` 时为空）
        value: Option<String>,
    },

    /// `cmdstat_` 前缀行缺少命令名，例如 `cmdstat_:calls=1`
    #[error("command stat key '{key}' has no command name")]
    MalformedCommandKey {
        /// 原始键
        key: String,
        /// 原始值（无 `:` 时为空）
        value: Option<String>,
    },

    /// 解析器配置不合法
    #[error("invalid parser config: {0}")]
    InvalidConfig(String),
}

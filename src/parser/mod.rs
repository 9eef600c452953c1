//! Parser 模块 - 解析 Redis `INFO` 报告
//!
//! 此模块提供了完整的报告解析功能,包括:
//! - 行切分与分类
//! - keyspace / 命令统计子记录解码
//! - `InfoParser` 上的派生视图

pub(crate) mod constants;
mod info_parser;
pub(crate) mod parse_functions;

pub use info_parser::{InfoParser, parse};

#[cfg(test)]
mod tests;

//! # Redis INFO Parser
//!
//! 把 Redis `INFO` 命令返回的文本报告解析为结构化视图。
//!
//! ## 功能特性
//!
//! - **无损切分**: 每个 `key:value` 行只在第一个 `:` 处切分，值中的 `:` 原样保留
//! - **三种视图**: 普通字段、keyspace 统计（`dbN`）、命令统计（`cmdstat_<name>`）
//! - **容错解析**: 数值无法解析时以 [`Numeric::Invalid`] 保留原文，不会报错
//! - **可观察的异常行**: 编号非法的 keyspace 行、缺少命令名的统计行单独收集
//! - **节信息**: 每一行都记录其所在的 `# Section` 标题
//!
//! ## 快速开始
//!
//! ```rust
//! use redis_info_parser::parse;
//!
//! let info = [
//!     "# Server",
//!     "redis_version:7.2.4",
//!     "# Commandstats",
//!     "cmdstat_get:calls=10,usec=200,usec_per_call=20.00",
//!     "# Keyspace",
//!     "db0:keys=3,expires=1,avg_ttl=0",
//! ]
//! .join("\r\n");
//!
//! let parser = parse(&info);
//! let fields = parser.fields();
//! assert_eq!(fields.get_str("redis_version"), Some("7.2.4"));
//!
//! let get = parser.parse_commands().get("get").unwrap();
//! assert_eq!(get.calls.as_ref().and_then(|c| c.value()), Some(10));
//! assert_eq!(get.usec_per_call.as_ref().and_then(|c| c.value()), Some(20.0));
//!
//! assert_eq!(parser.parse_databases().get(0).unwrap().keys.value(), Some(3));
//! assert_eq!(parser.sections(), vec!["Server", "Commandstats", "Keyspace"]);
//! ```
//!
//! ## 报告格式
//!
//! ```text
//! report        := line ('\n' line)*
//! line          := comment-line | blank-line | field-line
//! comment-line  := '#' ...
//! field-line    := key ':' value
//! ```

pub mod error;
pub mod parser;
pub mod parser_config;
pub mod report;
pub mod stats;
pub mod tools;

pub use error::ParseError;
pub use parser::{InfoParser, parse};
pub use parser_config::ParserConfig;
pub use report::{LineKind, RawLine};
pub use stats::{CommandStats, Commands, DatabaseStats, Databases, FieldValue, Fields, Numeric};

use std::convert::Infallible;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::constants::{COMMANDS_KEY, DATABASES_KEY};
use super::parse_functions::{parse_command_line, parse_database_line, split_report};
use crate::error::ParseError;
use crate::parser_config::ParserConfig;
use crate::report::{LineKind, RawLine};
use crate::stats::{Commands, Databases, FieldValue, Fields};
use crate::tools::{contains_pattern, starts_with_pattern};

/// 解析一段 `INFO` 报告
///
/// 等价于 [`InfoParser::new`]。
pub fn parse(text: &str) -> InfoParser {
    InfoParser::new(text)
}

/// `INFO` 报告解析器
///
/// 构造时一次性把文本切分为原始行序列，此后不再变化。三个派生视图
/// （[`fields`](Self::fields)、[`parse_databases`](Self::parse_databases)、
/// [`parse_commands`](Self::parse_commands)）在首次访问时计算并缓存，
/// 重复访问返回同一结果。解析器是 `Send + Sync` 的，可以被多个读者共享。
///
/// # 示例
///
/// ```
/// use redis_info_parser::InfoParser;
///
/// let parser = InfoParser::new("# Keyspace\r\ndb0:keys=3,expires=1,avg_ttl=0\r\n");
/// let db0 = parser.parse_databases().get(0).unwrap();
/// assert_eq!(db0.keys.value(), Some(3));
/// assert_eq!(db0.expires.value(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct InfoParser {
    config: ParserConfig,
    lines: Vec<RawLine>,
    fields: OnceCell<Fields>,
    databases: OnceCell<Databases>,
    commands: OnceCell<Commands>,
}

impl InfoParser {
    /// 使用默认配置解析报告；不会失败
    pub fn new(text: &str) -> Self {
        Self::build(text, ParserConfig::default())
    }

    /// 使用自定义配置解析报告
    ///
    /// 配置不合法时返回 [`ParseError::InvalidConfig`]。
    pub fn with_config(text: &str, config: ParserConfig) -> Result<Self, ParseError> {
        config.validate()?;
        Ok(Self::build(text, config))
    }

    fn build(text: &str, config: ParserConfig) -> Self {
        let lines = split_report(text, &config);
        debug!(bytes = text.len(), lines = lines.len(), "split info report");

        Self {
            config,
            lines,
            fields: OnceCell::new(),
            databases: OnceCell::new(),
            commands: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// 全部原始行，保持报告中的顺序
    pub fn lines(&self) -> &[RawLine] {
        &self.lines
    }

    /// 普通字段映射
    ///
    /// 包含所有既不是 keyspace 行也不是命令统计行的键（键去空白后为空的除外），
    /// 重复键保留最后一次出现的值。另外合成两项：`databases` 与 `commands`。
    /// 报告中若真的出现名为 `databases`/`commands` 的普通行，它会覆盖合成项。
    pub fn fields(&self) -> &Fields {
        self.fields.get_or_init(|| {
            let mut fields = Fields::default();
            fields.insert(
                DATABASES_KEY.to_string(),
                FieldValue::Databases(self.parse_databases().clone()),
            );
            fields.insert(
                COMMANDS_KEY.to_string(),
                FieldValue::Commands(self.parse_commands().clone()),
            );

            for line in self.lines_of_kind(LineKind::Plain) {
                if line.key.trim().is_empty() {
                    continue;
                }
                if line.key == DATABASES_KEY || line.key == COMMANDS_KEY {
                    warn!(key = %line.key, "plain field overrides synthesized entry");
                }
                fields.insert(line.key.clone(), FieldValue::Plain(line.value.clone()));
            }

            debug!(fields = fields.len(), "computed fields view");
            fields
        })
    }

    /// keyspace 统计，按数据库编号升序
    ///
    /// 编号无法解析的行不进入映射，记录在 [`Databases::errors`] 中。
    pub fn parse_databases(&self) -> &Databases {
        self.databases.get_or_init(|| {
            let mut databases = Databases::default();
            for line in self.lines_of_kind(LineKind::Database) {
                match parse_database_line(line, &self.config) {
                    Ok(stats) => databases.insert(stats),
                    Err(err) => {
                        warn!(key = %line.key, "skipping keyspace line: {err}");
                        databases.push_error(err);
                    }
                }
            }
            debug!(databases = databases.len(), "computed keyspace view");
            databases
        })
    }

    /// 命令统计，保持出现顺序
    ///
    /// 缺少命令名的行不进入映射，记录在 [`Commands::errors`] 中。
    pub fn parse_commands(&self) -> &Commands {
        self.commands.get_or_init(|| {
            let mut commands = Commands::default();
            for line in self.lines_of_kind(LineKind::Command) {
                match parse_command_line(line, &self.config) {
                    Ok((name, stats)) => commands.insert(name, stats),
                    Err(err) => {
                        warn!(key = %line.key, "skipping command stat line: {err}");
                        commands.push_error(err);
                    }
                }
            }
            debug!(commands = commands.len(), "computed command stats view");
            commands
        })
    }

    /// 键以 `pattern` 开头的所有行（区分大小写）
    pub fn start_with(&self, pattern: &str) -> Vec<&RawLine> {
        self.lines
            .iter()
            .filter(|line| starts_with_pattern(&line.key, pattern))
            .collect()
    }

    /// 键中包含 `pattern` 的所有行（区分大小写）
    pub fn contains(&self, pattern: &str) -> Vec<&RawLine> {
        self.lines
            .iter()
            .filter(|line| contains_pattern(&line.key, pattern))
            .collect()
    }

    /// 普通字段的值，等价于 `fields().get_str(key)`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields().get_str(key)
    }

    /// 报告中出现过的节名，按首次出现顺序
    pub fn sections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.lines.iter().filter_map(RawLine::section) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// 某个节下的所有行，节名不区分大小写
    pub fn section(&self, name: &str) -> Vec<&RawLine> {
        self.lines
            .iter()
            .filter(|line| line.section().is_some_and(|s| s.eq_ignore_ascii_case(name)))
            .collect()
    }

    fn lines_of_kind(&self, kind: LineKind) -> impl Iterator<Item = &RawLine> {
        self.lines
            .iter()
            .filter(move |line| line.kind(&self.config) == kind)
    }
}

impl FromStr for InfoParser {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

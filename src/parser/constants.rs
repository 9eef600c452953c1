//! 解析器使用的常量定义
//!
//! Redis `INFO` 文本格式中的字面量以及合成字段的名称。

// 行级语法

/// 注释/节标题行的首字节，如 `# Server`
pub const COMMENT_PREFIX: u8 = b'#';

/// 键与值之间的分隔符（只按第一次出现切分）
pub const KEY_VALUE_SEPARATOR: u8 = b':';

// 行分类前缀

/// keyspace 统计行前缀，如 `db0:keys=1,expires=0,avg_ttl=0`
pub static DATABASE_PREFIX: &str = "db";

/// 命令统计行前缀，如 `cmdstat_get:calls=1,usec=2,usec_per_call=2.00`
pub static COMMAND_PREFIX: &str = "cmdstat_";

// 子记录语法

/// 子记录之间的分隔符
pub const TOKEN_SEPARATOR: char = ',';

/// 子记录名称与值的分隔符
pub const PAIR_SEPARATOR: char = '=';

// keyspace 子记录名称

/// 键数量
pub static KEYS_FIELD: &str = "keys";

/// 设置了过期时间的键数量
pub static EXPIRES_FIELD: &str = "expires";

// 命令统计子记录名称

/// 调用次数
pub static CALLS_FIELD: &str = "calls";

/// 累计耗时（微秒）
pub static USEC_FIELD: &str = "usec";

/// 平均每次调用耗时（微秒）
pub static USEC_PER_CALL_FIELD: &str = "usec_per_call";

// 合成字段

/// `fields` 中承载 keyspace 统计的键
pub static DATABASES_KEY: &str = "databases";

/// `fields` 中承载命令统计的键
pub static COMMANDS_KEY: &str = "commands";

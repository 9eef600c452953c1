//! 基本使用示例
//!
//! 展示如何解析一段 INFO 报告并读取三种视图

use redis_info_parser::{FieldValue, parse};

fn main() {
    let info = "# Server\r\nredis_version:7.2.4\r\nuptime_in_seconds:86400\r\n\r\n\
# Commandstats\r\ncmdstat_get:calls=10,usec=200,usec_per_call=20.00\r\n\
cmdstat_set:calls=oops,usec=40,usec_per_call=10.00\r\n\r\n\
# Keyspace\r\ndb0:keys=3,expires=1,avg_ttl=0\r\n";

    let parser = parse(info);

    println!("=== 普通字段 ===");
    for (key, value) in parser.fields().iter() {
        if let FieldValue::Plain(value) = value {
            println!("  {}: {}", key, value.as_deref().unwrap_or("<none>"));
        }
    }

    println!("\n=== 命令统计 ===");
    for (name, stats) in parser.parse_commands().iter() {
        println!(
            "  {}: calls={:?} usec={:?} usec_per_call={:?}",
            name, stats.calls, stats.usec, stats.usec_per_call
        );
    }

    println!("\n=== Keyspace ===");
    for (index, db) in parser.parse_databases().iter() {
        println!("  db{}: keys={:?} expires={:?}", index, db.keys, db.expires);
    }

    println!("\n节: {:?}", parser.sections());
}

use super::constants::{COMMANDS_KEY, DATABASES_KEY};
use super::parse_functions::{extract_counter, parse_command_line, parse_database_line, split_line, split_report};
use super::*;
use crate::ParseError;
use crate::parser_config::ParserConfig;
use crate::report::RawLine;
use crate::stats::{FieldValue, Numeric};

const SAMPLE_INFO: &str = "# Server\r
redis_version:7.2.4\r
redis_mode:standalone\r
executable:/usr/local/bin/redis-server\r
\r
# Commandstats\r
cmdstat_get:calls=10,usec=200,usec_per_call=20.00,rejected_calls=0,failed_calls=0\r
cmdstat_set:calls=4,usec=40,usec_per_call=10.00\r
\r
# Keyspace\r
db0:keys=3,expires=1,avg_ttl=0\r
db2:keys=7,expires=0,avg_ttl=0\r
";

#[test]
fn test_split_line_first_separator_only() {
    assert_eq!(split_line("a:b:c", b':'), ("a", Some("b:c")));
    assert_eq!(split_line("  key:value  ", b':'), ("key", Some("value")));
    assert_eq!(split_line("novalue", b':'), ("novalue", None));
    assert_eq!(split_line("empty:", b':'), ("empty", Some("")));
    assert_eq!(split_line(":x", b':'), ("", Some("x")));
}

#[test]
fn test_split_report_skips_comments_and_blank_lines() {
    let lines = split_report(SAMPLE_INFO, &ParserConfig::default());
    let keys: Vec<&str> = lines.iter().map(|l| l.key()).collect();
    assert_eq!(
        keys,
        vec![
            "redis_version",
            "redis_mode",
            "executable",
            "",
            "cmdstat_get",
            "cmdstat_set",
            "",
            "db0",
            "db2",
        ]
    );
}

#[test]
fn test_split_report_comment_must_be_first_char() {
    let lines = split_report("  # not a header\n#real", &ParserConfig::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].key(), "# not a header");
    assert_eq!(lines[0].value(), None);
}

#[test]
fn test_split_report_tracks_sections() {
    let lines = split_report(SAMPLE_INFO, &ParserConfig::default());
    assert_eq!(lines[0].section(), Some("Server"));
    assert_eq!(lines[4].section(), Some("Commandstats"));
    assert_eq!(lines[8].section(), Some("Keyspace"));
}

#[test]
fn test_parse_database_line() {
    let config = ParserConfig::default();
    let line = RawLine::new("db0", Some("keys=3,expires=1,avg_ttl=0"));
    let stats = parse_database_line(&line, &config).unwrap();
    assert_eq!(stats.index, 0);
    assert_eq!(stats.keys, Numeric::Valid(3));
    assert_eq!(stats.expires, Numeric::Valid(1));
}

#[test]
fn test_parse_database_line_token_order_irrelevant() {
    let config = ParserConfig::default();
    let line = RawLine::new("db15", Some("avg_ttl=5,expires=2,keys=9"));
    let stats = parse_database_line(&line, &config).unwrap();
    assert_eq!(stats.index, 15);
    assert_eq!(stats.keys, Numeric::Valid(9));
    assert_eq!(stats.expires, Numeric::Valid(2));
}

#[test]
fn test_parse_database_line_invalid_index() {
    let config = ParserConfig::default();
    let line = RawLine::new("dbfoo", Some("keys=1"));
    let err = parse_database_line(&line, &config).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidDatabaseIndex {
            key: "dbfoo".to_string(),
            value: Some("keys=1".to_string()),
        }
    );
}

#[test]
fn test_extract_counter_defaults() {
    let config = ParserConfig::default();
    assert_eq!(extract_counter("expires=1", "keys", &config), Numeric::Valid(0));
    assert_eq!(extract_counter("keys=", "keys", &config), Numeric::Valid(0));
    assert_eq!(extract_counter("", "keys", &config), Numeric::Valid(0));
    assert_eq!(
        extract_counter("keys=abc", "keys", &config),
        Numeric::Invalid("abc".to_string())
    );
    // 第一个匹配项生效
    assert_eq!(extract_counter("keys=1,keys=2", "keys", &config), Numeric::Valid(1));
    // `keysx=` 不是 `keys=`
    assert_eq!(extract_counter("keysx=5", "keys", &config), Numeric::Valid(0));
}

#[test]
fn test_parse_command_line() {
    let config = ParserConfig::default();
    let line = RawLine::new(
        "cmdstat_get",
        Some("calls=10,usec=200,usec_per_call=20.0,rejected_calls=1"),
    );
    let (name, stats) = parse_command_line(&line, &config).unwrap();
    assert_eq!(name, "get");
    assert_eq!(stats.calls, Some(Numeric::Valid(10)));
    assert_eq!(stats.usec, Some(Numeric::Valid(200)));
    assert_eq!(stats.usec_per_call, Some(Numeric::Valid(20.0)));
    assert_eq!(stats.extra.get("rejected_calls").map(String::as_str), Some("1"));
}

#[test]
fn test_parse_command_line_keeps_full_name() {
    let config = ParserConfig::default();
    let line = RawLine::new("cmdstat_client|list", Some("calls=1"));
    let (name, _) = parse_command_line(&line, &config).unwrap();
    assert_eq!(name, "client|list");

    let line = RawLine::new("cmdstat_cluster_info", Some("calls=1"));
    let (name, _) = parse_command_line(&line, &config).unwrap();
    assert_eq!(name, "cluster_info");
}

#[test]
fn test_parse_command_line_missing_fields_are_absent() {
    let config = ParserConfig::default();
    let line = RawLine::new("cmdstat_ping", Some("calls=abc,flag"));
    let (_, stats) = parse_command_line(&line, &config).unwrap();
    assert_eq!(stats.calls, Some(Numeric::Invalid("abc".to_string())));
    assert_eq!(stats.usec, None);
    assert_eq!(stats.usec_per_call, None);
    assert_eq!(stats.extra.get("flag").map(String::as_str), Some(""));
}

#[test]
fn test_parse_command_line_without_name() {
    let config = ParserConfig::default();
    let line = RawLine::new("cmdstat_", Some("calls=1"));
    assert!(matches!(
        parse_command_line(&line, &config),
        Err(ParseError::MalformedCommandKey { .. })
    ));
}

#[test]
fn test_fields_view() {
    let parser = InfoParser::new(SAMPLE_INFO);
    let fields = parser.fields();

    let keys: Vec<&str> = fields.keys().collect();
    assert_eq!(
        keys,
        vec![DATABASES_KEY, COMMANDS_KEY, "redis_version", "redis_mode", "executable"]
    );
    assert_eq!(fields.get_str("executable"), Some("/usr/local/bin/redis-server"));
    assert_eq!(fields.databases().map(|d| d.len()), Some(2));
    assert_eq!(fields.commands().map(|c| c.len()), Some(2));
}

#[test]
fn test_fields_plain_line_overrides_synthesized_key() {
    let parser = InfoParser::new("databases:many\nfoo:bar");
    let fields = parser.fields();
    assert_eq!(fields.get_str(DATABASES_KEY), Some("many"));
    assert!(fields.databases().is_none());
    assert!(fields.commands().is_some());
}

#[test]
fn test_fields_keeps_line_without_separator() {
    let parser = InfoParser::new("loading\nuptime:10");
    assert_eq!(parser.fields().get("loading"), Some(&FieldValue::Plain(None)));
    assert_eq!(parser.get("uptime"), Some("10"));
}

#[test]
fn test_databases_view_sorted_and_last_wins() {
    let parser = InfoParser::new("db3:keys=1\ndb1:keys=2\ndb3:keys=9");
    let dbs = parser.parse_databases();
    let indices: Vec<i64> = dbs.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![1, 3]);
    assert_eq!(dbs.get(3).unwrap().keys, Numeric::Valid(9));
}

#[test]
fn test_commands_view_last_wins_in_place() {
    let parser = InfoParser::new("cmdstat_get:calls=1\ncmdstat_set:calls=2\ncmdstat_get:calls=3");
    let cmds = parser.parse_commands();
    let names: Vec<&str> = cmds.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["get", "set"]);
    assert_eq!(cmds.get("get").unwrap().calls, Some(Numeric::Valid(3)));
}

#[test]
fn test_views_are_cached() {
    let parser = InfoParser::new(SAMPLE_INFO);
    assert!(std::ptr::eq(parser.fields(), parser.fields()));
    assert!(std::ptr::eq(parser.parse_databases(), parser.parse_databases()));
    assert!(std::ptr::eq(parser.parse_commands(), parser.parse_commands()));
}

#[test]
fn test_sections() {
    let parser = InfoParser::new(SAMPLE_INFO);
    assert_eq!(parser.sections(), vec!["Server", "Commandstats", "Keyspace"]);
    let keyspace = parser.section("keyspace");
    let keys: Vec<&str> = keyspace.iter().map(|l| l.key()).collect();
    assert_eq!(keys, vec!["db0", "db2"]);
}

#[test]
fn test_custom_config_prefixes() {
    let config = ParserConfig::default()
        .with_database_prefix("keyspace_db")
        .with_command_prefix("cmd_");
    let parser = InfoParser::with_config("keyspace_db4:keys=2\ncmd_get:calls=1\ndb0:x", config).unwrap();
    assert_eq!(parser.parse_databases().get(4).unwrap().keys, Numeric::Valid(2));
    assert!(parser.parse_commands().get("get").is_some());
    assert_eq!(parser.get("db0"), Some("x"));
}

#[test]
fn test_invalid_config_rejected() {
    let config = ParserConfig::default().with_command_prefix("");
    assert!(InfoParser::with_config("a:b", config).is_err());
}

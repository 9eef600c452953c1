use memchr::memmem;

use crate::stats::Numeric;

/// 字面量前缀匹配（区分大小写）。空模式匹配任意键。
#[inline(always)]
pub fn starts_with_pattern(key: &str, pattern: &str) -> bool {
    key.as_bytes().starts_with(pattern.as_bytes())
}

/// 字面量子串匹配（区分大小写）。空模式匹配任意键。
#[inline]
pub fn contains_pattern(key: &str, pattern: &str) -> bool {
    memmem::find(key.as_bytes(), pattern.as_bytes()).is_some()
}

/// 按十进制解析文本开头的整数部分。
///
/// 规则：
/// 1. 跳过开头的空白
/// 2. 可选的 `+` / `-` 符号
/// 3. 读取尽可能多的数字，遇到第一个非数字字符即停止（`"12abc"` -> 12）
///
/// 没有任何数字或溢出 `i64` 时返回 `None`。
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let bytes = text.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for &b in &digits[..len] {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.checked_mul(10)?.checked_sub(digit)?
        } else {
            value.checked_mul(10)?.checked_add(digit)?
        };
    }
    Some(value)
}

/// 解析文本开头的浮点数部分。
///
/// 接受 `[+-]digits[.digits][(e|E)[+-]digits]` 的最长前缀，以及 `Infinity`。
/// 至少要有一位尾数数字，否则返回 `None`。
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // 指数部分只有在后面跟数字时才算数
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// 整数强制转换：失败时保留原文作为无效值
pub fn coerce_int(raw: &str) -> Numeric<i64> {
    match parse_int_prefix(raw) {
        Some(v) => Numeric::Valid(v),
        None => Numeric::Invalid(raw.to_string()),
    }
}

/// 浮点强制转换：失败时保留原文作为无效值
pub fn coerce_float(raw: &str) -> Numeric<f64> {
    match parse_float_prefix(raw) {
        Some(v) => Numeric::Valid(v),
        None => Numeric::Invalid(raw.to_string()),
    }
}

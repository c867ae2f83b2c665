//! 进制转换（纯函数，无状态、无 I/O）

use crate::error::HtoiError;

/// 判断单个字符是否为合法的十六进制数字 (0-9a-fA-F)
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// 十六进制字符串转十进制数值
///
/// 大小写不敏感，允许可选的 `0x`/`0X` 前缀，空串视为无效。
/// 超出 128 位可表示范围的值同样报为无效输入。
pub fn hex_to_dec(input: &str) -> Result<u128, HtoiError> {
    let digits = input.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    if digits.is_empty() {
        return Err(HtoiError::InvalidInput(
            "输入为空，无法按 16 进制解析".to_string(),
        ));
    }

    u128::from_str_radix(digits, 16)
        .map_err(|_| HtoiError::InvalidInput(format!("无法按 16 进制解析: {digits:?}")))
}

/// 十进制字符串转 `0x` 前缀的小写十六进制字符串
///
/// 允许负数，负号置于 `0x` 之前。
pub fn dec_to_hex(input: &str) -> Result<String, HtoiError> {
    let value: i128 = input
        .trim()
        .parse()
        .map_err(|_| HtoiError::InvalidInput(format!("不是合法的十进制整数: {input:?}")))?;

    if value < 0 {
        Ok(format!("-0x{:x}", value.unsigned_abs()))
    } else {
        Ok(format!("0x{value:x}"))
    }
}

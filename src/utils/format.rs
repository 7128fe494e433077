/// 输入格式化工具
///
/// 电话号码和 CPF 的掩码格式化，以及字符串折叠辅助函数
use regex::Regex;
use std::sync::LazyLock;

/// 国家代码
const COUNTRY_CODE: &str = "55";

/// 含国家代码的最大电话位数: 55 + DDD(2) + 号码(9)
const PHONE_MAX_DIGITS: usize = 13;

/// CPF 位数
pub const TAX_ID_DIGITS: usize = 11;

/// 只保留 ASCII 数字，全角、阿拉伯-印度数字等一律视为非数字
static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// 去掉所有非数字字符
pub fn digits_only(input: &str) -> String {
    NON_DIGIT.replace_all(input, "").into_owned()
}

/// 电话号码中不含国家代码的位数（DDD + 号码）
///
/// 已套用掩码（`+55 ...`）或带国家代码的 13 位号码会去掉开头的 `55`
pub fn national_phone_digits(phone: &str) -> usize {
    let digits = digits_only(phone);
    let has_country = digits.starts_with(COUNTRY_CODE)
        && (phone.trim_start().starts_with('+') || digits.len() >= PHONE_MAX_DIGITS);

    if has_country {
        digits.len() - COUNTRY_CODE.len()
    } else {
        digits.len()
    }
}

/// 格式化电话号码为 `+55 (DD) DDDDD-DDDD`
///
/// 已带国家代码且位数足够时直接截取前 13 位，否则补上 `55` 再截取。
/// 位数不足时按已有位数逐步输出掩码前缀。
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input);

    let with_country = if digits.starts_with(COUNTRY_CODE) && digits.len() >= PHONE_MAX_DIGITS {
        digits
    } else {
        format!("{}{}", COUNTRY_CODE, digits)
    };
    let d: String = with_country.chars().take(PHONE_MAX_DIGITS).collect();

    match d.len() {
        0..=2 => "+55 ".to_string(),
        3..=4 => format!("+55 ({}", &d[2..]),
        5..=9 => format!("+55 ({}) {}", &d[2..4], &d[4..]),
        _ => format!("+55 ({}) {}-{}", &d[2..4], &d[4..9], &d[9..]),
    }
}

/// 格式化 CPF 为 `DDD.DDD.DDD-DD`
///
/// 位数不足时按相同规则逐步分组，超过 11 位的部分丢弃
pub fn format_tax_id(input: &str) -> String {
    let d = digits_only(input);

    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &d[..3],
            &d[3..6],
            &d[6..9],
            &d[9..d.len().min(TAX_ID_DIGITS)]
        ),
    }
}

/// 小写并去掉葡萄牙语常见重音，用于模糊匹配
pub fn fold_accents(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// 去除首尾空白后是否非空
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_full_number() {
        assert_eq!(format_phone("11999998888"), "+55 (11) 99999-8888");
        assert_eq!(format_phone("5511999998888"), "+55 (11) 99999-8888");
        assert_eq!(format_phone("(11) 99999-8888"), "+55 (11) 99999-8888");
    }

    #[test]
    fn test_format_phone_progressive() {
        assert_eq!(format_phone(""), "+55 ");
        assert_eq!(format_phone("1"), "+55 (1");
        assert_eq!(format_phone("11"), "+55 (11");
        assert_eq!(format_phone("119"), "+55 (11) 9");
        assert_eq!(format_phone("1199999"), "+55 (11) 99999");
        assert_eq!(format_phone("11999998"), "+55 (11) 99999-8");
    }

    #[test]
    fn test_format_phone_area_code_55_without_country() {
        // 区号为 55 但没有国家代码时仍补上前缀
        assert_eq!(format_phone("55999998888"), "+55 (55) 99999-8888");
    }

    #[test]
    fn test_format_phone_truncates_extra_digits() {
        assert_eq!(format_phone("+55 11 99999-88887777"), "+55 (11) 99999-8888");
    }

    #[test]
    fn test_format_tax_id() {
        assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
        assert_eq!(format_tax_id("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_tax_id("123"), "123");
        assert_eq!(format_tax_id("123456"), "123.456");
        assert_eq!(format_tax_id("1234567"), "123.456.7");
        assert_eq!(format_tax_id("1234567890"), "123.456.789-0");
        assert_eq!(format_tax_id("1234567890123"), "123.456.789-01");
        assert_eq!(format_tax_id(""), "");
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        assert_eq!(digits_only("１２３４"), "");
        assert_eq!(format_tax_id("１２３４"), "");
        assert_eq!(format_tax_id("1２3４56"), "135.6");
        assert_eq!(format_phone("١١٩"), "+55 ");
        assert_eq!(format_phone("11９99998888"), "+55 (11) 99998-888");
    }

    #[test]
    fn test_national_phone_digits() {
        assert_eq!(national_phone_digits("+55 (11) 98888-7777"), 11);
        assert_eq!(national_phone_digits("+55 (11) 98888-777"), 10);
        assert_eq!(national_phone_digits("5511988887777"), 11);
        assert_eq!(national_phone_digits("11988887777"), 11);
        // 区号 55 的本地号码不去掉前缀
        assert_eq!(national_phone_digits("55999998888"), 11);
        assert_eq!(national_phone_digits("+55 "), 0);
    }

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("MÃE"), "mae");
        assert_eq!(fold_accents("Mãe"), "mae");
        assert_eq!(fold_accents("Responsável"), "responsavel");
    }
}

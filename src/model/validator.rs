//! 任务文本校验
//!
//! 纯函数，无状态。只去掉首尾空白，中间内容原样保留。

/// 去掉首尾空白
pub fn normalize(text: &str) -> &str {
    text.trim()
}

/// 规范化后非空即有效
pub fn is_valid(text: &str) -> bool {
    !normalize(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_both_ends() {
        assert_eq!(normalize("  Buy milk  "), "Buy milk");
        assert_eq!(normalize("\tBuy milk\n"), "Buy milk");
    }

    #[test]
    fn test_normalize_keeps_internal_spacing() {
        assert_eq!(normalize("hello   world"), "hello   world");
        assert_eq!(normalize("  a \t b  "), "a \t b");
    }

    #[test]
    fn test_normalize_total() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\u{3000}\u{00a0}"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "",
            " ",
            "x",
            "  x  ",
            "\n\t mixed \u{3000}",
            "hello   world",
            "多字节 文本 ",
            "\u{2003}em space\u{2003}",
        ];
        for s in samples {
            assert_eq!(normalize(normalize(s)), normalize(s), "input: {:?}", s);
        }
    }

    #[test]
    fn test_is_valid_matches_normalized_length() {
        let samples = ["", "   ", "a", " a ", "\t\n", "hello   world", "\u{3000}"];
        for s in samples {
            assert_eq!(is_valid(s), !normalize(s).is_empty(), "input: {:?}", s);
        }
    }

    #[test]
    fn test_edge_cases() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
        assert!(is_valid("a"));
        assert_eq!(normalize("a"), "a");
    }

    #[test]
    fn test_very_long_input_is_valid() {
        let long = "x".repeat(100_000);
        assert!(is_valid(&long));
        assert_eq!(normalize(&long).len(), 100_000);
    }
}

// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

/// Unicode punctuation (all `P*` categories) plus the ASCII punctuation set,
/// which also covers symbols such as `$ + < = > ^ ` | ~`.
static PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}!-/:-@\[-`{-~]+").expect("static punctuation regex"));

/// Strip punctuation, collapse whitespace runs to one space, trim.
/// Total and idempotent: `clean(clean(x)) == clean(x)`.
pub fn clean(text: &str) -> String {
    let stripped = PUNCT.replace_all(text, "");
    normalize_ws(&stripped)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ascii_and_cjk_punctuation() {
        assert_eq!(clean("Hello, world! (really?)"), "Hello world really");
        assert_eq!(clean("你好，世界。「测试」"), "你好世界测试");
        assert_eq!(clean("a+b=c $5 ~ok~"), "abc 5 ok");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean("  one\t\ttwo\n\nthree  "), "one two three");
        assert_eq!(normalize_ws("\u{a0}x \u{3000} y"), "x y");
    }

    #[test]
    fn punctuation_between_spaces_collapses_too() {
        assert_eq!(clean("a - b"), "a b");
    }

    #[test]
    fn empty_and_punctuation_only_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("... !!! ???"), "");
    }

    #[test]
    fn clean_is_idempotent() {
        for s in ["Hi, there!", "猫 猫 猫 狗 狗 鸟", "  a\n\nb—c ", "x_y-z", ""] {
            let once = clean(s);
            assert_eq!(clean(&once), once, "input {s:?}");
        }
    }
}

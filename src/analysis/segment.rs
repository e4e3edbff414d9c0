// src/analysis/segment.rs
//
// Pluggable word segmentation. The frequency counter only sees `&str` tokens,
// so any strategy that splits text into slices of the input fits here.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

pub trait Segmenter: Send + Sync {
    /// Split `text` into tokens borrowed from it, in reading order.
    /// May yield whitespace or punctuation remnants; filtering happens later.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn kind(&self) -> SegmenterKind;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmenterKind {
    /// Dictionary + HMM segmentation; handles mixed CJK/Latin/numeric text.
    Jieba,
    /// UAX #29 word boundaries. Han text comes out one ideograph per token.
    Unicode,
    /// Split on whitespace only.
    Whitespace,
}

impl Default for SegmenterKind {
    fn default() -> Self {
        if cfg!(feature = "jieba") { SegmenterKind::Jieba } else { SegmenterKind::Unicode }
    }
}

impl SegmenterKind {
    pub const ALL: [SegmenterKind; 3] =
        [SegmenterKind::Jieba, SegmenterKind::Unicode, SegmenterKind::Whitespace];

    pub fn key(&self) -> &'static str {
        match self {
            SegmenterKind::Jieba => "jieba",
            SegmenterKind::Unicode => "unicode",
            SegmenterKind::Whitespace => "whitespace",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|k| k.key().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Build the segmenter for `kind`. Without the `jieba` feature, `Jieba`
/// falls back to Unicode word boundaries.
pub fn build(kind: SegmenterKind) -> Box<dyn Segmenter> {
    match kind {
        #[cfg(feature = "jieba")]
        SegmenterKind::Jieba => Box::new(JiebaSegmenter::new()),
        #[cfg(not(feature = "jieba"))]
        SegmenterKind::Jieba => {
            logw!("Segmenter: built without `jieba`, using unicode word boundaries");
            Box::new(UnicodeSegmenter)
        }
        SegmenterKind::Unicode => Box::new(UnicodeSegmenter),
        SegmenterKind::Whitespace => Box::new(WhitespaceSegmenter),
    }
}

#[cfg(feature = "jieba")]
pub struct JiebaSegmenter {
    jieba: jieba_rs::Jieba,
}

#[cfg(feature = "jieba")]
impl JiebaSegmenter {
    /// Loads the bundled dictionary; build once and reuse.
    pub fn new() -> Self {
        Self { jieba: jieba_rs::Jieba::new() }
    }
}

#[cfg(feature = "jieba")]
impl Default for JiebaSegmenter {
    fn default() -> Self { Self::new() }
}

#[cfg(feature = "jieba")]
impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }
    fn kind(&self) -> SegmenterKind { SegmenterKind::Jieba }
}

pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
    fn kind(&self) -> SegmenterKind { SegmenterKind::Unicode }
}

pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
    fn kind(&self) -> SegmenterKind { SegmenterKind::Whitespace }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_segmenter_splits_on_runs() {
        assert_eq!(WhitespaceSegmenter.segment(" a  bb\tccc "), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn unicode_segmenter_splits_latin_words_and_han_chars() {
        assert_eq!(UnicodeSegmenter.segment("Rust is fun"), vec!["Rust", "is", "fun"]);
        assert_eq!(UnicodeSegmenter.segment("猫狗"), vec!["猫", "狗"]);
    }

    #[test]
    fn kind_keys_parse_back() {
        for k in SegmenterKind::ALL {
            assert_eq!(SegmenterKind::parse(k.key()), Some(k));
        }
        assert_eq!(SegmenterKind::parse("Whitespace"), Some(SegmenterKind::Whitespace));
        assert_eq!(SegmenterKind::parse("icu"), None);
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn jieba_keeps_multi_char_words_together() {
        let seg = JiebaSegmenter::new();
        let tokens = seg.segment("我们中出了一个叛徒");
        assert!(tokens.contains(&"我们"), "{tokens:?}");
        assert_eq!(tokens.concat(), "我们中出了一个叛徒");
    }
}

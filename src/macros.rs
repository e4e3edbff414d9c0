// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Early-return `Err($err)` when a sequence/string is empty.
/// Every stage that would otherwise take a min/max goes through this first.
#[macro_export]
macro_rules! ensure_nonempty {
    ($seq:expr, $err:expr $(,)?) => {
        if $seq.is_empty() {
            return ::std::result::Result::Err($err);
        }
    };
}

// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// `Some(String)` for a non-blank cell, `None` otherwise.
#[macro_export]
macro_rules! non_blank {
    ($opt:expr) => {
        $opt.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };
}

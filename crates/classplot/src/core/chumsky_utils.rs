//! Shared chumsky combinators for reading function source text

use chumsky::prelude::*;

/// Zero or more spaces, tabs or line breaks.
pub fn optional_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t\n\r").repeated().ignored()
}

/// Zero or more spaces or tabs.
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().ignored()
}

/// Parse a script identifier (`[A-Za-z_$][A-Za-z0-9_$]*`, unicode letters allowed).
pub fn script_identifier<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| c.is_alphabetic() || *c == '_' || *c == '$')
        .then(
            any()
                .filter(|c: &char| c.is_alphanumeric() || *c == '_' || *c == '$')
                .repeated(),
        )
        .to_slice()
}

/// Consume and discard everything up to the end of input.
pub fn rest_of_input<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    any().repeated().ignored()
}

/// Byte offsets of every occurrence of `needle` in `haystack`, in order.
pub fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    haystack.match_indices(needle).map(|(idx, _)| idx)
}

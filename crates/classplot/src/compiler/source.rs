//! Reading callable signatures and returned object literals from source text
//!
//! These are best-effort textual heuristics. Nothing here reports an error:
//! text that does not have the recognised shape yields `None`.

use chumsky::prelude::*;

use crate::core::chumsky_utils::{
    inline_whitespace, occurrences, optional_whitespace, rest_of_input, script_identifier,
};

/// Chumsky-based reader for function source text
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceReader;

impl SourceReader {
    pub fn new() -> Self {
        Self
    }

    /// Parameter names of the first `function name?(...)` header in `source`
    pub fn parameters(&self, source: &str) -> Option<Vec<String>> {
        let parser = Self::signature_parser().then_ignore(rest_of_input());

        occurrences(source, "function").find_map(|start| {
            parser
                .parse(&source[start..])
                .into_result()
                .ok()
                .map(split_parameters)
        })
    }

    /// Key/value expression pairs of the first `return { key: value, ... }` in `source`
    ///
    /// The source is normalised first: trimmed, line breaks removed and
    /// whitespace runs collapsed to a single space.
    pub fn returned_literal(&self, source: &str) -> Option<Vec<(String, String)>> {
        let normalised = normalise(source);
        let parser = Self::return_literal_parser().then_ignore(rest_of_input());

        let found = occurrences(&normalised, "return").find_map(|start| {
            parser
                .parse(&normalised[start..])
                .into_result()
                .ok()
                .map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(key, value)| (unquote(key.trim()).to_string(), value.trim().to_string()))
                        .collect()
                })
        });
        found
    }

    /// Member name referenced by `this.name` or `this.name.bind(this)`
    pub fn member_reference(&self, expression: &str) -> Option<String> {
        Self::member_reference_parser()
            .parse(expression.trim())
            .into_result()
            .ok()
            .map(str::to_string)
    }

    fn signature_parser<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
        // Optional function name, as in `function\s*\w*\s*\(`
        let name = any()
            .filter(|c: &char| c.is_alphanumeric() || *c == '_' || *c == '$')
            .repeated();

        just("function")
            .ignore_then(optional_whitespace())
            .ignore_then(name)
            .ignore_then(optional_whitespace())
            .ignore_then(just('('))
            .ignore_then(none_of(")\n\r").repeated().to_slice())
            .then_ignore(just(')'))
    }

    fn return_literal_parser<'src>(
    ) -> impl Parser<'src, &'src str, Vec<(&'src str, &'src str)>> + Clone {
        let key = none_of("{},:").repeated().at_least(1).to_slice();
        let value = none_of("{},").repeated().at_least(1).to_slice();
        let entry = key.then_ignore(just(':')).then(value);

        just("return")
            .ignore_then(inline_whitespace())
            .ignore_then(just('{'))
            .ignore_then(
                entry
                    .separated_by(just(','))
                    .allow_trailing()
                    .at_least(1)
                    .collect::<Vec<_>>(),
            )
            .then_ignore(inline_whitespace())
            .then_ignore(just('}'))
    }

    fn member_reference_parser<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
        let bind = just('.')
            .then(inline_whitespace())
            .then(just("bind"))
            .then(inline_whitespace())
            .then(just('('))
            .then(inline_whitespace())
            .then(just("this"))
            .then(inline_whitespace())
            .then(just(')'))
            .ignored();

        just("this")
            .ignore_then(inline_whitespace())
            .ignore_then(just('.'))
            .ignore_then(inline_whitespace())
            .ignore_then(script_identifier())
            .then_ignore(inline_whitespace())
            .then_ignore(bind.or_not())
            .then_ignore(inline_whitespace())
            .then_ignore(end())
    }
}

/// Trim, drop line breaks and collapse whitespace runs to one space
pub fn normalise(source: &str) -> String {
    let without_breaks: String = source.trim().chars().filter(|c| *c != '\r' && *c != '\n').collect();
    without_breaks.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_parameters(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(str::to_string)
        .collect()
}

fn unquote(key: &str) -> &str {
    for quote in ['\'', '"'] {
        if key.len() >= 2 && key.starts_with(quote) && key.ends_with(quote) {
            return &key[1..key.len() - 1];
        }
    }
    key
}

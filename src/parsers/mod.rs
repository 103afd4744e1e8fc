pub mod detail;
pub mod listing;
pub mod tourism;

#[cfg(test)]
pub(crate) mod tests;

use scraper::{ElementRef, Selector};

/// Parses a selector literal.
///
/// Only called with the constant selectors of this module tree, which are
/// covered by the parser tests.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {}", css, e))
}

/// First text node under the element, untouched
pub(crate) fn first_text(element: ElementRef<'_>) -> Option<String> {
    element.text().next().map(str::to_string)
}

/// First whitespace-delimited token of an attribute value
pub(crate) fn first_token_of_attr(element: ElementRef<'_>, attr: &str) -> Option<String> {
    element
        .value()
        .attr(attr)
        .and_then(|value| value.split_whitespace().next())
        .map(str::to_string)
}

/// Copies `values` into a fixed-size array, padding with empty strings.
///
/// Values beyond `N` are dropped. Returns how many slots were filled.
pub(crate) fn fill_fixed<const N: usize>(values: Vec<String>) -> ([String; N], usize) {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    let mut filled = 0;
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value;
        filled += 1;
    }
    (out, filled)
}

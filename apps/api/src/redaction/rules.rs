//! Field-level redaction rules.
//!
//! Each rule is a total `&str -> String` transform. Lengths are counted in
//! Unicode scalar values, so a masked word has as many block glyphs as the
//! original word had characters.

use lazy_static::lazy_static;
use regex::Regex;

/// The glyph that replaces masked characters.
pub const BLOCK: char = '█';

/// Placeholder substituted for every run of digits in an address.
pub const ADDRESS_DIGIT_PLACEHOLDER: &str = "███";

/// Address words longer than this are masked; shorter ones stay legible.
pub const ADDRESS_LEGIBLE_WORD_LEN: usize = 3;

/// Masked address words never exceed this many blocks.
pub const ADDRESS_MASK_CAP: usize = 4;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

fn blocks(count: usize) -> String {
    std::iter::repeat(BLOCK).take(count).collect()
}

/// Masks every whitespace-delimited word with a block run of the same length.
///
/// Word count and per-word length survive; runs of whitespace collapse to a
/// single space.
pub fn redact_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| blocks(word.chars().count()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Masks the local part of an email and keeps the domain readable.
///
/// Splits at the first `@`. Without an `@` the whole input is treated as the
/// local part and no `@` is introduced.
pub fn redact_email(email: &str) -> String {
    match email.split_once('@') {
        Some((username, domain)) => format!("{}@{domain}", blocks(username.chars().count())),
        None => blocks(email.chars().count()),
    }
}

/// Replaces each ASCII digit with a block, leaving punctuation and spacing in place.
pub fn redact_phone(phone: &str) -> String {
    phone
        .chars()
        .map(|c| if c.is_ascii_digit() { BLOCK } else { c })
        .collect()
}

/// Masks house numbers and the longer words of a free-form location.
///
/// Digit runs become [`ADDRESS_DIGIT_PLACEHOLDER`] first. Then every word
/// longer than [`ADDRESS_LEGIBLE_WORD_LEN`] becomes a block run capped at
/// [`ADDRESS_MASK_CAP`]; short words such as "St" or "NY" are kept.
pub fn redact_address(location: &str) -> String {
    let digits_masked = DIGIT_RUN.replace_all(location, ADDRESS_DIGIT_PLACEHOLDER);
    digits_masked
        .split_whitespace()
        .map(|word| {
            let len = word.chars().count();
            if len > ADDRESS_LEGIBLE_WORD_LEN {
                blocks(len.min(ADDRESS_MASK_CAP))
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

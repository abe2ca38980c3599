//! # Text Formatting
//!
//! Normalizes free-form text entered by merchants and customers.
//!
//! Both formatters are total: input they cannot use yields a sentinel
//! (`""` or `None`) instead of an error.

// =============================================================================
// Product Names
// =============================================================================

/// Title-cases a product name and normalizes its whitespace.
///
/// `None` stands for a missing or non-text name and yields `""`.
///
/// ## Example
/// ```rust
/// use shopkit_core::text::format_product_name;
///
/// assert_eq!(format_product_name(Some("  apple   iphone  ")), "Apple Iphone");
/// assert_eq!(format_product_name(Some("SAMSUNG GALAXY s21")), "Samsung Galaxy S21");
/// assert_eq!(format_product_name(None), "");
/// ```
pub fn format_product_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };

    name.split_whitespace()
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Phone Numbers
// =============================================================================

/// Formats a US phone number, ignoring any punctuation in the input.
///
/// ## Accepted Shapes
/// ```text
/// 10 digits               → (123) 456-7890
/// 11 digits, leading 1    → +1 (123) 456-7890
/// anything else           → None
/// ```
///
/// ## Example
/// ```rust
/// use shopkit_core::text::format_phone_number;
///
/// assert_eq!(format_phone_number(Some("123.456.7890")).as_deref(), Some("(123) 456-7890"));
/// assert_eq!(format_phone_number(Some("21234567890")), None);
/// ```
pub fn format_phone_number(input: Option<&str>) -> Option<String> {
    let digits: String = input?.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => Some(format_local(&digits)),
        11 if digits.starts_with('1') => Some(format!("+1 {}", format_local(&digits[1..]))),
        _ => None,
    }
}

/// `digits` must be exactly ten ASCII digits.
fn format_local(digits: &str) -> String {
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

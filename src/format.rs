//! As-you-type shaping of raw input into the `DD/MM/YYYY` display format.

use crate::consts::{
    DAY_DIGITS, DISPLAY_SEPARATOR, KEY_BACKSPACE, KEY_DELETE, KEY_DIGIT_NINE, KEY_DIGIT_ZERO,
    KEY_TAB, MONTH_DIGITS, YEAR_DIGITS,
};

/// Outcome of filtering a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDecision {
    /// Let the key reach the input buffer
    Accept,
    /// Suppress the key entirely
    Reject,
}

impl KeyDecision {
    /// Returns true for [`KeyDecision::Accept`]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Whether a keypress character code may reach the input buffer.
///
/// Accepts the digits `0`-`9` plus backspace (8), tab (9) and delete (46).
pub const fn is_accepted_key(code: u32) -> bool {
    matches!(code, KEY_DIGIT_ZERO..=KEY_DIGIT_NINE | KEY_BACKSPACE | KEY_TAB | KEY_DELETE)
}

/// Classifies a keypress character code.
pub fn filter_key(code: u32) -> KeyDecision {
    if is_accepted_key(code) {
        KeyDecision::Accept
    } else {
        tracing::trace!(code, "rejected keystroke");
        KeyDecision::Reject
    }
}

/// Reshapes accumulated raw input into a (possibly partial) display date.
///
/// Every non-digit is dropped, then separators are put back by position:
/// after the day once a third digit exists, after the month once a fifth
/// digit exists. Digits past the four-digit year are discarded.
///
/// Applying this to its own output returns the same string.
///
/// ```
/// use dmy_date::reformat_keystrokes;
///
/// assert_eq!(reformat_keystrokes("1"), "1");
/// assert_eq!(reformat_keystrokes("123"), "12/3");
/// assert_eq!(reformat_keystrokes("12032024"), "12/03/2024");
/// assert_eq!(reformat_keystrokes("12/03/20245"), "12/03/2024");
/// ```
pub fn reformat_keystrokes(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let max_digits = DAY_DIGITS + MONTH_DIGITS + YEAR_DIGITS;

    let mut formatted = String::with_capacity(max_digits + 2);
    for (index, digit) in digits.iter().take(max_digits).enumerate() {
        if index == DAY_DIGITS || index == DAY_DIGITS + MONTH_DIGITS {
            formatted.push(DISPLAY_SEPARATOR);
        }
        formatted.push(*digit);
    }
    tracing::trace!(raw, formatted = %formatted, "reformatted keystrokes");
    formatted
}

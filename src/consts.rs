/// Lowest year accepted by default (inclusive)
pub const DEFAULT_MIN_YEAR: u16 = 1900;

/// Highest year accepted by a widget unless configured otherwise (inclusive)
pub const DEFAULT_MAX_YEAR: u16 = 9999;

/// Highest year accepted by the stateless utility functions (inclusive)
pub const UTILITY_MAX_YEAR: u16 = 2099;

/// Largest year representable with four digits
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Separator between day, month and year in the display format
pub const DISPLAY_SEPARATOR: char = '/';
/// Separator between year, month and day in the normalized format
pub const NORMALIZED_SEPARATOR: char = '-';

/// Digits in the day segment
pub const DAY_DIGITS: usize = 2;
/// Digits in the month segment
pub const MONTH_DIGITS: usize = 2;
/// Digits in the year segment
pub const YEAR_DIGITS: usize = 4;
/// Length of a complete `DD/MM/YYYY` string
pub const DISPLAY_LEN: usize = DAY_DIGITS + 1 + MONTH_DIGITS + 1 + YEAR_DIGITS;

/// Placeholder hint shown in empty inputs
pub const PLACEHOLDER: &str = "dd/mm/yyyy";

/// Character code of `0`
pub const KEY_DIGIT_ZERO: u32 = 48;
/// Character code of `9`
pub const KEY_DIGIT_NINE: u32 = 57;
/// Backspace key code
pub const KEY_BACKSPACE: u32 = 8;
/// Tab key code
pub const KEY_TAB: u32 = 9;
/// Delete key code
pub const KEY_DELETE: u32 = 46;

/// Message carried by every refused conversion
pub const FORMAT_ERROR_MESSAGE: &str = "invalid date format";

/// `strftime` pattern of the display format
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

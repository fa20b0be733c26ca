/// Number of months in a Bikram Sambat year
pub const MONTHS_IN_YEAR: usize = 12;

/// Minimum valid month (Baisakh)
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month (Chaitra)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month that appears in the reference table
pub const MAX_DAYS_IN_MONTH: u8 = 32;

/// Days in a week, the period of the weekday cycle
pub const DAYS_IN_WEEK: u8 = 7;

/// Gregorian side of the epoch anchor: 1943-04-14
pub const EPOCH_AD_YEAR: i32 = 1943;
/// Gregorian month of the epoch anchor
pub const EPOCH_AD_MONTH: u32 = 4;
/// Gregorian day of the epoch anchor
pub const EPOCH_AD_DAY: u32 = 14;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (MM/DD/YYYY)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Devanagari digits, indexed by their value
pub(crate) const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

//! Canonical glyphs and numeric bounds of the angles

/// Canonical degree sign
pub const DEGREE_SIGN: char = '°';
/// Canonical arc minute sign
pub const ARC_MINUTE_SIGN: char = '′';
/// Canonical arc second sign
pub const ARC_SECOND_SIGN: char = '″';

/// Canonical decimal separator
pub const DECIMAL_POINT: char = '.';
/// Sign of the negative values
pub const MINUS_SIGN: char = '-';

/// Arc minutes are valid in `[0..60)`
pub const MINUTES_IN_DEGREE: u8 = 60;
/// Arc seconds are valid in `[0..60)`
pub const SECONDS_IN_MINUTE: u8 = 60;

/// The maximum magnitude of a latitude, degrees
pub const MAX_LATITUDE: u8 = 90;
/// The maximum magnitude of a longitude, degrees
pub const MAX_LONGITUDE: u8 = 180;

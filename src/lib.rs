// Copyright (c) 2026 The grid-locator developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! grid-locator
//!
//! A library for converting geographic positions to and from
//! [Maidenhead locators](https://en.wikipedia.org/wiki/Maidenhead_Locator_System),
//! the compact alphanumeric grid references used in amateur radio.
//!
//! A locator subdivides the globe hierarchically into three tiers of cells,
//! each tier contributing two characters:
//!
//! | Tier | Characters | Cell size (lon × lat) |
//! |------|------------|-----------------------|
//! | field | letters `A`–`R` | 20° × 10° |
//! | square | digits `0`–`9` | 2° × 1° |
//! | subsquare | letters `A`–`X` | 1/12° × 1/24° |
//!
//! The encoding is deterministic and lossy: decoding recovers the centre of
//! the smallest resolved cell, so the round-trip error is bounded by half
//! the cell size of the requested [`Precision`].
//!
//! Note: standard Maidenhead notation writes the subsquare tier in lowercase.
//! This library emits every tier in uppercase, the convention required by
//! the systems it interoperates with, and accepts either case on input.
//!
//! # Examples
//! ```
//! use grid_locator::{decode, encode, Degrees, LatLong, Precision};
//!
//! let paris = LatLong::new(Degrees(48.85), Degrees(2.35));
//! let locator = encode(&paris, Precision::Subsquare).unwrap();
//! assert_eq!("JN18EU", locator.as_str());
//!
//! let centre = decode("JN18EU").unwrap();
//! assert!((centre.lat().0 - 48.85).abs() <= 1.0 / 48.0);
//! assert!((centre.lon().0 - 2.35).abs() <= 1.0 / 24.0);
//! ```
//!
//! ## Design
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and perform great-circle calculations between locator cells.
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared
//! [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::suboptimal_flops)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod distance;
pub mod grid;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use core::fmt;
use core::str::FromStr;

/// The errors that locator encoding and decoding can signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocatorError {
    /// The requested locator length is not 2, 4 or 6 characters.
    InvalidPrecision(usize),
    /// The latitude is outside [-90, 90] or the longitude outside [-180, 180].
    CoordinateOutOfRange,
    /// The locator string has the wrong length or a character outside the
    /// alphabet of its tier.
    InvalidLocatorFormat,
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision(count) => {
                write!(f, "invalid precision: {count} characters, expected 2, 4 or 6")
            }
            Self::CoordinateOutOfRange => {
                write!(f, "latitude outside [-90, 90] or longitude outside [-180, 180]")
            }
            Self::InvalidLocatorFormat => {
                write!(f, "locator length not 2, 4 or 6, or character outside its tier alphabet")
            }
        }
    }
}

impl core::error::Error for LocatorError {}

/// The precision of a `Locator`: the number of tiers encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    /// The field tier alone: two characters, 20° × 10° cells.
    Field,
    /// The field and square tiers: four characters, 2° × 1° cells.
    Square,
    /// All three tiers: six characters, 1/12° × 1/24° cells.
    Subsquare,
}

impl Precision {
    /// The number of characters in a locator of this precision.
    #[must_use]
    pub const fn char_count(self) -> usize {
        match self {
            Self::Field => 2,
            Self::Square => 4,
            Self::Subsquare => 6,
        }
    }

    /// The (longitude, latitude) span of the smallest cell resolved at this
    /// precision.
    #[must_use]
    pub const fn cell_size(self) -> (Degrees, Degrees) {
        match self {
            Self::Field => (Degrees(grid::FIELD_LON), Degrees(grid::FIELD_LAT)),
            Self::Square => (Degrees(grid::SQUARE_LON), Degrees(grid::SQUARE_LAT)),
            Self::Subsquare => (Degrees(grid::SUBSQUARE_LON), Degrees(grid::SUBSQUARE_LAT)),
        }
    }
}

impl TryFrom<usize> for Precision {
    type Error = LocatorError;

    /// Convert a locator character count to a `Precision`.
    ///
    /// # Errors
    ///
    /// `LocatorError::InvalidPrecision` if `char_count` is not 2, 4 or 6.
    fn try_from(char_count: usize) -> Result<Self, Self::Error> {
        match char_count {
            2 => Ok(Self::Field),
            4 => Ok(Self::Square),
            6 => Ok(Self::Subsquare),
            _ => Err(LocatorError::InvalidPrecision(char_count)),
        }
    }
}

/// A Maidenhead grid locator: 2, 4 or 6 uppercase ASCII characters
/// identifying a cell on the globe.
///
/// A `Locator` is an immutable value type. Construction validates the tier
/// alphabets, so every instance holds a well-formed locator.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    /// The locator characters, unused positions zero.
    chars: [u8; 6],
    /// The precision, i.e. the number of valid characters.
    precision: Precision,
}

impl Locator {
    /// Construct a `Locator` from a string, accepting either case and
    /// normalising to uppercase.
    /// * `locator` - the locator string.
    ///
    /// # Errors
    ///
    /// `LocatorError::InvalidLocatorFormat` if the string is not 2, 4 or 6
    /// characters long or a character is outside the alphabet of its tier.
    pub fn new(locator: &str) -> Result<Self, LocatorError> {
        let bytes = locator.as_bytes();
        let precision =
            Precision::try_from(bytes.len()).map_err(|_| LocatorError::InvalidLocatorFormat)?;

        let mut chars = [0u8; 6];
        for (index, byte) in bytes.iter().enumerate() {
            let c = byte.to_ascii_uppercase();
            let valid = match index {
                0 | 1 => grid::is_field_letter(c),
                2 | 3 => grid::is_square_digit(c),
                _ => grid::is_subsquare_letter(c),
            };
            if !valid {
                return Err(LocatorError::InvalidLocatorFormat);
            }
            chars[index] = c;
        }

        Ok(Self { chars, precision })
    }

    /// Accessor for the precision of the `Locator`.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// The locator as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // the characters are ASCII by construction
        core::str::from_utf8(&self.chars[..self.precision.char_count()]).unwrap_or("")
    }

    /// The south-west corner of the cell identified by the `Locator`.
    #[must_use]
    pub fn south_west_corner(&self) -> LatLong {
        let mut lon = -180.0 + f64::from(self.chars[0] - b'A') * grid::FIELD_LON;
        let mut lat = -90.0 + f64::from(self.chars[1] - b'A') * grid::FIELD_LAT;

        if Precision::Square <= self.precision {
            lon += f64::from(self.chars[2] - b'0') * grid::SQUARE_LON;
            lat += f64::from(self.chars[3] - b'0') * grid::SQUARE_LAT;
        }

        if Precision::Subsquare <= self.precision {
            lon += f64::from(self.chars[4] - b'A') * grid::SUBSQUARE_LON;
            lat += f64::from(self.chars[5] - b'A') * grid::SUBSQUARE_LAT;
        }

        LatLong::new(Degrees(lat), Degrees(lon))
    }

    /// The centre of the cell identified by the `Locator`: the best position
    /// estimate recoverable from it, since the worst-case error is half the
    /// cell size on each axis.
    #[must_use]
    pub fn centre(&self) -> LatLong {
        let corner = self.south_west_corner();
        let (width, height) = self.precision.cell_size();
        LatLong::new(
            Degrees(corner.lat().0 + height.0 / 2.0),
            Degrees(corner.lon().0 + width.0 / 2.0),
        )
    }
}

impl Validate for Locator {
    /// Test whether a `Locator` is valid.
    /// Whether every character lies within the alphabet of its tier.
    fn is_valid(&self) -> bool {
        let bytes = &self.chars[..self.precision.char_count()];
        bytes.iter().enumerate().all(|(index, &c)| match index {
            0 | 1 => grid::is_field_letter(c),
            2 | 3 => grid::is_square_digit(c),
            _ => grid::is_subsquare_letter(c),
        })
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locator(\"{}\")", self.as_str())
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Encode a position to the grid `Locator` of the cell containing it.
///
/// Positions exactly on the upper domain boundary (+90° latitude, +180°
/// longitude) are clamped into the last cell at every tier, e.g.
/// 90°N 180°E yields `RR99XX`.
/// * `position` - the position in geodetic coordinates.
/// * `precision` - the number of tiers to encode.
///
/// returns the `Locator` of the cell containing `position`.
///
/// # Errors
///
/// `LocatorError::CoordinateOutOfRange` if the latitude is outside
/// [-90, 90] or the longitude outside [-180, 180], or either is NaN.
///
/// # Examples
/// ```
/// use grid_locator::{encode, Degrees, LatLong, Precision};
///
/// let newington_ct = LatLong::new(Degrees(41.7148), Degrees(-72.7272));
/// let locator = encode(&newington_ct, Precision::Subsquare).unwrap();
/// assert_eq!("FN31PR", locator.as_str());
///
/// let locator = encode(&newington_ct, Precision::Square).unwrap();
/// assert_eq!("FN31", locator.as_str());
/// ```
pub fn encode(position: &LatLong, precision: Precision) -> Result<Locator, LocatorError> {
    if !grid::is_valid_latitude(position.lat().0) || !grid::is_valid_longitude(position.lon().0) {
        return Err(LocatorError::CoordinateOutOfRange);
    }

    // shift to the non-negative domain: lon [0, 360], lat [0, 180]
    let mut lon = position.lon().0 + 180.0;
    let mut lat = position.lat().0 + 90.0;
    let mut chars = [0u8; 6];

    let lon_index = grid::tier_index(lon, grid::FIELD_LON, grid::FIELD_COUNT);
    let lat_index = grid::tier_index(lat, grid::FIELD_LAT, grid::FIELD_COUNT);
    chars[0] = grid::letter(lon_index);
    chars[1] = grid::letter(lat_index);

    if Precision::Square <= precision {
        lon -= f64::from(lon_index) * grid::FIELD_LON;
        lat -= f64::from(lat_index) * grid::FIELD_LAT;
        let lon_index = grid::tier_index(lon, grid::SQUARE_LON, grid::SQUARE_COUNT);
        let lat_index = grid::tier_index(lat, grid::SQUARE_LAT, grid::SQUARE_COUNT);
        chars[2] = grid::digit(lon_index);
        chars[3] = grid::digit(lat_index);

        if Precision::Subsquare <= precision {
            lon -= f64::from(lon_index) * grid::SQUARE_LON;
            lat -= f64::from(lat_index) * grid::SQUARE_LAT;
            let lon_index = grid::tier_index(lon, grid::SUBSQUARE_LON, grid::SUBSQUARE_COUNT);
            let lat_index = grid::tier_index(lat, grid::SUBSQUARE_LAT, grid::SUBSQUARE_COUNT);
            chars[4] = grid::letter(lon_index);
            chars[5] = grid::letter(lat_index);
        }
    }

    Ok(Locator { chars, precision })
}

/// Decode a grid locator string to the centre of the cell it identifies.
///
/// The caller knows the resolution from the length of the string: the result
/// is within half a cell size of any position that encodes to `locator`.
/// * `locator` - the locator string, in either case.
///
/// returns the centre of the locator cell in geodetic coordinates.
///
/// # Errors
///
/// `LocatorError::InvalidLocatorFormat` if the string is not a well-formed
/// 2, 4 or 6 character locator.
///
/// # Examples
/// ```
/// use grid_locator::decode;
///
/// let centre = decode("JN18").unwrap();
/// assert_eq!(48.5, centre.lat().0);
/// assert_eq!(3.0, centre.lon().0);
/// ```
pub fn decode(locator: &str) -> Result<LatLong, LocatorError> {
    Ok(Locator::new(locator)?.centre())
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_encode_paris() {
        let paris = LatLong::new(Degrees(48.85), Degrees(2.35));

        let locator = encode(&paris, Precision::Field).unwrap();
        assert_eq!("JN", locator.as_str());

        let locator = encode(&paris, Precision::Square).unwrap();
        assert_eq!("JN18", locator.as_str());

        let locator = encode(&paris, Precision::Subsquare).unwrap();
        assert_eq!("JN18EU", locator.as_str());
        assert_eq!(Precision::Subsquare, locator.precision());
    }

    #[test]
    fn test_encode_known_locators() {
        // Munich
        let position = LatLong::new(Degrees(48.1372), Degrees(11.5756));
        let locator = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!("JN58SD", locator.as_str());

        // W1AW, Newington CT
        let position = LatLong::new(Degrees(41.7148), Degrees(-72.7272));
        let locator = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!("FN31PR", locator.as_str());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let position = LatLong::new(Degrees(48.85), Degrees(2.35));
        let first = encode(&position, Precision::Subsquare).unwrap();
        let second = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_encode_upper_boundary_clamps() {
        // +90 latitude and +180 longitude lie on the edge of the last cell
        // of every tier and must clamp into it, not overflow the alphabet
        let position = LatLong::new(Degrees(90.0), Degrees(180.0));
        let locator = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!("RR99XX", locator.as_str());

        let position = LatLong::new(Degrees(90.0), Degrees(0.0));
        let locator = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!("JR09AX", locator.as_str());

        let position = LatLong::new(Degrees(0.0), Degrees(180.0));
        let locator = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!("RJ90XA", locator.as_str());
    }

    #[test]
    fn test_encode_lower_boundary() {
        let position = LatLong::new(Degrees(-90.0), Degrees(-180.0));
        let locator = encode(&position, Precision::Subsquare).unwrap();
        assert_eq!("AA00AA", locator.as_str());
    }

    #[test]
    fn test_encode_out_of_range() {
        for (lat, lon) in [
            (90.0001, 0.0),
            (-90.0001, 0.0),
            (0.0, 180.0001),
            (0.0, -180.0001),
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
        ] {
            let position = LatLong::new(Degrees(lat), Degrees(lon));
            assert_eq!(
                Err(LocatorError::CoordinateOutOfRange),
                encode(&position, Precision::Subsquare)
            );
        }
    }

    #[test]
    fn test_precision_try_from() {
        assert_eq!(Ok(Precision::Field), Precision::try_from(2));
        assert_eq!(Ok(Precision::Square), Precision::try_from(4));
        assert_eq!(Ok(Precision::Subsquare), Precision::try_from(6));

        for count in [0usize, 1, 3, 5, 7, 8] {
            assert_eq!(
                Err(LocatorError::InvalidPrecision(count)),
                Precision::try_from(count)
            );
        }
    }

    #[test]
    fn test_precision_char_count_and_cell_size() {
        assert_eq!(2, Precision::Field.char_count());
        assert_eq!(4, Precision::Square.char_count());
        assert_eq!(6, Precision::Subsquare.char_count());

        let (width, height) = Precision::Field.cell_size();
        assert_eq!(20.0, width.0);
        assert_eq!(10.0, height.0);

        let (width, height) = Precision::Subsquare.cell_size();
        assert_eq!(1.0 / 12.0, width.0);
        assert_eq!(1.0 / 24.0, height.0);
    }

    #[test]
    fn test_locator_new_accepts_either_case() {
        let locator = Locator::new("jn18eu").unwrap();
        assert_eq!("JN18EU", locator.as_str());
        assert!(locator.is_valid());

        let locator = Locator::new("Jn18Eu").unwrap();
        assert_eq!("JN18EU", locator.as_str());

        // subsquare letters beyond R are valid in the third tier
        let locator = Locator::new("aa00sx").unwrap();
        assert_eq!("AA00SX", locator.as_str());
    }

    #[test]
    fn test_locator_new_accepts_every_length() {
        for (s, precision) in [
            ("AB", Precision::Field),
            ("AB12", Precision::Square),
            ("AB12CD", Precision::Subsquare),
        ] {
            let locator = Locator::new(s).unwrap();
            assert_eq!(s, locator.as_str());
            assert_eq!(precision, locator.precision());
        }
    }

    #[test]
    fn test_locator_new_rejects_bad_lengths() {
        for s in ["", "A", "AB1", "AB12C", "AB12CD3", "AB12CD34"] {
            assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new(s));
        }
    }

    #[test]
    fn test_locator_new_rejects_bad_alphabets() {
        // digit in a field position
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new("1B12CD"));
        // field letters are limited to A..R
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new("SA"));
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new("AZ"));
        // letters in the square tier
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new("ABCD"));
        // subsquare letters are limited to A..X
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new("AB12YZ"));
        // non-ASCII input
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), Locator::new("ÅÅ"));
    }

    #[test]
    fn test_locator_from_str_and_display() {
        let locator: Locator = "fn31pr".parse().unwrap();
        assert_eq!("FN31PR", format!("{locator}"));
        assert_eq!("Locator(\"FN31PR\")", format!("{locator:?}"));

        let result = "FN31P".parse::<Locator>();
        assert_eq!(Err(LocatorError::InvalidLocatorFormat), result);
    }

    #[test]
    fn test_decode_cell_centres() {
        let centre = decode("JN").unwrap();
        assert_eq!(45.0, centre.lat().0);
        assert_eq!(10.0, centre.lon().0);

        let centre = decode("JN18").unwrap();
        assert_eq!(48.5, centre.lat().0);
        assert_eq!(3.0, centre.lon().0);

        let centre = decode("JN18EU").unwrap();
        assert!(is_within_tolerance(48.0 + 20.5 / 24.0, centre.lat().0, 1e-13));
        assert!(is_within_tolerance(2.0 + 4.5 / 12.0, centre.lon().0, 1e-13));
    }

    #[test]
    fn test_south_west_corner() {
        let locator = Locator::new("JN18EU").unwrap();
        let corner = locator.south_west_corner();
        assert!(is_within_tolerance(48.0 + 20.0 / 24.0, corner.lat().0, 1e-13));
        assert!(is_within_tolerance(2.0 + 4.0 / 12.0, corner.lon().0, 1e-13));

        let locator = Locator::new("AA00AA").unwrap();
        let corner = locator.south_west_corner();
        assert_eq!(-90.0, corner.lat().0);
        assert_eq!(-180.0, corner.lon().0);
    }

    #[test]
    fn test_round_trip_error_bound() {
        let position = LatLong::new(Degrees(48.85), Degrees(2.35));

        for precision in [Precision::Field, Precision::Square, Precision::Subsquare] {
            let locator = encode(&position, precision).unwrap();
            let centre = locator.centre();
            let (width, height) = precision.cell_size();

            assert!((position.lat().0 - centre.lat().0).abs() <= height.0 / 2.0);
            assert!((position.lon().0 - centre.lon().0).abs() <= width.0 / 2.0);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            "invalid precision: 3 characters, expected 2, 4 or 6",
            format!("{}", LocatorError::InvalidPrecision(3))
        );
        assert_eq!(
            "latitude outside [-90, 90] or longitude outside [-180, 180]",
            format!("{}", LocatorError::CoordinateOutOfRange)
        );
        assert_eq!(
            "locator length not 2, 4 or 6, or character outside its tier alphabet",
            format!("{}", LocatorError::InvalidLocatorFormat)
        );
    }
}

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

//! The grid module contains the cell sizes, index arithmetic and character
//! alphabets of the three locator tiers: field, square and subsquare.
//!
//! Tier indices operate on coordinates shifted to the non-negative domain,
//! longitude [0, 360] and latitude [0, 180]. Index calculation clamps to the
//! tier's valid range so that coordinates exactly on the upper domain
//! boundary fall into the last cell instead of one past it.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// The longitude span of a field cell in degrees.
pub const FIELD_LON: f64 = 20.0;
/// The latitude span of a field cell in degrees.
pub const FIELD_LAT: f64 = 10.0;
/// The number of field cells along each axis, letters `A`..`R`.
pub const FIELD_COUNT: u8 = 18;

/// The longitude span of a square cell in degrees.
pub const SQUARE_LON: f64 = 2.0;
/// The latitude span of a square cell in degrees.
pub const SQUARE_LAT: f64 = 1.0;
/// The number of square cells along each axis of a field, digits `0`..`9`.
pub const SQUARE_COUNT: u8 = 10;

/// The longitude span of a subsquare cell in degrees.
pub const SUBSQUARE_LON: f64 = SQUARE_LON / 24.0;
/// The latitude span of a subsquare cell in degrees.
pub const SUBSQUARE_LAT: f64 = SQUARE_LAT / 24.0;
/// The number of subsquare cells along each axis of a square, letters `A`..`X`.
pub const SUBSQUARE_COUNT: u8 = 24;

/// Whether `degrees` is a valid latitude, i.e. within [-90, 90].
#[must_use]
pub fn is_valid_latitude(degrees: f64) -> bool {
    (-90.0..=90.0).contains(&degrees)
}

/// Whether `degrees` is a valid longitude, i.e. within [-180, 180].
#[must_use]
pub fn is_valid_longitude(degrees: f64) -> bool {
    (-180.0..=180.0).contains(&degrees)
}

/// Calculate the cell index of an offset within a tier, clamped to the
/// tier's valid range.
///
/// The clamp handles the upper domain boundary: a shifted longitude of 360°
/// divides into field index 18, one past the last valid cell, and so for the
/// lower tiers once the clamped field contribution is subtracted.
/// * `offset` - the non-negative coordinate offset within the enclosing cell.
/// * `cell_size` - the tier's cell size in degrees.
/// * `cell_count` - the number of cells in the tier.
///
/// returns the cell index, in [0, `cell_count` - 1].
#[must_use]
pub fn tier_index(offset: f64, cell_size: f64, cell_count: u8) -> u8 {
    let index = libm::floor(offset / cell_size);
    if index <= 0.0 {
        0
    } else if f64::from(cell_count) <= index {
        cell_count - 1
    } else {
        index as u8
    }
}

/// Map a letter tier index to its (uppercase) character.
#[must_use]
pub const fn letter(index: u8) -> u8 {
    b'A' + index
}

/// Map a digit tier index to its character.
#[must_use]
pub const fn digit(index: u8) -> u8 {
    b'0' + index
}

/// Whether `c` is a valid field character: `A`..`R`.
#[must_use]
pub const fn is_field_letter(c: u8) -> bool {
    matches!(c, b'A'..=b'R')
}

/// Whether `c` is a valid square character: `0`..`9`.
#[must_use]
pub const fn is_square_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Whether `c` is a valid subsquare character: `A`..`X`.
#[must_use]
pub const fn is_subsquare_letter(c: u8) -> bool {
    matches!(c, b'A'..=b'X')
}

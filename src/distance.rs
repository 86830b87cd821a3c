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

//! The distance module contains functions for calculating the great-circle
//! azimuth and distance between positions, and the beam heading and range
//! between the cells of a pair of grid locators.
//!
//! Calculations are performed on a sphere of the WGS 84 mean radius, the
//! conventional model for grid locator distances; the difference from the
//! geodesic distance on the ellipsoid is below 0.6%, well inside the
//! position uncertainty of a locator cell.

use crate::Locator;
use angle_sc::Angle;
use icao_units::si::Metres;
use unit_sphere::{great_circle, LatLong};

/// The WGS 84 mean radius of the Earth in metres: (2a + b) / 3.
pub const MEAN_RADIUS: Metres = Metres(6_371_008.771_415_059);

/// Calculate the initial great-circle azimuth and the distance between a
/// pair of positions on the mean radius sphere.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
///
/// returns the azimuth at `a` and the distance in metres.
///
/// # Examples
/// ```
/// use grid_locator::distance::calculate_azimuth_and_distance;
/// use grid_locator::{Degrees, LatLong};
///
/// let equator = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let north_pole = LatLong::new(Degrees(90.0), Degrees(0.0));
/// let (azimuth, distance) = calculate_azimuth_and_distance(&equator, &north_pole);
///
/// assert_eq!(0.0, Degrees::from(azimuth).0);
/// // a quarter of the mean circumference
/// assert!((10_007_557.2 - distance.0).abs() < 1.0);
/// ```
#[must_use]
pub fn calculate_azimuth_and_distance(a: &LatLong, b: &LatLong) -> (Angle, Metres) {
    let a_lat = Angle::from(a.lat());
    let b_lat = Angle::from(b.lat());
    let delta_long = Angle::from(b.lon() - a.lon());

    let azimuth = great_circle::calculate_gc_azimuth(a_lat, b_lat, delta_long);
    let gc_distance = great_circle::calculate_gc_distance(a_lat, b_lat, delta_long);

    (azimuth, Metres(MEAN_RADIUS.0 * gc_distance.0))
}

/// Calculate the beam heading and range from one locator cell to another:
/// the initial great-circle azimuth and the distance between the cell
/// centres.
/// * `from`, `to` - the locators of the start and finish cells.
///
/// returns the heading at the centre of `from` and the range in metres.
#[must_use]
pub fn beam_heading_and_range(from: &Locator, to: &Locator) -> (Angle, Metres) {
    calculate_azimuth_and_distance(&from.centre(), &to.centre())
}

//! Provides the conversions between [`LV03`] and [`WGS84`].
//!
//! The conversions are the approximate polynomials published by swisstopo,
//! the error is about 1 to 2 m within Switzerland.
//! Validate the results with the NAVREF service if more is required.
//!
//! Both directions take the deviation from Bern,
//! the auxiliary values,
//! and evaluate a polynomial for each component independently.
//! Nothing is checked, NaN and ±∞ simply propagate.
use crate::dms::to_sexagesimal_seconds;
use crate::{LV03, WGS84};

/// The east of Bern on the civil grid \[m\]
const BERN_EAST: f64 = 600000.;
/// The north of Bern on the civil grid \[m\]
const BERN_NORTH: f64 = 200000.;
/// The latitude of Bern \[″\]
const BERN_LATITUDE: f64 = 169028.66;
/// The longitude of Bern \[″\]
const BERN_LONGITUDE: f64 = 26782.5;

/// Returns the auxiliary values (y, x) of the grid, the unit is 1000 km.
#[inline(always)]
fn grid_aux(east: f64, north: f64) -> (f64, f64) {
    (
        (east - BERN_EAST) / 1000000.,
        (north - BERN_NORTH) / 1000000.,
    )
}

/// Returns the auxiliary values (φ, λ) of the angle, the unit is 10000″.
///
/// The input is in degree (DD notation), not second.
#[inline(always)]
fn angle_aux(lat: f64, lng: f64) -> (f64, f64) {
    (
        (to_sexagesimal_seconds(lat) - BERN_LATITUDE) / 10000.,
        (to_sexagesimal_seconds(lng) - BERN_LONGITUDE) / 10000.,
    )
}

/// Returns the WGS84 latitude \[deg\] of the grid position.
fn grid_to_latitude(east: f64, north: f64) -> f64 {
    let (y, x) = grid_aux(east, north);

    let lat = (16.9023892 + (3.238272 * x))
        - (0.270978 * (y * y))
        - (0.002528 * (x * x))
        - (0.0447 * (y * y) * x)
        - (0.0140 * (x * x * x));

    // 10000″ to 1″, then to degree
    (lat * 100.) / 36.
}

/// Returns the WGS84 longitude \[deg\] of the grid position.
fn grid_to_longitude(east: f64, north: f64) -> f64 {
    let (y, x) = grid_aux(east, north);

    let lng = (2.6779094 + (4.728982 * y) + (0.791484 * y * x) + (0.1306 * y * (x * x)))
        - (0.0436 * (y * y * y));

    // 10000″ to 1″, then to degree
    (lng * 100.) / 36.
}

/// Returns the WGS84 ellipsoidal height \[m\] of the grid position.
fn grid_to_height(east: f64, north: f64, height: f64) -> f64 {
    let (y, x) = grid_aux(east, north);

    (height + 49.55) - (12.60 * y) - (22.64 * x)
}

/// Returns the LV03 east \[m\] of the WGS84 position.
fn wgs84_to_east(lat: f64, lng: f64) -> f64 {
    let (phi, lambda) = angle_aux(lat, lng);

    (600072.37 + (211455.93 * lambda))
        - (10938.51 * lambda * phi)
        - (0.36 * lambda * (phi * phi))
        - (44.54 * (lambda * lambda * lambda))
}

/// Returns the LV03 north \[m\] of the WGS84 position.
fn wgs84_to_north(lat: f64, lng: f64) -> f64 {
    let (phi, lambda) = angle_aux(lat, lng);

    ((200147.07 + (308807.95 * phi) + (3745.25 * (lambda * lambda)) + (76.63 * (phi * phi)))
        - (194.56 * (lambda * lambda) * phi))
        + (119.79 * (phi * phi * phi))
}

/// Returns the LV03 height \[m\] of the WGS84 position.
fn wgs84_to_height(lat: f64, lng: f64, height: f64) -> f64 {
    let (phi, lambda) = angle_aux(lat, lng);

    (height - 49.55) + (2.73 * lambda) + (6.94 * phi)
}

/// Returns the WGS84 position of the LV03 `east`, `north` and `height`.
///
/// This does not check the value range,
/// NaN and ±∞ propagate into the result.
///
/// # Example
///
/// ```
/// # use lv03trans::*;
/// // Bern, the origin of the grid
/// let point = lv03_to_wgs84(600000.0, 200000.0, 0.0);
/// assert!((point.lat - 46.951081).abs() < 1e-6);
/// assert!((point.lng - 7.438637).abs() < 1e-6);
/// assert_eq!(point.height, 49.55);
/// ```
#[must_use]
pub fn lv03_to_wgs84(east: f64, north: f64, height: f64) -> WGS84 {
    WGS84 {
        lat: grid_to_latitude(east, north),
        lng: grid_to_longitude(east, north),
        height: grid_to_height(east, north, height),
    }
}

/// Returns the WGS84 position of `coord`.
///
/// This is equivalent to [`lv03_to_wgs84()`] with the components of `coord`.
///
/// # Example
///
/// ```
/// # use lv03trans::*;
/// let grid = LV03::new(700000.0, 100000.0, 600.0);
/// assert_eq!(
///     lv03_to_wgs84_from(&grid),
///     lv03_to_wgs84(700000.0, 100000.0, 600.0)
/// );
/// ```
#[inline]
#[must_use]
pub fn lv03_to_wgs84_from(coord: &LV03) -> WGS84 {
    lv03_to_wgs84(coord.east, coord.north, coord.height)
}

/// Returns the LV03 position of the WGS84 `lat`, `lng` \[deg\] and `ell_height` \[m\].
///
/// This does not check the value range,
/// NaN and ±∞ propagate into the result.
///
/// # Example
///
/// ```
/// # use lv03trans::*;
/// // 46°02′38.87″, 8°43′49.79″
/// let grid = wgs84_to_lv03(46.044130555555554, 8.730497222222223, 650.60);
/// assert!((grid.east - 699999.76).abs() < 0.01);
/// assert!((grid.north - 99999.97).abs() < 0.01);
/// assert!((grid.height - 600.05).abs() < 0.01);
/// ```
#[must_use]
pub fn wgs84_to_lv03(lat: f64, lng: f64, ell_height: f64) -> LV03 {
    LV03 {
        east: wgs84_to_east(lat, lng),
        north: wgs84_to_north(lat, lng),
        height: wgs84_to_height(lat, lng, ell_height),
    }
}

/// Returns the LV03 position of `coord`.
///
/// This is equivalent to [`wgs84_to_lv03()`] with the components of `coord`.
///
/// # Example
///
/// ```
/// # use lv03trans::*;
/// let point = WGS84::new(46.95, 7.44, 550.0);
/// assert_eq!(
///     wgs84_to_lv03_from(&point),
///     wgs84_to_lv03(46.95, 7.44, 550.0)
/// );
/// ```
#[inline]
#[must_use]
pub fn wgs84_to_lv03_from(coord: &WGS84) -> LV03 {
    wgs84_to_lv03(coord.lat, coord.lng, coord.height)
}

//! Provides [`WGS84`] and [`LV03`], the coordinate triplets.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ErrorAxis;
use crate::{convert, Error, Result};

/// Represents a WGS84 position, a triplet latitude, longitude and ellipsoidal height.
///
/// No invariant is imposed, the components may be NaN or infinite.
///
/// # Example
///
/// ```
/// # use lv03trans::*;
/// // Construct
/// let point = WGS84::new(46.044130555555554, 8.730497222222223, 650.60);
/// assert_eq!(point.lat, 46.044130555555554);
/// assert_eq!(point.lng, 8.730497222222223);
/// assert_eq!(point.height, 650.60);
///
/// // Convert into LV03
/// let grid = point.to_lv03();
/// assert!((grid.east - 699999.76).abs() < 0.01);
/// assert!((grid.north - 99999.97).abs() < 0.01);
/// assert!((grid.height - 600.05).abs() < 0.01);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WGS84 {
    /// The latitude \[deg\]
    pub lat: f64,
    /// The longitude \[deg\]
    pub lng: f64,
    /// The ellipsoidal height \[m\]
    pub height: f64,
}

/// Represents a LV03 (CH1903) position, a triplet east, north and height.
///
/// The east and north carry the 600000 m and 200000 m shift
/// of the civil grid, the origin Bern locates on (600000, 200000).
///
/// # Example
///
/// ```
/// # use lv03trans::*;
/// let grid = LV03::new(700000.0, 100000.0, 600.0);
///
/// let point = grid.to_wgs84();
/// assert!((point.lat - 46.044127).abs() < 1e-6);
/// assert!((point.lng - 8.730499).abs() < 1e-6);
/// assert!((point.height - 650.55).abs() < 0.01);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LV03 {
    /// The east, Y \[m\]
    pub east: f64,
    /// The north, X \[m\]
    pub north: f64,
    /// The height \[m\]
    pub height: f64,
}

impl From<(f64, f64, f64)> for WGS84 {
    /// see [`WGS84::new()`]
    #[inline]
    fn from(rhs: (f64, f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1, rhs.2)
    }
}

impl From<[f64; 3]> for WGS84 {
    /// see [`WGS84::new()`]
    #[inline]
    fn from(rhs: [f64; 3]) -> Self {
        Self::new(rhs[0], rhs[1], rhs[2])
    }
}

impl From<LV03> for WGS84 {
    /// see [`LV03::to_wgs84()`]
    #[inline]
    fn from(value: LV03) -> Self {
        value.to_wgs84()
    }
}

impl From<(f64, f64, f64)> for LV03 {
    /// see [`LV03::new()`]
    #[inline]
    fn from(rhs: (f64, f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1, rhs.2)
    }
}

impl From<[f64; 3]> for LV03 {
    /// see [`LV03::new()`]
    #[inline]
    fn from(rhs: [f64; 3]) -> Self {
        Self::new(rhs[0], rhs[1], rhs[2])
    }
}

impl From<WGS84> for LV03 {
    /// see [`WGS84::to_lv03()`]
    #[inline]
    fn from(value: WGS84) -> Self {
        value.to_lv03()
    }
}

impl WGS84 {
    /// Makes a [`WGS84`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::*;
    /// let point = WGS84::new(46.95, 7.44, 550.0);
    /// assert_eq!(point.lat, 46.95);
    /// assert_eq!(point.lng, 7.44);
    /// assert_eq!(point.height, 550.0);
    /// ```
    #[inline]
    pub const fn new(lat: f64, lng: f64, height: f64) -> Self {
        Self { lat, lng, height }
    }

    /// Makes a [`WGS84`] with checking.
    ///
    /// The conversions accept any value,
    /// use this to reject a malformed input before converting.
    ///
    /// # Errors
    ///
    /// If `lat` and/or `lng` is out-of-range or NaN,
    /// `lat` must satisfy -90.0 <= and <= 90.0
    /// and `lng` does -180.0 <= and <= 180.0,
    /// or `height` is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::*;
    /// # fn main() -> Result<()> {
    /// let point = WGS84::try_new(46.95, 7.44, 550.0)?;
    /// assert_eq!(point, WGS84::new(46.95, 7.44, 550.0));
    ///
    /// // If out-of-range, returns Err
    /// assert!(WGS84::try_new(91.0, 7.44, 550.0).is_err());
    /// assert!(WGS84::try_new(46.95, 181.0, 550.0).is_err());
    /// assert!(WGS84::try_new(f64::NAN, 7.44, 550.0).is_err());
    /// assert!(WGS84::try_new(46.95, 7.44, f64::INFINITY).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(lat: f64, lng: f64, height: f64) -> Result<Self> {
        Error::check_range(&lat, ErrorAxis::Latitude, -90.0, 90.0)?;
        Error::check_range(&lng, ErrorAxis::Longitude, -180.0, 180.0)?;
        Error::check_finite(&height, ErrorAxis::Height)?;

        Ok(Self::new(lat, lng, height))
    }

    /// Returns the LV03 position of `self`.
    ///
    /// see [`wgs84_to_lv03_from()`](crate::wgs84_to_lv03_from).
    #[inline]
    #[must_use]
    pub fn to_lv03(&self) -> LV03 {
        convert::wgs84_to_lv03_from(self)
    }
}

impl LV03 {
    /// Makes a [`LV03`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::*;
    /// let grid = LV03::new(600000.0, 200000.0, 500.0);
    /// assert_eq!(grid.east, 600000.0);
    /// assert_eq!(grid.north, 200000.0);
    /// assert_eq!(grid.height, 500.0);
    /// ```
    #[inline]
    pub const fn new(east: f64, north: f64, height: f64) -> Self {
        Self {
            east,
            north,
            height,
        }
    }

    /// Makes a [`LV03`] with checking.
    ///
    /// The grid has no natural bounds, this only rejects NaN and ±∞.
    ///
    /// # Errors
    ///
    /// If any component is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::*;
    /// # fn main() -> Result<()> {
    /// let grid = LV03::try_new(600000.0, 200000.0, 500.0)?;
    /// assert_eq!(grid, LV03::new(600000.0, 200000.0, 500.0));
    ///
    /// assert!(LV03::try_new(f64::NAN, 200000.0, 500.0).is_err());
    /// assert!(LV03::try_new(600000.0, f64::NEG_INFINITY, 500.0).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(east: f64, north: f64, height: f64) -> Result<Self> {
        Error::check_finite(&east, ErrorAxis::East)?;
        Error::check_finite(&north, ErrorAxis::North)?;
        Error::check_finite(&height, ErrorAxis::Height)?;

        Ok(Self::new(east, north, height))
    }

    /// Returns the WGS84 position of `self`.
    ///
    /// see [`lv03_to_wgs84_from()`](crate::lv03_to_wgs84_from).
    #[inline]
    #[must_use]
    pub fn to_wgs84(&self) -> WGS84 {
        convert::lv03_to_wgs84_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorImpl;

    #[test]
    fn test_from() {
        assert_eq!(WGS84::from((46.0, 7.0, 1.0)), WGS84::new(46.0, 7.0, 1.0));
        assert_eq!(WGS84::from([46.0, 7.0, 1.0]), WGS84::new(46.0, 7.0, 1.0));
        assert_eq!(
            LV03::from((600000.0, 200000.0, 1.0)),
            LV03::new(600000.0, 200000.0, 1.0)
        );
        assert_eq!(
            LV03::from([600000.0, 200000.0, 1.0]),
            LV03::new(600000.0, 200000.0, 1.0)
        );
    }

    #[test]
    fn test_from_other() {
        let grid = LV03::new(700000.0, 100000.0, 600.0);
        assert_eq!(WGS84::from(grid), grid.to_wgs84());

        let point = WGS84::new(46.044130555555554, 8.730497222222223, 650.60);
        assert_eq!(LV03::from(point), point.to_lv03());
    }

    #[test]
    fn test_try_new_wgs84() {
        assert!(WGS84::try_new(90.0, 180.0, 0.0).is_ok());
        assert!(WGS84::try_new(-90.0, -180.0, 0.0).is_ok());

        let e = WGS84::try_new(90.0_f64.next_up(), 0.0, 0.0).unwrap_err();
        assert_eq!(e.axis(), &ErrorAxis::Latitude);
        assert!(matches!(e.kind(), ErrorImpl::OutOfRangePosition { .. }));

        let e = WGS84::try_new(0.0, (-180.0_f64).next_down(), 0.0).unwrap_err();
        assert_eq!(e.axis(), &ErrorAxis::Longitude);

        let e = WGS84::try_new(0.0, f64::NAN, 0.0).unwrap_err();
        assert_eq!(
            e.kind(),
            &ErrorImpl::NAN {
                axis: ErrorAxis::Longitude
            }
        );

        let e = WGS84::try_new(0.0, 0.0, f64::NEG_INFINITY).unwrap_err();
        assert_eq!(
            e.kind(),
            &ErrorImpl::Infinite {
                axis: ErrorAxis::Height
            }
        );
    }

    #[test]
    fn test_try_new_lv03() {
        // no range imposed
        assert!(LV03::try_new(-1e9, 1e9, -1e9).is_ok());

        let e = LV03::try_new(f64::NAN, 0.0, 0.0).unwrap_err();
        assert_eq!(e.axis(), &ErrorAxis::East);
        let e = LV03::try_new(0.0, f64::INFINITY, 0.0).unwrap_err();
        assert_eq!(e.axis(), &ErrorAxis::North);
        let e = LV03::try_new(0.0, 0.0, f64::NAN).unwrap_err();
        assert_eq!(e.axis(), &ErrorAxis::Height);
    }

    #[cfg(feature = "serde")]
    mod tests_serde {
        use super::*;
        use serde_test::{assert_tokens, Token};

        #[test]
        fn test_wgs84() {
            assert_tokens(
                &WGS84::new(46.5, 7.5, 500.0),
                &[
                    Token::Struct {
                        name: "WGS84",
                        len: 3,
                    },
                    Token::Str("lat"),
                    Token::F64(46.5),
                    Token::Str("lng"),
                    Token::F64(7.5),
                    Token::Str("height"),
                    Token::F64(500.0),
                    Token::StructEnd,
                ],
            );
        }

        #[test]
        fn test_lv03() {
            assert_tokens(
                &LV03::new(600000.0, 200000.0, 500.0),
                &[
                    Token::Struct {
                        name: "LV03",
                        len: 3,
                    },
                    Token::Str("east"),
                    Token::F64(600000.0),
                    Token::Str("north"),
                    Token::F64(200000.0),
                    Token::Str("height"),
                    Token::F64(500.0),
                    Token::StructEnd,
                ],
            );
        }

        #[test]
        fn test_json() {
            let grid = LV03::new(600000.0, 200000.0, 500.0);
            let json = serde_json::to_string(&grid).unwrap();
            assert_eq!(json, r#"{"east":600000.0,"north":200000.0,"height":500.0}"#);
            assert_eq!(serde_json::from_str::<LV03>(&json).unwrap(), grid);
        }
    }
}

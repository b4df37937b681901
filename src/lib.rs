//! # lv03trans
//!
//! Unofficial approximate coordinate transformer
//! between the Swiss LV03 (CH1903) grid and WGS84,
//! by the polynomials which Federal Office of Topography swisstopo publishing [^1].
//!
//! ```
//! use lv03trans::{lv03_to_wgs84, wgs84_to_lv03, LV03, WGS84};
//!
//! // LV03 to WGS84
//! let point = lv03_to_wgs84(700000.0, 100000.0, 600.0);
//! // Prints WGS84 { lat: 46.04412677777778, lng: 8.730499333333333, height: 650.554 }
//! println!("{point:?}");
//!
//! // WGS84 to LV03, 46°02′38.87″, 8°43′49.79″
//! let grid = wgs84_to_lv03(46.044130555555554, 8.730497222222223, 650.60);
//! // Prints LV03 { east: 699999.7636211634, north: 99999.97309503521, height: 600.0494759100001 }
//! println!("{grid:?}");
//!
//! // Or by the struct
//! let grid = LV03::new(700000.0, 100000.0, 600.0);
//! assert_eq!(grid.to_wgs84(), point);
//! assert_eq!(WGS84::from(grid), point);
//! ```
//!
//! Features:
//!
//! - Supports both LV03 to WGS84 and WGS84 to LV03
//! - Accuracy is about 1 to 2 m, validate by NAVREF [^2] if more is required
//! - No validation in the conversions, NaN and ±∞ propagate,
//!   use [`WGS84::try_new`] and [`LV03::try_new`] to reject such inputs
//! - Sexagesimal notation, see [`dms`]
//! - No dependency
//!   - It depends on [`serde`][serde] crate only if `serde` feature on
//!
//! The military grid (without the 600000 m and 200000 m shift)
//! and LV95 are not supported.
//!
//! [serde]: https://crates.io/crates/serde
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for [`WGS84`] and [`LV03`] only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use lv03trans::LV03;
//!
//! let grid = LV03::new(600000.0, 200000.0, 500.0);
//!
//! // Serialize to json
//! let json = serde_json::to_string(&grid)?;
//! assert_eq!(json, r#"{"east":600000.0,"north":200000.0,"height":500.0}"#);
//!
//! // Deserialize from json
//! let result: LV03 = serde_json::from_str(&json)?;
//! assert_eq!(result, grid);
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```
//!
//! [^1]: Federal Office of Topography swisstopo, Approximate formulas for the
//!       transformation between Swiss projection coordinates and WGS84:
//!       <https://www.swisstopo.admin.ch/en/transformation-calculation-services>
//!
//! [^2]: NAVREF: <https://www.swisstopo.admin.ch/en/coordinates-conversion-navref>

#[doc(inline)]
pub use convert::{lv03_to_wgs84, lv03_to_wgs84_from, wgs84_to_lv03, wgs84_to_lv03_from};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use point::{LV03, WGS84};

pub mod convert;
pub mod dms;
pub mod error;
mod internal;
pub mod point;

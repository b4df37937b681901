//! Provides utilities for sexagesimal angles.
//!
//! swisstopo writes its reference points in sexagesimal notation,
//! e.g. `46°02′38.87″`, and the LV03 approximation itself
//! takes the angle in seconds, see [`to_sexagesimal_seconds`].
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use crate::internal::mul_add;

/// Returns the angle in seconds \[″\] from a DD notation [`f64`].
///
/// The degree and minute parts are taken by [`f64::floor`],
/// hence a negative angle is decomposed toward the negative infinity,
/// e.g. -0.5° becomes -1° 30′ 0″.
/// The sum is still -1800″ up to rounding;
/// the coordinates of Switzerland are never negative.
///
/// This does not check the value range, NaN results NaN.
///
/// # Example
///
/// ```
/// # use lv03trans::dms::to_sexagesimal_seconds;
/// #
/// assert_eq!(to_sexagesimal_seconds(46.0), 165600.0);
/// assert_eq!(to_sexagesimal_seconds(46.5), 167400.0);
/// assert!(to_sexagesimal_seconds(f64::NAN).is_nan());
/// ```
#[inline]
#[must_use]
pub fn to_sexagesimal_seconds(dec: f64) -> f64 {
    let deg = dec.floor();
    let min = ((dec - deg) * 60.0).floor();
    let sec = ((dec - deg) * 60.0 - min) * 60.0;

    mul_add!(deg, 3600.0, mul_add!(min, 60.0, sec))
}

/// Returns a DMS notation [`str`] from a DD notation [`f64`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use lv03trans::dms::to_dms;
/// #
/// assert_eq!(to_dms(&46.5), Some("46°30′00″".to_string()));
/// assert_eq!(to_dms(&-8.75), Some("-8°45′00″".to_string()));
/// assert_eq!(to_dms(&f64::NAN), None);
/// ```
#[inline]
#[must_use]
pub fn to_dms(t: &f64) -> Option<String> {
    DMS::try_from(t).ok().map(|x| x.to_string())
}

/// Returns a DD notation [`f64`] from a DMS notation [`str`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use lv03trans::dms::from_dms;
/// #
/// assert_eq!(from_dms("46°30′00″"), Some(46.5));
/// assert_eq!(from_dms("8°45'"), Some(8.75));
/// assert_eq!(from_dms("46.5"), None);
/// ```
#[inline]
#[must_use]
pub fn from_dms(s: &str) -> Option<f64> {
    s.parse::<DMS>().ok().map(|x| x.to_degree())
}

/// Signature of DMS
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Sign {
    Positive,
    Negative,
}

/// Represents a DMS notation latitude or longitude.
///
/// This supports -180.0 <= and <= 180.0 angle in degree (DD notation).
///
/// # Example
///
/// ```
/// # use lv03trans::dms::*;
/// #
/// # fn wrapper() -> Option<()> {
/// let latitude = DMS::new(Sign::Positive, 46, 2, 38, 0.87)?;
///
/// assert_eq!(latitude.to_string(), "46°02′38.87″");
///
/// // Construct from &str, the ASCII marks are also accepted
/// assert_eq!("46°02′38.87″".parse::<DMS>().ok()?, latitude);
/// assert_eq!("46°2'38.87\"".parse::<DMS>().ok()?, latitude);
///
/// // Convert into seconds
/// assert!((latitude.to_seconds() - 165758.87).abs() < 1e-9);
///
/// // Construct from DD notation (f64)
/// let longitude = DMS::try_from(&8.75).ok()?;
/// assert_eq!(longitude.degree(), &8);
/// assert_eq!(longitude.minute(), &45);
/// assert_eq!(longitude.second(), &0);
/// # Some(())}
/// # fn main() {wrapper();()}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct DMS {
    sign: Sign,
    degree: u8,
    minute: u8,
    second: u8,
    fract: f64,
}

impl Display for DMS {
    /// Returns a `D°MM′SS.sss″` notation of `self`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fract = if self.fract == 0.0 {
            String::new()
        } else {
            format!("{}", self.fract)
                .trim_start_matches('0')
                .trim_end_matches('0')
                .to_string()
        };

        let buf = format!(
            "{}°{:02}′{:02}{}″",
            self.degree, self.minute, self.second, fract
        );

        f.pad_integral(matches!(self.sign, Sign::Positive), "", &buf)
    }
}

impl FromStr for DMS {
    type Err = ParseDMSError;

    /// Makes a [`DMS`] from `D°M′S.sss″` notation [`&str`].
    ///
    /// The minute and second are optional, e.g. `46°` and `46°30′`,
    /// and `'` and `"` are accepted for `′` and `″`.
    ///
    /// # Errors
    ///
    /// When `s` is invalid or out-of-range.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// assert_eq!(
    ///     "7°26′19.09″".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Positive, 7, 26, 19, 0.09)?)
    /// );
    /// assert_eq!(
    ///     "-46°30'".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Negative, 46, 30, 0, 0.0)?)
    /// );
    /// assert!("46°61′".parse::<DMS>().is_err());
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::with_empty());
        };

        let mut chars = s.chars().peekable();

        let sign = if chars.next_if_eq(&'-').is_some() {
            Sign::Negative
        } else {
            let _ = chars.next_if_eq(&'+');
            Sign::Positive
        };

        let degree = parse_integer(&mut chars)?.ok_or(Self::Err::with_invalid_digit())?;
        expect_mark(&mut chars, &['°'])?;

        let (minute, second, fract) = match parse_integer(&mut chars)? {
            None => (0, 0, 0.0),
            Some(minute) => {
                expect_mark(&mut chars, &['′', '\''])?;

                let second = parse_integer(&mut chars)?;
                let fract = if chars.next_if_eq(&'.').is_some() {
                    Some(parse_fraction(&mut chars)?)
                } else {
                    None
                };

                if second.is_some() || fract.is_some() {
                    expect_mark(&mut chars, &['″', '"'])?;
                }

                (minute, second.unwrap_or(0), fract.unwrap_or(0.0))
            }
        };

        skip_whitespace(&mut chars);
        if chars.peek().is_some() {
            return Err(Self::Err::with_invalid_digit());
        }

        let to_u8 = |v: u64| u8::try_from(v).map_err(|_| ParseDMSError::with_out_of_bounds());
        Self::new(sign, to_u8(degree)?, to_u8(minute)?, to_u8(second)?, fract)
            .ok_or(Self::Err::with_out_of_bounds())
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn expect_mark(chars: &mut Peekable<Chars>, marks: &[char]) -> Result<(), ParseDMSError> {
    skip_whitespace(chars);
    match chars.next() {
        Some(c) if marks.contains(&c) => Ok(()),
        _ => Err(ParseDMSError::with_invalid_digit()),
    }
}

fn parse_integer(chars: &mut Peekable<Chars>) -> Result<Option<u64>, ParseDMSError> {
    skip_whitespace(chars);

    let mut acc: Option<u64> = None;
    while let Some(nb) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let r = acc
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(nb)))
            .ok_or(ParseDMSError::with_out_of_bounds())?;
        acc = Some(r);
    }

    Ok(acc)
}

fn parse_fraction(chars: &mut Peekable<Chars>) -> Result<f64, ParseDMSError> {
    let mut s = String::from("0.");
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        s.push(c);
    }

    if s.len() == 2 {
        return Err(ParseDMSError::with_invalid_digit());
    }

    s.parse::<f64>()
        .map_err(|_| ParseDMSError::with_invalid_digit())
}

impl TryFrom<&f64> for DMS {
    type Error = TryFromDMSError;

    /// Makes a [`DMS`] from DD notation [`f64`].
    ///
    /// Unlike [`to_sexagesimal_seconds`],
    /// the decomposition is sign and magnitude.
    ///
    /// # Errors
    ///
    /// When `value` is NaN or not in -180.0 to 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// assert_eq!(
    ///     DMS::try_from(&46.5),
    ///     Ok(DMS::new(Sign::Positive, 46, 30, 0, 0.0)?)
    /// );
    /// assert_eq!(
    ///     DMS::try_from(&-0.5),
    ///     Ok(DMS::new(Sign::Negative, 0, 30, 0, 0.0)?)
    /// );
    /// assert!(DMS::try_from(&f64::NAN).is_err());
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn try_from(value: &f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(TryFromDMSError::new_nan());
        } else if !(-180.0..=180.0).contains(value) {
            return Err(TryFromDMSError::new_oob());
        };

        let sign = if value.is_sign_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        };

        let abs = value.abs();
        let degree = abs.trunc();
        let mm = (abs - degree) * 60.0;
        let minute = mm.trunc();
        let ss = (mm - minute) * 60.0;
        let second = ss.trunc();

        Self::new(
            sign,
            degree as u8,
            minute as u8,
            second as u8,
            ss - second,
        )
        .ok_or(TryFromDMSError::new_oob())
    }
}

impl DMS {
    /// Makes a [`DMS`].
    ///
    /// # Errors
    ///
    /// Returns [`None`] when the input is not in -180°0′0″ to 180°0′0″.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 46, 57, 8, 0.66)?;
    /// assert_eq!(dms.to_string(), "46°57′08.66″");
    ///
    /// assert!(DMS::new(Sign::Positive, 46, 60, 0, 0.0).is_none());
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn new(sign: Sign, degree: u8, minute: u8, second: u8, fract: f64) -> Option<Self> {
        if degree > 180
            || degree == 180 && (minute > 0 || second > 0 || fract > 0.0)
            || minute >= 60
            || second >= 60
            || !(0.0..1.0).contains(&fract)
        {
            return None;
        }

        Some(Self {
            sign,
            degree,
            minute,
            second,
            fract,
        })
    }

    /// Returns the sign of `self`.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the degree of `self`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> &u8 {
        &self.degree
    }

    /// Returns the minute of `self`.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> &u8 {
        &self.minute
    }

    /// Returns the integer part of second of `self`.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &u8 {
        &self.second
    }

    /// Returns the fraction part of second of `self`.
    #[inline]
    #[must_use]
    pub const fn fract(&self) -> &f64 {
        &self.fract
    }

    /// Returns a DD notation [`f64`] that `self` converts into.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 46, 30, 0, 0.0)?;
    /// assert_eq!(dms.to_degree(), 46.5);
    /// let dms = DMS::new(Sign::Negative, 46, 30, 0, 0.0)?;
    /// assert_eq!(dms.to_degree(), -46.5);
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn to_degree(&self) -> f64 {
        let temp = mul_add!(f64::from(self.minute), 1. / 60., f64::from(self.degree));
        let temp = mul_add!(f64::from(self.second) + self.fract, 1. / 3600., temp);

        match self.sign {
            Sign::Positive => temp,
            Sign::Negative => -temp,
        }
    }

    /// Returns the angle in seconds \[″\] that `self` converts into.
    ///
    /// # Example
    ///
    /// ```
    /// # use lv03trans::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 46, 30, 0, 0.0)?;
    /// assert_eq!(dms.to_seconds(), 167400.0);
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        let temp = mul_add!(
            f64::from(self.degree),
            3600.,
            mul_add!(f64::from(self.minute), 60., f64::from(self.second))
        ) + self.fract;

        match self.sign {
            Sign::Positive => temp,
            Sign::Negative => -temp,
        }
    }
}

//
// Error
//

/// An error which can be returned on parsing DMS degree.
///
/// This error is used as the error type for the [`FromStr`] for [`DMS`].
#[derive(Debug, PartialEq, Eq)]
pub struct ParseDMSError {
    kind: ParseDMSErrorKind,
}

/// An error kind of [`ParseDMSError`].
#[derive(Debug, PartialEq, Eq)]
pub enum ParseDMSErrorKind {
    InvalidDigit,
    OutOfBounds,
    Empty,
}

impl ParseDMSError {
    #[cold]
    const fn with_invalid_digit() -> Self {
        Self {
            kind: ParseDMSErrorKind::InvalidDigit,
        }
    }

    #[cold]
    const fn with_out_of_bounds() -> Self {
        Self {
            kind: ParseDMSErrorKind::OutOfBounds,
        }
    }

    #[cold]
    const fn with_empty() -> Self {
        Self {
            kind: ParseDMSErrorKind::Empty,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ParseDMSErrorKind {
        &self.kind
    }
}

impl Error for ParseDMSError {}

impl Display for ParseDMSError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.kind {
            ParseDMSErrorKind::InvalidDigit => f.write_str("invalid digit found in string"),
            ParseDMSErrorKind::OutOfBounds => f.write_str("cannot parse out-of-bounds DMS"),
            ParseDMSErrorKind::Empty => f.write_str("cannot parse DMS from empty string"),
        }
    }
}

/// An error which can be returned on converting DMS degree.
///
/// This error is used as the error type for the [`TryFrom`] for [`DMS`].
#[derive(Debug, PartialEq, Eq)]
pub struct TryFromDMSError {
    kind: TryFromDMSErrorKind,
}

/// An error kind of [`TryFromDMSError`].
#[derive(Debug, PartialEq, Eq)]
pub enum TryFromDMSErrorKind {
    NAN,
    OutOfBounds,
}

impl TryFromDMSError {
    #[cold]
    const fn new_nan() -> Self {
        Self {
            kind: TryFromDMSErrorKind::NAN,
        }
    }

    #[cold]
    const fn new_oob() -> Self {
        Self {
            kind: TryFromDMSErrorKind::OutOfBounds,
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &TryFromDMSErrorKind {
        &self.kind
    }
}

impl Error for TryFromDMSError {}

impl Display for TryFromDMSError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let s = match self.kind {
            TryFromDMSErrorKind::NAN => "number would be NAN",
            TryFromDMSErrorKind::OutOfBounds => "number would be out-of-bounds",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_sexagesimal_seconds() {
        assert_eq!(to_sexagesimal_seconds(0.0), 0.0);
        assert_eq!(to_sexagesimal_seconds(46.0), 165600.0);
        assert_eq!(to_sexagesimal_seconds(46.5), 167400.0);
        assert_eq!(to_sexagesimal_seconds(7.25), 26100.0);

        // Bern, 46°57′08.66″ and 7°26′22.50″
        assert!((to_sexagesimal_seconds(46.95240555555556) - 169028.66).abs() < 1e-8);
        assert!((to_sexagesimal_seconds(7.439583333333333) - 26782.5).abs() < 1e-8);

        // fractional seconds survive
        let dec = 46.0 + 1.0 / 3600.0 * 0.123;
        assert!((to_sexagesimal_seconds(dec) - 165600.123).abs() < 1e-8);
    }

    #[test]
    fn test_to_sexagesimal_seconds_negative() {
        // floor, not trunc: -0.5 decomposes into -1° 30′
        let deg = (-0.5_f64).floor();
        let min = ((-0.5 - deg) * 60.0).floor();
        assert_eq!(deg, -1.0);
        assert_eq!(min, 30.0);

        assert_eq!(to_sexagesimal_seconds(-0.5), -1800.0);
        assert_eq!(to_sexagesimal_seconds(-46.0), -165600.0);
    }

    #[test]
    fn test_to_sexagesimal_seconds_non_finite() {
        assert!(to_sexagesimal_seconds(f64::NAN).is_nan());
        assert!(to_sexagesimal_seconds(f64::INFINITY).is_nan());
        assert!(to_sexagesimal_seconds(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_try_new() {
        // error
        assert!(DMS::new(Sign::Positive, 0, 0, 0, 0.0_f64.next_down()).is_none());
        assert!(DMS::new(Sign::Positive, 0, 0, 0, 1.0).is_none());
        assert!(DMS::new(Sign::Positive, 0, 0, 0, f64::NAN).is_none());
        assert!(DMS::new(Sign::Positive, 0, 0, 60, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 0, 60, 0, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 181, 0, 0, 0.0).is_none());
        assert!(DMS::new(Sign::Positive, 180, 0, 0, 0.0_f64.next_up()).is_none());
        assert!(DMS::new(Sign::Negative, 180, 0, 1, 0.0).is_none());
        assert!(DMS::new(Sign::Negative, 180, 1, 0, 0.0).is_none());

        // healthy
        assert!(DMS::new(Sign::Positive, 0, 0, 0, 0.0).is_some());
        assert!(DMS::new(Sign::Positive, 180, 0, 0, 0.0).is_some());
        assert!(DMS::new(Sign::Negative, 180, 0, 0, 0.0).is_some());
        assert!(DMS::new(Sign::Positive, 179, 59, 59, 0.5).is_some());
    }

    #[test]
    fn test_to_string() {
        let cases = [
            (DMS::new(Sign::Positive, 0, 0, 0, 0.0), "0°00′00″"),
            (DMS::new(Sign::Negative, 0, 0, 0, 0.0), "-0°00′00″"),
            (DMS::new(Sign::Positive, 0, 0, 0, 0.5), "0°00′00.5″"),
            (DMS::new(Sign::Positive, 0, 0, 1, 0.0), "0°00′01″"),
            (DMS::new(Sign::Positive, 0, 1, 0, 0.0), "0°01′00″"),
            (DMS::new(Sign::Positive, 1, 0, 0, 0.0), "1°00′00″"),
            (DMS::new(Sign::Positive, 46, 2, 38, 0.87), "46°02′38.87″"),
            (DMS::new(Sign::Negative, 8, 43, 49, 0.79), "-8°43′49.79″"),
            (DMS::new(Sign::Positive, 180, 0, 0, 0.0), "180°00′00″"),
        ];

        for (a, e) in cases {
            assert_eq!(a.unwrap().to_string(), e);
        }
    }

    #[test]
    fn test_from_str() {
        let cases = [
            ("46°", DMS::new(Sign::Positive, 46, 0, 0, 0.0)),
            ("+46°", DMS::new(Sign::Positive, 46, 0, 0, 0.0)),
            ("-46°", DMS::new(Sign::Negative, 46, 0, 0, 0.0)),
            ("46°30′", DMS::new(Sign::Positive, 46, 30, 0, 0.0)),
            ("46°30'", DMS::new(Sign::Positive, 46, 30, 0, 0.0)),
            ("46°02′38″", DMS::new(Sign::Positive, 46, 2, 38, 0.0)),
            ("46°02′38.87″", DMS::new(Sign::Positive, 46, 2, 38, 0.87)),
            ("46°2'38.87\"", DMS::new(Sign::Positive, 46, 2, 38, 0.87)),
            ("46° 02′ 38.87″", DMS::new(Sign::Positive, 46, 2, 38, 0.87)),
            ("  8°43′49.79″  ", DMS::new(Sign::Positive, 8, 43, 49, 0.79)),
            ("0°00′.5″", DMS::new(Sign::Positive, 0, 0, 0, 0.5)),
            ("-0°00′00″", DMS::new(Sign::Negative, 0, 0, 0, 0.0)),
            ("180°", DMS::new(Sign::Positive, 180, 0, 0, 0.0)),
        ];
        for (a, e) in cases {
            assert_eq!(DMS::from_str(a).expect(a), e.expect(a), "{}", a);
        }

        // invalid
        let cases = [
            "-", "a", "46", "46.5", "°", "46°30", "46°30′38", "46°30′38.″", "46°30′38.87",
            "46°30′38″x", "--46°", "46°′",
        ];
        for c in cases {
            assert_eq!(
                DMS::from_str(c).unwrap_err().kind(),
                &ParseDMSErrorKind::InvalidDigit,
                "{}",
                c
            );
        }

        // out-of-bounds
        let cases = ["181°", "180°00′01″", "46°60′", "46°30′60″", "99999999999999999999999°"];
        for c in cases {
            assert_eq!(
                DMS::from_str(c).unwrap_err().kind(),
                &ParseDMSErrorKind::OutOfBounds,
                "{}",
                c
            );
        }

        // empty
        assert_eq!(
            DMS::from_str("").unwrap_err().kind(),
            &ParseDMSErrorKind::Empty
        );
        assert_eq!(
            DMS::from_str("   ").unwrap_err().kind(),
            &ParseDMSErrorKind::Empty
        );
    }

    #[test]
    fn test_to_degree() {
        let dms = DMS::new(Sign::Positive, 46, 2, 38, 0.87).unwrap();
        assert!((46.044130555555554 - dms.to_degree()).abs() < 1e-12);

        let dms = DMS::new(Sign::Negative, 8, 43, 49, 0.79).unwrap();
        assert!((-8.730497222222223 - dms.to_degree()).abs() < 1e-12);
    }

    #[test]
    fn test_to_seconds() {
        let dms = DMS::new(Sign::Positive, 46, 57, 8, 0.66).unwrap();
        assert!((dms.to_seconds() - 169028.66).abs() < 1e-9);

        let dms = DMS::new(Sign::Negative, 7, 26, 22, 0.5).unwrap();
        assert_eq!(dms.to_seconds(), -26782.5);
    }

    #[test]
    fn test_try_from_dd() {
        let dms = DMS::new(Sign::Positive, 46, 2, 38, 0.87).unwrap();
        let result = DMS::try_from(&dms.to_degree()).unwrap();
        assert_eq!(dms.sign, result.sign);
        assert_eq!(dms.degree, result.degree);
        assert_eq!(dms.minute, result.minute);
        assert_eq!(dms.second, result.second);
        assert!((result.fract - dms.fract).abs() < 1e-9);

        // at origin
        let a = DMS::try_from(&0.0).unwrap();
        assert_eq!(a.sign, Sign::Positive);
        assert_eq!((a.degree, a.minute, a.second, a.fract), (0, 0, 0, 0.0));

        let a = DMS::try_from(&-0.0).unwrap();
        assert_eq!(a.sign, Sign::Negative);
        assert_eq!((a.degree, a.minute, a.second, a.fract), (0, 0, 0, 0.0));

        // on bounds
        let a = DMS::try_from(&180.0).unwrap();
        assert_eq!((a.degree, a.minute, a.second, a.fract), (180, 0, 0, 0.0));
        let a = DMS::try_from(&-180.0).unwrap();
        assert_eq!(a.sign, Sign::Negative);
        assert_eq!((a.degree, a.minute, a.second, a.fract), (180, 0, 0, 0.0));

        // near bounds
        let a = DMS::try_from(&180.0_f64.next_down()).unwrap();
        assert_eq!((a.degree, a.minute, a.second), (179, 59, 59));

        // err
        assert_eq!(
            DMS::try_from(&f64::NAN).unwrap_err().kind(),
            &TryFromDMSErrorKind::NAN
        );
        assert_eq!(
            DMS::try_from(&180.0_f64.next_up()).unwrap_err().kind(),
            &TryFromDMSErrorKind::OutOfBounds
        );
        assert_eq!(
            DMS::try_from(&(-180.0_f64).next_down()).unwrap_err().kind(),
            &TryFromDMSErrorKind::OutOfBounds
        );
    }

    #[test]
    fn test_identity() {
        for deg in (0..180).step_by(7) {
            for min in 0..60 {
                for sec in (0..60).step_by(3) {
                    for sign in [Sign::Positive, Sign::Negative] {
                        let degree = DMS::new(sign, deg, min, sec, 0.25).unwrap().to_degree();
                        let result = DMS::try_from(&degree).unwrap();
                        assert!((result.to_degree() - degree).abs() < 1e-14);
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_dms_to_dms() {
        assert_eq!(to_dms(&46.5).as_deref(), Some("46°30′00″"));
        assert_eq!(to_dms(&181.0), None);
        assert_eq!(from_dms("46°30′00″"), Some(46.5));
        assert_eq!(from_dms("-46°30′"), Some(-46.5));
        assert_eq!(from_dms(""), None);
    }
}

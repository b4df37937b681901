//! Provides the error type of the validating constructors.

/// Alias for a `Result<T, lv03trans::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
///
/// The conversions themselves never fail,
/// only [`WGS84::try_new`](crate::WGS84::try_new)
/// and [`LV03::try_new`](crate::LV03::try_new) return this.
#[derive(Debug)]
pub struct Error {
    pub err: Box<ErrorImpl>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorImpl {
        &self.err
    }

    /// Returns the component which the error is about.
    pub fn axis(&self) -> &ErrorAxis {
        match self.kind() {
            ErrorImpl::NAN { axis }
            | ErrorImpl::Infinite { axis }
            | ErrorImpl::OutOfRangePosition { axis, .. } => axis,
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn new_nan(axis: ErrorAxis) -> Self {
        Self {
            err: Box::new(ErrorImpl::NAN { axis }),
        }
    }

    #[cold]
    pub(crate) fn new_infinite(axis: ErrorAxis) -> Self {
        Self {
            err: Box::new(ErrorImpl::Infinite { axis }),
        }
    }

    #[cold]
    pub(crate) fn new_out_of_range(axis: ErrorAxis, low: f64, high: f64) -> Self {
        Self {
            err: Box::new(ErrorImpl::OutOfRangePosition { axis, low, high }),
        }
    }

    /// Checks that `value` is a number, neither NaN nor infinite.
    pub(crate) fn check_finite(value: &f64, axis: ErrorAxis) -> Result<()> {
        if value.is_nan() {
            Err(Self::new_nan(axis))
        } else if value.is_infinite() {
            Err(Self::new_infinite(axis))
        } else {
            Ok(())
        }
    }

    /// Checks that `value` satisfies `low <= value <= high`, NaN included as error.
    pub(crate) fn check_range(value: &f64, axis: ErrorAxis, low: f64, high: f64) -> Result<()> {
        if value.is_nan() {
            Err(Self::new_nan(axis))
        } else if value.lt(&low) || high.lt(value) {
            Err(Self::new_out_of_range(axis, low, high))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorImpl {
    /// The component is NaN.
    NAN {
        /// The component
        axis: ErrorAxis,
    },
    /// The component is ±∞.
    Infinite {
        /// The component
        axis: ErrorAxis,
    },
    /// The component is out of the domain.
    OutOfRangePosition {
        /// The component
        axis: ErrorAxis,
        /// Lower bound, inclusive
        low: f64,
        /// Upper bound, inclusive
        high: f64,
    },
}

/// A component of [`WGS84`](crate::WGS84) or [`LV03`](crate::LV03).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorAxis {
    Latitude,
    Longitude,
    East,
    North,
    Height,
}

impl std::fmt::Display for ErrorAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorAxis::Latitude => "latitude",
            ErrorAxis::Longitude => "longitude",
            ErrorAxis::East => "east",
            ErrorAxis::North => "north",
            ErrorAxis::Height => "height",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for ErrorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorImpl::NAN { axis } => write!(f, "invalid {axis}: NaN"),
            ErrorImpl::Infinite { axis } => write!(f, "invalid {axis}: infinite"),
            ErrorImpl::OutOfRangePosition { axis, low, high } => {
                write!(f, "invalid {axis}: must satisfy {low:?} <= and <= {high:?}")
            }
        }
    }
}

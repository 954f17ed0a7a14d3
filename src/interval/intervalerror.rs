use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Left,
    Right
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Border::Left => write!(f, "left"),
            Border::Right => write!(f, "right")
        }
    }
}

#[derive(Debug, Error)]
pub enum IntervalError {
    #[error("Cannot write to stdout")]
    Prompt(#[source] std::io::Error),
    #[error("Cannot read interval's {border} border")]
    Read {
        border: Border,
        #[source]
        source: Option<std::io::Error>
    },
    #[error("Cannot read interval's {border} border: '{token}' is not a number")]
    Parse {
        border: Border,
        token: String,
        #[source]
        source: std::num::ParseFloatError
    },
    #[error("The interval's left border must not be less than 0")]
    NegativeLeft(f64),
    #[error("The interval's right border must not be greater than pi")]
    RightAbovePi(f64),
    #[error("The interval's right border must not be less than left")]
    RightBelowLeft {
        left: f64,
        right: f64
    }
}

// 分類輔助，僅供測試判斷錯誤種類
impl IntervalError {
    #[cfg(test)]
    pub(crate) fn is_parse_error(&self) -> bool {
        matches!(self, IntervalError::Parse { .. })
    }

    #[cfg(test)]
    pub(crate) fn is_range_error(&self) -> bool {
        matches!(self, IntervalError::NegativeLeft(_) | IntervalError::RightAbovePi(_))
    }

    #[cfg(test)]
    pub(crate) fn is_order_error(&self) -> bool {
        matches!(self, IntervalError::RightBelowLeft { .. })
    }

    #[cfg(test)]
    pub(crate) fn is_io_error(&self) -> bool {
        matches!(self, IntervalError::Prompt(_) | IntervalError::Read { .. })
    }
}

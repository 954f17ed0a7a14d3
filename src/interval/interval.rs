use std::f64::consts::PI;

use crate::interval::intervalerror::IntervalError;

/// 已驗證的積分區間，滿足 0 ≤ left ≤ right ≤ π。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64
}

impl Interval {
    pub fn new(left: f64, right: f64) -> Result<Interval, IntervalError> {
        Self::check_left(left)?;
        Self::check_right(left, right)?;
        Ok(Interval { left, right })
    }

    // 比較式寫成「必須成立」的形式，NaN 會落入錯誤分支
    pub(crate) fn check_left(left: f64) -> Result<(), IntervalError> {
        if !(left >= 0.0) {
            return Err(IntervalError::NegativeLeft(left));
        }
        Ok(())
    }

    pub(crate) fn check_right(left: f64, right: f64) -> Result<(), IntervalError> {
        if !(right <= PI) {
            return Err(IntervalError::RightAbovePi(right));
        }
        if !(right >= left) {
            return Err(IntervalError::RightBelowLeft { left, right });
        }
        Ok(())
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

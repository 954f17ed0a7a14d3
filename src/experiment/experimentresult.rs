use std::fmt;

use crate::interval::interval::Interval;
use crate::math::quadrature::quadratureengine::compute_area;
use crate::math::quadrature::quadraturerule::QuadratureRule;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
    subdivision_count: usize,
    midpoint_area: f64,
    simpson_area: f64
}

impl ExperimentResult {
    pub fn new(subdivision_count: usize, midpoint_area: f64, simpson_area: f64) -> ExperimentResult {
        ExperimentResult {
            subdivision_count,
            midpoint_area,
            simpson_area
        }
    }

    /// 對同一區間與切割數，各以兩種規則計算一次。
    pub fn evaluate(interval: &Interval, subdivision_count: usize) -> ExperimentResult {
        let area = |rule| compute_area(interval.left(), interval.right(), subdivision_count, rule);
        ExperimentResult::new(
            subdivision_count,
            area(QuadratureRule::Midpoint),
            area(QuadratureRule::Simpson)
        )
    }

    pub fn subdivision_count(&self) -> usize {
        self.subdivision_count
    }

    pub fn midpoint_area(&self) -> f64 {
        self.midpoint_area
    }

    pub fn simpson_area(&self) -> f64 {
        self.simpson_area
    }
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.5} {:.5}", self.subdivision_count, self.midpoint_area, self.simpson_area)
    }
}

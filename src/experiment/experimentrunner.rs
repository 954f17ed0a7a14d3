use std::fmt::Write;

use thiserror::Error;
use tracing::debug;

use crate::experiment::experimentplan::ExperimentPlan;
use crate::experiment::experimentresult::ExperimentResult;
use crate::interval::interval::Interval;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("Cannot allocate memory for result strings")]
    Allocation(#[source] std::collections::TryReserveError),
    /// `experiment` 為 1-based。
    #[error("Cannot write result of {experiment} experiment to a string")]
    Format {
        experiment: usize,
        #[source]
        source: std::fmt::Error
    }
}

/// 依 `plan` 的順序執行所有實驗，回傳格式化後的結果列。
pub fn run_experiments(interval: &Interval, plan: &ExperimentPlan) -> Result<Vec<String>, ExperimentError> {
    run_experiments_with(interval, plan, format_result)
}

/// 同 `run_experiments`，但由 `format` 產生每一列（`experiment` 為 1-based）。
///
/// 任一列格式化失敗即捨棄全部結果，不回傳部分結果。
pub fn run_experiments_with<F>(
    interval: &Interval,
    plan: &ExperimentPlan,
    mut format: F
) -> Result<Vec<String>, ExperimentError>
    where F: FnMut(usize, &ExperimentResult) -> Result<String, ExperimentError> {
    let mut lines = Vec::new();
    lines.try_reserve_exact(plan.counts().len()).map_err(ExperimentError::Allocation)?;

    for (index, &count) in plan.counts().iter().enumerate() {
        let result = ExperimentResult::evaluate(interval, count);
        debug!(
            count = result.subdivision_count(),
            midpoint = result.midpoint_area(),
            simpson = result.simpson_area(),
            "experiment finished"
        );
        lines.push(format(index + 1, &result)?);
    }

    Ok(lines)
}

pub fn format_result(experiment: usize, result: &ExperimentResult) -> Result<String, ExperimentError> {
    let mut line = String::new();
    write!(line, "{}", result).map_err(|source| ExperimentError::Format { experiment, source })?;
    Ok(line)
}

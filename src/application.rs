use std::io::{
    BufRead,
    Write
};

use thiserror::Error;

use crate::experiment::experimentplan::ExperimentPlan;
use crate::experiment::experimentrunner::{
    run_experiments,
    ExperimentError
};
use crate::interval::intervalerror::IntervalError;
use crate::interval::intervalreader::IntervalReader;
use crate::report::reporter::{
    report,
    ReportError
};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Interval(#[from] IntervalError),
    #[error(transparent)]
    Experiment(#[from] ExperimentError),
    #[error(transparent)]
    Report(#[from] ReportError)
}

/// 讀取區間、執行 `ExperimentPlan::DEFAULT` 並輸出結果。
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), ApplicationError> {
    run_with_plan(input, output, &ExperimentPlan::DEFAULT)
}

pub fn run_with_plan<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    plan: &ExperimentPlan
) -> Result<(), ApplicationError> {
    let interval = IntervalReader::new(input, &mut *output).read_interval()?;
    let lines = run_experiments(&interval, plan)?;
    report(output, &lines)?;
    Ok(())
}

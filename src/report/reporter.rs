use std::io::Write;

use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ReportError {
    /// `line` 為 1-based。
    #[error("Cannot write {line} result to stdout")]
    Write {
        line: usize,
        #[source]
        source: std::io::Error
    },
    #[error("Cannot write to stdout")]
    Flush(#[source] std::io::Error)
}

/// 每筆結果寫成一行；第一次寫入失敗即中止。
pub fn report<W: Write>(output: &mut W, lines: &[String]) -> Result<(), ReportError> {
    for (index, line) in lines.iter().enumerate() {
        output
            .write_all(line.as_bytes())
            .and_then(|_| output.write_all(b"\n"))
            .map_err(|source| ReportError::Write {
                line: index + 1,
                source
            })?;
        trace!(line = index + 1, "result written");
    }
    output.flush().map_err(ReportError::Flush)
}

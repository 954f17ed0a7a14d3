use std::collections::VecDeque;
use std::io::{
    BufRead,
    Write
};

use tracing::debug;

use crate::interval::interval::Interval;
use crate::interval::intervalerror::{
    Border,
    IntervalError
};

pub const LEFT_BORDER_PROMPT: &str = "Enter interval's left border: ";
pub const RIGHT_BORDER_PROMPT: &str = "Enter interval's right border: ";

/// 於 `output` 顯示提示，並從 `input` 讀取以空白分隔的 token。
///
/// 多個 token 可在同一行，也可分散於多行；
/// 只有在暫存的 token 全部用完後才會再從 `input` 讀取下一行。
pub struct IntervalReader<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>
}

impl<R: BufRead, W: Write> IntervalReader<R, W> {
    pub fn new(input: R, output: W) -> IntervalReader<R, W> {
        IntervalReader {
            input,
            output,
            pending: VecDeque::new()
        }
    }

    /// 左界驗證通過後才顯示右界提示。
    pub fn read_interval(&mut self) -> Result<Interval, IntervalError> {
        let left = self.read_border(Border::Left, LEFT_BORDER_PROMPT)?;
        Interval::check_left(left)?;
        let right = self.read_border(Border::Right, RIGHT_BORDER_PROMPT)?;
        let interval = Interval::new(left, right)?;
        debug!(left, right, "interval accepted");
        Ok(interval)
    }

    fn read_border(&mut self, border: Border, prompt: &str) -> Result<f64, IntervalError> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(IntervalError::Prompt)?;

        let token = self.next_token(border)?;
        token.parse::<f64>().map_err(|source| IntervalError::Parse {
            border,
            token,
            source
        })
    }

    fn next_token(&mut self, border: Border) -> Result<String, IntervalError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self.input
                .read_line(&mut line)
                .map_err(|error| IntervalError::Read {
                    border,
                    source: Some(error)
                })?;
            if read == 0 {
                return Err(IntervalError::Read { border, source: None });
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}


#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use std::io::{
        self,
        Cursor,
        Write
    };

    use super::{
        IntervalReader,
        LEFT_BORDER_PROMPT,
        RIGHT_BORDER_PROMPT
    };
    use crate::interval::intervalerror::{
        Border,
        IntervalError
    };

    fn read(input: &str) -> (Result<crate::interval::interval::Interval, IntervalError>, String) {
        let mut output = Vec::new();
        let mut reader = IntervalReader::new(Cursor::new(input.as_bytes()), &mut output);
        let result = reader.read_interval();
        drop(reader);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_borders_from_separate_lines() {
        let (result, prompts) = read("0\n3.14159265358979\n");
        let interval = result.unwrap();
        assert_eq!(interval.left(), 0.0);
        assert!((interval.right() - PI).abs() < 1e-13);
        assert_eq!(prompts, format!("{LEFT_BORDER_PROMPT}{RIGHT_BORDER_PROMPT}"));
    }

    #[test]
    fn reads_borders_from_one_line() {
        let (result, _) = read("  0.5   1.5  \n");
        let interval = result.unwrap();
        assert_eq!(interval.left(), 0.5);
        assert_eq!(interval.right(), 1.5);
    }

    #[test]
    fn skips_blank_lines() {
        let (result, _) = read("\n\n1\n\n2\n");
        assert_eq!(result.unwrap().right(), 2.0);
    }

    #[test]
    fn non_numeric_left_stops_after_first_prompt() {
        let (result, prompts) = read("abc\n1\n");
        match result.unwrap_err() {
            IntervalError::Parse { border, token, .. } => {
                assert_eq!(border, Border::Left);
                assert_eq!(token, "abc");
            },
            other => panic!("unexpected error: {other}")
        }
        assert_eq!(prompts, LEFT_BORDER_PROMPT);
    }

    #[test]
    fn negative_left_is_rejected_before_right_prompt() {
        let (result, prompts) = read("-1\n2\n");
        let error = result.unwrap_err();
        assert!(error.is_range_error());
        assert_eq!(error.to_string(), "The interval's left border must not be less than 0");
        assert_eq!(prompts, LEFT_BORDER_PROMPT);
    }

    #[test]
    fn right_above_pi_is_rejected() {
        let (result, _) = read("0 4");
        let error = result.unwrap_err();
        assert!(error.is_range_error());
        assert_eq!(error.to_string(), "The interval's right border must not be greater than pi");
    }

    #[test]
    fn reversed_borders_are_rejected() {
        let (result, _) = read("2\n1\n");
        let error = result.unwrap_err();
        assert!(error.is_order_error());
        assert_eq!(error.to_string(), "The interval's right border must not be less than left");
    }

    #[test]
    fn missing_right_border_is_a_read_error() {
        let (result, prompts) = read("1\n");
        let error = result.unwrap_err();
        assert!(error.is_io_error());
        assert_eq!(error.to_string(), "Cannot read interval's right border");
        assert_eq!(prompts, format!("{LEFT_BORDER_PROMPT}{RIGHT_BORDER_PROMPT}"));
    }

    #[test]
    fn partial_numeric_token_is_rejected() {
        let (result, _) = read("1abc 2\n");
        assert!(result.unwrap_err().is_parse_error());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prompt_failure_is_reported() {
        let mut reader = IntervalReader::new(Cursor::new("0 1".as_bytes()), FailingWriter);
        let error = reader.read_interval().unwrap_err();
        assert!(matches!(error, IntervalError::Prompt(_)));
        assert_eq!(error.to_string(), "Cannot write to stdout");
    }
}

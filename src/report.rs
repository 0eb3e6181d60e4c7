use std::io::{self, Write};

use crate::integrate::Estimate;

/// Writes the five result lines.
pub fn write_report<W: Write>(out: &mut W, estimate: &Estimate) -> io::Result<()> {
    writeln!(out, "Steps (n) = {}", estimate.steps)?;
    writeln!(out, "Workers = {}", estimate.workers)?;
    writeln!(out, "Pi approximation = {:.12}", estimate.pi)?;
    writeln!(out, "Absolute error = {:.12}", estimate.abs_error())?;
    writeln!(out, "Elapsed time = {:.12} s", estimate.elapsed.as_secs_f64())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn formats_fixed_twelve_decimals() {
        let estimate = Estimate {
            steps: 4,
            workers: 1,
            pi: 3.1468005183939427,
            elapsed: Duration::from_millis(1500),
        };

        let mut out = Vec::new();
        write_report(&mut out, &estimate).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Steps (n) = 4",
                "Workers = 1",
                "Pi approximation = 3.146800518394",
                "Absolute error = 0.005207864804",
                "Elapsed time = 1.500000000000 s",
            ]
        );
    }
}

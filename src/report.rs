use crate::Format;
use std::io::{self, Write};

/// Width of the banners.
const BANNER_WIDTH: usize = 70;

/// Serialized sizes reported by the two implementations for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Size reported by the baseline implementation, in bytes.
    pub baseline: usize,
    /// Size reported by the candidate implementation, in bytes.
    pub candidate: usize,
}

impl Measurement {
    /// Signed size difference, `candidate - baseline`.
    #[allow(clippy::cast_possible_wrap)] // Sizes are far below 2^63.
    pub fn difference(&self) -> i64 {
        self.candidate as i64 - self.baseline as i64
    }

    /// Relative size difference, in percent of the baseline.
    ///
    /// Defined as exactly zero when the baseline is empty, whatever the
    /// candidate size.
    #[allow(clippy::cast_precision_loss)] // Sizes are far below 2^52.
    pub fn percentage(&self) -> f64 {
        if self.baseline == 0 {
            return 0.0;
        }
        self.candidate as f64 / self.baseline as f64 * 100.0 - 100.0
    }

    /// Returns true if both implementations reported the very same size.
    pub fn is_match(&self) -> bool {
        self.baseline == self.candidate
    }
}

/// Result of one comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Description of the test case.
    pub description: String,
    /// Number of values handed to the implementations.
    pub elements: usize,
    /// Requested serialization format.
    pub format: Format,
    /// The measured sizes.
    pub measurement: Measurement,
}

/// Plain-text report, written as the comparisons go.
pub struct Reporter<W> {
    out: W,
    baseline: String,
    candidate: String,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`, labelling sizes with the given
    /// implementation names.
    pub fn new(out: W, baseline: &str, candidate: &str) -> Self {
        Self {
            out,
            baseline: baseline.to_owned(),
            candidate: candidate.to_owned(),
        }
    }

    /// Writes the title banner and the introduction.
    ///
    /// # Errors
    ///
    /// Fails if the underlying writer does.
    pub fn header(&mut self) -> io::Result<()> {
        let title = format!(
            "Roaring Bitmap {} vs {} - serialized size comparison",
            self.baseline, self.candidate
        );
        self.banner(&title)?;

        writeln!(self.out)?;
        writeln!(
            self.out,
            "This program compares the serialized size of 64-bit Roaring"
        )?;
        writeln!(
            self.out,
            "bitmaps between {} and {}",
            self.baseline, self.candidate
        )
    }

    /// Writes the block describing one comparison.
    ///
    /// # Errors
    ///
    /// Fails if the underlying writer does.
    pub fn outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        let measurement = &outcome.measurement;

        writeln!(self.out)?;
        writeln!(self.out, "[{}]", outcome.description)?;
        writeln!(self.out, "  Elements: {}", outcome.elements)?;
        writeln!(
            self.out,
            "  Portable: {}",
            if outcome.format.is_portable() { "Yes" } else { "No" }
        )?;
        writeln!(
            self.out,
            "  {} size: {} bytes",
            self.baseline, measurement.baseline
        )?;
        writeln!(
            self.out,
            "  {} size: {} bytes",
            self.candidate, measurement.candidate
        )?;
        writeln!(
            self.out,
            "  Difference: {} bytes ({:.2}%)",
            measurement.difference(),
            measurement.percentage()
        )?;
        writeln!(
            self.out,
            "  Match: {}",
            if measurement.is_match() {
                "✓ YES"
            } else {
                "✗ NO"
            }
        )
    }

    /// Writes the closing summary.
    ///
    /// # Errors
    ///
    /// Fails if the underlying writer does.
    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        self.banner("Summary")?;

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Matched: {}/{} cases",
            summary.matched,
            summary.total()
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Comparison completed!")?;
        writeln!(self.out, "If sizes differ, it may indicate:")?;
        writeln!(self.out, "  - Different compression algorithms")?;
        writeln!(self.out, "  - Different container implementations")?;
        writeln!(self.out, "  - Serialization format differences")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Note: Both implementations use the same high-level algorithm but"
        )?;
        writeln!(self.out, "      implementation details may vary.")?;
        self.out.flush()
    }

    /// Consumes the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{rule}")
    }
}

/// Tally of the verdicts over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of cases where both sizes are equal.
    pub matched: usize,
    /// Number of cases where sizes differ.
    pub mismatched: usize,
}

impl Summary {
    /// Accounts for one more outcome.
    pub fn record(&mut self, measurement: &Measurement) {
        if measurement.is_match() {
            self.matched += 1;
        } else {
            self.mismatched += 1;
        }
    }

    /// Total number of cases.
    pub fn total(&self) -> usize {
        self.matched + self.mismatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: &Outcome) -> String {
        let mut reporter = Reporter::new(Vec::new(), "A", "B");
        reporter.outcome(outcome).expect("write to Vec");
        String::from_utf8(reporter.into_inner()).expect("UTF-8 report")
    }

    #[test]
    fn equal_sizes() {
        let measurement = Measurement {
            baseline: 130,
            candidate: 130,
        };
        assert_eq!(measurement.difference(), 0);
        assert_eq!(measurement.percentage(), 0.0);
        assert_eq!(measurement.is_match(), true);
    }

    #[test]
    fn one_byte_apart() {
        let bigger = Measurement {
            baseline: 100,
            candidate: 101,
        };
        assert_eq!(bigger.difference(), 1);
        assert_eq!(bigger.is_match(), false);
        assert_eq!(format!("{:.2}", bigger.percentage()), "1.00");

        let smaller = Measurement {
            baseline: 100,
            candidate: 99,
        };
        assert_eq!(smaller.difference(), -1);
        assert_eq!(smaller.is_match(), false);
        assert_eq!(format!("{:.2}", smaller.percentage()), "-1.00");
    }

    #[test]
    fn zero_baseline() {
        let measurement = Measurement {
            baseline: 0,
            candidate: 16,
        };
        assert_eq!(measurement.difference(), 16);
        assert_eq!(measurement.percentage(), 0.0, "no division by zero");
        assert_eq!(measurement.is_match(), false);
    }

    #[test]
    fn block_layout() {
        let report = render(&Outcome {
            description: "Test 10: Large Dense Range (non-portable)".to_owned(),
            elements: 10_000,
            format: Format::Native,
            measurement: Measurement {
                baseline: 3,
                candidate: 4,
            },
        });

        let expected = "\n\
            [Test 10: Large Dense Range (non-portable)]\n  \
            Elements: 10000\n  \
            Portable: No\n  \
            A size: 3 bytes\n  \
            B size: 4 bytes\n  \
            Difference: 1 bytes (33.33%)\n  \
            Match: ✗ NO\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn matching_block() {
        let report = render(&Outcome {
            description: "Test 1: Empty Bitmap".to_owned(),
            elements: 0,
            format: Format::Portable,
            measurement: Measurement {
                baseline: 8,
                candidate: 8,
            },
        });

        assert!(report.contains("  Portable: Yes\n"));
        assert!(report.contains("  Difference: 0 bytes (0.00%)\n"));
        assert!(report.ends_with("  Match: ✓ YES\n"));
    }

    #[test]
    fn banners() {
        let mut reporter = Reporter::new(Vec::new(), "A", "B");
        reporter.header().expect("write to Vec");
        let mut summary = Summary::default();
        summary.record(&Measurement {
            baseline: 1,
            candidate: 1,
        });
        summary.record(&Measurement {
            baseline: 1,
            candidate: 2,
        });
        reporter.summary(&summary).expect("write to Vec");

        let report =
            String::from_utf8(reporter.into_inner()).expect("UTF-8 report");
        let rule = "=".repeat(70);
        let title = "Roaring Bitmap A vs B - serialized size comparison";
        assert!(report.starts_with(&format!("\n{rule}\n{title}\n{rule}\n")));
        assert!(report.contains(&format!("\n{rule}\nSummary\n{rule}\n")));
        assert!(report.contains("Matched: 1/2 cases\n"));
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.mismatched, 1);
    }
}

use crate::{
    Format, Measurement, Outcome, Reporter, Result, SizeMeter, Stats, Suite,
    Summary,
};
use std::io::Write;

/// Runs the same inputs through two size meters.
pub struct Harness<A, B> {
    /// Reference implementation.
    baseline: A,
    /// Implementation compared against the reference.
    candidate: B,
}

impl<A: SizeMeter, B: SizeMeter> Harness<A, B> {
    /// Initializes a new harness.
    pub fn new(baseline: A, candidate: B) -> Self {
        Self {
            baseline,
            candidate,
        }
    }

    /// The reference implementation.
    pub fn baseline(&self) -> &A {
        &self.baseline
    }

    /// The implementation compared against the reference.
    pub fn candidate(&self) -> &B {
        &self.candidate
    }

    /// Measures `values` with the baseline, then with the candidate.
    ///
    /// Both meters see the very same slice and format.
    pub fn compare(&self, values: &[u64], format: Format) -> Measurement {
        let baseline = self.baseline.measure(values, format);
        let candidate = self.candidate.measure(values, format);
        log::trace!(
            "{} values ({format}): {} = {baseline} B, {} = {candidate} B",
            values.len(),
            self.baseline.name(),
            self.candidate.name()
        );

        Measurement {
            baseline,
            candidate,
        }
    }

    /// Runs every scenario of the suite, in order, reporting as it goes.
    ///
    /// # Errors
    ///
    /// Stops at the first scenario that cannot be generated, or on the first
    /// write error.
    pub fn run<W: Write>(
        &self,
        suite: &Suite,
        reporter: &mut Reporter<W>,
    ) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(suite.len());
        let mut summary = Summary::default();

        reporter.header()?;
        for scenario in suite {
            let values = scenario.regime.generate()?;
            log::debug!("{}: {:?}", scenario.description, Stats::of(&values));

            let format = scenario.format();
            let outcome = Outcome {
                description: scenario.description.clone(),
                elements: values.len(),
                format,
                measurement: self.compare(&values, format),
            };
            reporter.outcome(&outcome)?;
            summary.record(&outcome.measurement);
            outcomes.push(outcome);
        }
        reporter.summary(&summary)?;

        Ok(outcomes)
    }
}

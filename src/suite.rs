use crate::{Format, Regime, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

/// A named test case: which vector, in which format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label printed in the report.
    pub description: String,
    /// How to build the test vector.
    pub regime: Regime,
    /// Whether to request the portable serialization format.
    #[serde(default = "portable_by_default")]
    pub portable: bool,
}

fn portable_by_default() -> bool {
    true
}

impl Scenario {
    /// Creates a new scenario.
    pub fn new(description: &str, regime: Regime, portable: bool) -> Self {
        Self {
            description: description.to_owned(),
            regime,
            portable,
        }
    }

    /// Requested serialization format.
    pub fn format(&self) -> Format {
        Format::from_portable(self.portable)
    }
}

/// Ordered list of scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    /// Scenarios, run in order.
    pub scenarios: Vec<Scenario>,
}

impl Suite {
    /// Loads a suite from its JSON description.
    ///
    /// Every regime is validated, so a loaded suite always generates.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, invalid JSON, or regimes overflowing 64 bits.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let suite = serde_json::from_reader::<_, Self>(reader)?;
        for scenario in &suite.scenarios {
            scenario.regime.validate()?;
        }
        Ok(suite)
    }

    /// Loads a suite from a JSON file.
    ///
    /// # Errors
    ///
    /// See [`Suite::from_reader`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let suite = Self::from_reader(File::open(path)?)?;
        log::info!(
            "loaded {} scenarios from {}",
            suite.len(),
            path.display()
        );
        Ok(suite)
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns true if the suite has no scenario.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Iterates over the scenarios, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }
}

impl Default for Suite {
    /// The twelve built-in scenarios.
    fn default() -> Self {
        let scenarios = vec![
            Scenario::new("Test 1: Empty Bitmap", Regime::Empty, true),
            Scenario::new(
                "Test 2: Single Element",
                Regime::Singleton { value: 42 },
                true,
            ),
            Scenario::new(
                "Test 3: Small Dense Range (0-99)",
                Regime::DenseRange { start: 0, len: 100 },
                true,
            ),
            Scenario::new(
                "Test 4: Large Dense Range (0-9999)",
                Regime::DenseRange {
                    start: 0,
                    len: 10_000,
                },
                true,
            ),
            Scenario::new(
                "Test 5: Sparse Data (gaps of 1000)",
                Regime::Strided {
                    count: 1_000,
                    stride: 1_000,
                    offset: 0,
                },
                true,
            ),
            Scenario::new(
                "Test 6: Very Sparse Data (gaps of 1M)",
                Regime::Strided {
                    count: 100,
                    stride: 1_000_000,
                    offset: 0,
                },
                true,
            ),
            Scenario::new(
                "Test 7: Mixed Pattern (dense + sparse)",
                Regime::Mixed {
                    dense_len: 1_000,
                    sparse_count: 100,
                    stride: 1_000,
                    offset: 100_000,
                },
                true,
            ),
            Scenario::new(
                "Test 8: Large Values (high 32 bits set)",
                Regime::HighBits {
                    bucket: 1,
                    len: 1_000,
                },
                true,
            ),
            Scenario::new(
                "Test 9: Multiple Buckets (5 buckets, 100 each)",
                Regime::MultiBucket {
                    buckets: 5,
                    per_bucket: 100,
                },
                true,
            ),
            Scenario::new(
                "Test 10: Large Dense Range (non-portable)",
                Regime::DenseRange {
                    start: 0,
                    len: 10_000,
                },
                false,
            ),
            Scenario::new(
                "Test 11: Pseudo-random Pattern",
                Regime::PseudoRandom {
                    seed: 1,
                    count: 1_000,
                },
                true,
            ),
            Scenario::new(
                "Test 12: Powers of 2",
                Regime::PowersOfTwo { count: 40 },
                true,
            ),
        ];

        Self { scenarios }
    }
}

impl<'a> IntoIterator for &'a Suite {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn builtin() {
        let suite = Suite::default();
        assert_eq!(suite.len(), 12);

        let sizes = suite
            .iter()
            .map(|scenario| scenario.regime.generate().expect("valid").len())
            .collect::<Vec<_>>();
        assert_eq!(
            sizes,
            vec![
                0, 1, 100, 10_000, 1_000, 100, 1_100, 1_000, 500, 10_000,
                1_000, 40
            ]
        );

        let native = suite
            .iter()
            .filter(|scenario| scenario.format() == Format::Native)
            .map(|scenario| scenario.description.as_str())
            .collect::<Vec<_>>();
        assert_eq!(native, vec!["Test 10: Large Dense Range (non-portable)"]);
    }

    #[test]
    fn same_vector_both_formats() {
        let suite = Suite::default();
        let portable = &suite.scenarios[3];
        let native = &suite.scenarios[9];

        assert_eq!(portable.regime, native.regime);
        assert_eq!(portable.format(), Format::Portable);
        assert_eq!(native.format(), Format::Native);
    }

    #[test]
    fn regenerates_identically() {
        for scenario in &Suite::default() {
            assert_eq!(
                scenario.regime.generate().expect("valid"),
                scenario.regime.generate().expect("valid"),
                "{}",
                scenario.description
            );
        }
    }

    #[test]
    fn json_round_trip() {
        let suite = Suite::default();
        let json = serde_json::to_string(&suite).expect("serializable");
        let parsed = Suite::from_reader(json.as_bytes()).expect("valid suite");
        assert_eq!(parsed, suite);
    }

    #[test]
    fn portable_is_optional() {
        let json = r#"{"scenarios": [
            {
                "description": "tiny",
                "regime": {"kind": "dense_range", "len": 3}
            }
        ]}"#;
        let suite = Suite::from_reader(json.as_bytes()).expect("valid suite");
        assert_eq!(suite.scenarios[0].portable, true);
        let values = suite.scenarios[0].regime.generate().expect("valid");
        assert_eq!(values, [0, 1, 2]);
    }

    #[test]
    fn rejects_overflow() {
        let json = r#"{"scenarios": [
            {
                "description": "huge",
                "regime": {"kind": "powers_of_two", "count": 70}
            }
        ]}"#;
        assert!(matches!(
            Suite::from_reader(json.as_bytes()),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn rejects_unknown_regime() {
        let json = r#"{"scenarios": [
            {"description": "?", "regime": {"kind": "fibonacci"}}
        ]}"#;
        assert!(matches!(
            Suite::from_reader(json.as_bytes()),
            Err(Error::Suite(_))
        ));
    }
}

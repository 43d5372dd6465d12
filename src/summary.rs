use crate::Chips;

/// Descriptive statistics over one gathered series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: Chips,
    pub max: Chips,
    pub mean: f64,
    /// sample standard deviation (n - 1), zero for a single sample
    pub dev: f64,
}

impl Summary {
    pub fn from_series(series: &[Chips]) -> Option<Self> {
        let min = *series.iter().min()?;
        let max = *series.iter().max()?;
        let n = series.len() as f64;
        let mean = series.iter().map(|x| *x as f64).sum::<f64>() / n;
        let dev = match series.len() {
            1 => 0.0,
            _ => (series
                .iter()
                .map(|x| *x as f64 - mean)
                .map(|d| d * d)
                .sum::<f64>()
                / (n - 1.0))
                .sqrt(),
        };
        Some(Self {
            min,
            max,
            mean,
            dev,
        })
    }
    pub fn from_counts(series: &[usize]) -> Option<Self> {
        Self::from_series(&series.iter().map(|x| *x as Chips).collect::<Vec<_>>())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "    min : {}", self.min)?;
        writeln!(f, "    max : {}", self.max)?;
        writeln!(f, "    mean: {:.2}", self.mean)?;
        write!(f, "    dev : {:.2}", self.dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_summary() {
        assert!(Summary::from_series(&[]).is_none());
    }

    #[test]
    fn single_sample() {
        let summary = Summary::from_series(&[7]).unwrap();
        assert!(summary.min == 7 && summary.max == 7);
        assert!(summary.mean == 7.0);
        assert!(summary.dev == 0.0);
    }

    #[test]
    fn sample_standard_deviation() {
        let summary = Summary::from_series(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!(summary.min == 2);
        assert!(summary.max == 9);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        assert!((summary.dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn durations_convert() {
        let summary = Summary::from_counts(&[3, 1, 2]).unwrap();
        assert!(summary.min == 1 && summary.max == 3);
        assert!((summary.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn report_format() {
        let summary = Summary::from_series(&[1, 3]).unwrap();
        let text = summary.to_string();
        assert!(text.contains("mean: 2.00"));
        assert!(text.contains("dev : 1.41"));
    }
}

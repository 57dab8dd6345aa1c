//! Drift measurement between colorlore and the reference
//!
//! Hue is compared on the circle, so 359.9° and 0.1° differ by 0.2°.

/// Statistics of absolute differences over a sample set
#[derive(Debug, Clone)]
pub struct DriftStats {
    /// Mean absolute difference
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// 95th percentile
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DriftStats {
    /// Summarize a list of absolute differences
    pub fn from_diffs(mut diffs: Vec<f64>) -> Self {
        diffs.sort_by(|a, b| a.total_cmp(b));

        let count = diffs.len();
        let mean = if count == 0 {
            0.0
        } else {
            diffs.iter().sum::<f64>() / count as f64
        };
        let max = diffs.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = diffs.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if every difference is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }

    /// One-line report for diagnostic output
    pub fn report(&self, label: &str) -> String {
        format!(
            "{label:<16} n={:<8} mean={:.2e} p95={:.2e} max={:.2e}",
            self.count, self.mean, self.p95, self.max
        )
    }
}

/// Shortest angular distance between two hues in degrees
pub fn hue_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Largest per-channel difference between two 8-bit triples
pub fn channel_drift(a: [u8; 3], b: [u8; 3]) -> u8 {
    a.iter().zip(b).map(|(x, y)| x.abs_diff(y)).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_difference_wraps() {
        assert!((hue_difference(359.9, 0.1) - 0.2).abs() < 1e-9);
        assert!((hue_difference(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert!((hue_difference(10.0, 350.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats() {
        let stats = DriftStats::from_diffs(vec![0.0, 0.5, 1.0, 0.25]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.max, 1.0);
        assert!((stats.mean - 0.4375).abs() < 1e-12);
        assert!(stats.within(1.0));
        assert!(!stats.within(0.9));
    }

    #[test]
    fn test_empty_stats() {
        let stats = DriftStats::from_diffs(Vec::new());
        assert_eq!(stats.count, 0);
        assert!(stats.within(0.0));
    }

    #[test]
    fn test_channel_drift() {
        assert_eq!(channel_drift([10, 20, 30], [11, 18, 30]), 2);
    }
}

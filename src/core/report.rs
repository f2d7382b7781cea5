/*!
 * Report Arithmetic
 * Averages, speedup ratios and improvement percentages shared by the probes
 */

use serde::Serialize;
use std::time::Duration;

/// Arithmetic mean of a set of durations, `None` when empty
pub fn mean(samples: &[Duration]) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    Some(nanos_to_duration(total / samples.len() as u128))
}

/// Ratio `slower / faster` in nanoseconds
///
/// Equal durations (including two zeros) give `1.0`; a zero `faster`
/// duration otherwise yields `f64::INFINITY`.
#[inline]
pub fn speedup(slower: Duration, faster: Duration) -> f64 {
    if slower == faster {
        return 1.0;
    }
    slower.as_nanos() as f64 / faster.as_nanos() as f64
}

/// Percentage of `baseline` saved by `improved`
///
/// Negative when `improved` is slower than `baseline`.
pub fn improvement_pct(baseline: Duration, improved: Duration) -> f64 {
    let baseline_ns = baseline.as_nanos() as f64;
    if baseline_ns == 0.0 {
        return 0.0;
    }
    (baseline_ns - improved.as_nanos() as f64) / baseline_ns * 100.0
}

/// Saturating conversion from a nanosecond count
#[inline]
pub(crate) fn nanos_to_duration(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Head-to-head result of two timed variants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub faster: &'static str,
    pub slower: &'static str,
    pub speedup: f64,
    pub improvement_pct: f64,
}

impl Comparison {
    /// Compare two labelled durations; ties go to `a`
    pub fn between(a: (&'static str, Duration), b: (&'static str, Duration)) -> Self {
        let ((faster, fast), (slower, slow)) = if a.1 <= b.1 { (a, b) } else { (b, a) };
        Self {
            faster,
            slower,
            speedup: speedup(slow, fast),
            improvement_pct: improvement_pct(slow, fast),
        }
    }

    /// `"<faster> is N.NNx faster"`
    pub fn headline(&self) -> String {
        format!("{} is {:.2}x faster", self.faster, self.speedup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(
            mean(&[Duration::from_millis(10), Duration::from_millis(20)]),
            Some(Duration::from_millis(15))
        );
        // Integer division truncates like a duration divided by a count
        assert_eq!(
            mean(&[Duration::from_nanos(1), Duration::from_nanos(2)]),
            Some(Duration::from_nanos(1))
        );
    }

    #[test]
    fn test_speedup_and_improvement() {
        let slow = Duration::from_millis(300);
        let fast = Duration::from_millis(100);
        assert_eq!(speedup(slow, fast), 3.0);
        assert!((improvement_pct(slow, fast) - 66.666_666).abs() < 1e-3);
        assert_eq!(improvement_pct(fast, slow), -200.0);
        assert_eq!(improvement_pct(Duration::ZERO, fast), 0.0);
    }

    #[test]
    fn test_comparison_picks_faster() {
        let cmp = Comparison::between(
            ("Single-thread", Duration::from_millis(400)),
            ("Multi-thread", Duration::from_millis(100)),
        );
        assert_eq!(cmp.faster, "Multi-thread");
        assert_eq!(cmp.slower, "Single-thread");
        assert_eq!(cmp.speedup, 4.0);
        assert_eq!(cmp.improvement_pct, 75.0);
        assert_eq!(cmp.headline(), "Multi-thread is 4.00x faster");
    }

    #[test]
    fn test_comparison_tie_goes_to_first() {
        let d = Duration::from_millis(5);
        let cmp = Comparison::between(("a", d), ("b", d));
        assert_eq!(cmp.faster, "a");
        assert_eq!(cmp.speedup, 1.0);
        assert_eq!(cmp.improvement_pct, 0.0);
    }

    #[test]
    fn test_comparison_of_zero_durations() {
        let cmp = Comparison::between(("a", Duration::ZERO), ("b", Duration::ZERO));
        assert_eq!(cmp.speedup, 1.0);
        assert_eq!(cmp.improvement_pct, 0.0);
        assert_eq!(cmp.headline(), "a is 1.00x faster");
        assert_eq!(speedup(Duration::ZERO, Duration::ZERO), 1.0);
    }
}

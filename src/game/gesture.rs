/// Speed above which a motion counts as a shake
pub const DEFAULT_SHAKE_THRESHOLD: f64 = 800.0;
/// Samples closer together than this are ignored
pub const MIN_SAMPLE_INTERVAL_MS: u64 = 100;

/// Turns a stream of accelerometer samples into discrete shake events
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    threshold: f64,
    last_time_ms: u64,
    last: (f64, f64, f64),
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SHAKE_THRESHOLD)
    }
}

impl ShakeDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_time_ms: 0,
            last: (0.0, 0.0, 0.0),
        }
    }

    /// Feed one sample. Returns true when it completes a shake.
    pub fn on_sample(&mut self, timestamp_ms: u64, x: f64, y: f64, z: f64) -> bool {
        let elapsed = timestamp_ms.saturating_sub(self.last_time_ms);
        if elapsed <= MIN_SAMPLE_INTERVAL_MS {
            return false;
        }

        let (last_x, last_y, last_z) = self.last;
        let delta = ((x - last_x).powi(2) + (y - last_y).powi(2) + (z - last_z).powi(2)).sqrt();
        let speed = delta / elapsed as f64 * 10_000.0;

        self.last_time_ms = timestamp_ms;
        self.last = (x, y, z);

        speed > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_samples_are_ignored() {
        let mut detector = ShakeDetector::default();
        assert!(!detector.on_sample(1_000, 0.0, 0.0, 0.0));
        // 50ms later, a huge jump is still ignored
        assert!(!detector.on_sample(1_050, 50.0, 50.0, 50.0));
    }

    #[test]
    fn test_fast_motion_is_a_shake() {
        let mut detector = ShakeDetector::default();
        assert!(!detector.on_sample(1_000, 0.0, 0.0, 0.0));
        // delta 20 over 200ms => 20 / 200 * 10000 = 1000 > 800
        assert!(detector.on_sample(1_200, 12.0, 16.0, 0.0));
    }

    #[test]
    fn test_slow_motion_is_not_a_shake() {
        let mut detector = ShakeDetector::default();
        detector.on_sample(1_000, 0.0, 0.0, 0.0);
        // delta 5 over 200ms => 250
        assert!(!detector.on_sample(1_200, 3.0, 4.0, 0.0));
    }

    #[test]
    fn test_baseline_moves_with_each_sample() {
        let mut detector = ShakeDetector::new(800.0);
        detector.on_sample(1_000, 0.0, 0.0, 0.0);
        assert!(detector.on_sample(1_200, 12.0, 16.0, 0.0));
        // Same position again: no motion since the last sample
        assert!(!detector.on_sample(1_400, 12.0, 16.0, 0.0));
    }

    #[test]
    fn test_custom_threshold() {
        let mut detector = ShakeDetector::new(100.0);
        detector.on_sample(1_000, 0.0, 0.0, 0.0);
        assert!(detector.on_sample(1_200, 3.0, 4.0, 0.0));
    }
}

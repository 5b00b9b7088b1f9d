use std::time::Duration;

use super::FrameTime;

/// Averages frame rate over a fixed reporting window.
///
/// Feed every `FrameTime`; a report is returned once per `interval` worth of
/// accumulated frame time.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    accumulated: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32().max(f32::EPSILON),
            accumulated: 0.0,
            frames: 0,
        }
    }

    /// Records one frame; returns the average FPS when the window closes.
    pub fn record(&mut self, time: &FrameTime) -> Option<f32> {
        self.record_dt(time.dt)
    }

    fn record_dt(&mut self, dt: f32) -> Option<f32> {
        self.accumulated += dt.max(0.0);
        self.frames += 1;

        if self.accumulated < self.interval {
            return None;
        }

        let fps = self.frames as f32 / self.accumulated;
        self.accumulated = 0.0;
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_interval_elapses() {
        let mut c = FpsCounter::new(Duration::from_secs(1));
        for _ in 0..10 {
            assert_eq!(c.record_dt(0.05), None);
        }
    }

    #[test]
    fn reports_average_rate() {
        let mut c = FpsCounter::new(Duration::from_millis(500));
        let mut report = None;
        for _ in 0..100 {
            if let Some(fps) = c.record_dt(0.0125) {
                report = Some(fps);
                break;
            }
        }
        let fps = report.expect("a report within 100 frames");
        assert!((fps - 80.0).abs() < 0.5, "fps = {fps}");
    }

    #[test]
    fn window_resets_after_report() {
        let mut c = FpsCounter::new(Duration::from_millis(100));
        assert!(c.record_dt(0.2).is_some());
        assert_eq!(c.record_dt(0.05), None);
    }
}

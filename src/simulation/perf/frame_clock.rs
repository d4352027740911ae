/// Frame timing: delta since the previous frame plus a once-per-second FPS
/// figure for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_time_ms: f64,
    frame_count: u32,
    last_fps_update_ms: f64,
    fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `time_ms` (display clock) and return the elapsed ms.
    /// A clock that runs backwards yields zero.
    pub fn tick(&mut self, time_ms: f64) -> f64 {
        let delta = time_ms - self.last_time_ms;
        self.last_time_ms = time_ms;

        self.frame_count += 1;
        let since_update = time_ms - self.last_fps_update_ms;
        if since_update > 1000.0 {
            self.fps = ((self.frame_count as f64 * 1000.0) / since_update).round() as u32;
            self.frame_count = 0;
            self.last_fps_update_ms = time_ms;
        }

        delta.max(0.0)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_and_fps() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(0.0), 0.0);

        let mut t = 0.0;
        for _ in 0..61 {
            t += 1000.0 / 60.0;
            let dt = clock.tick(t);
            assert!((dt - 1000.0 / 60.0).abs() < 1e-6);
        }
        assert!((58..=63).contains(&clock.fps()), "fps = {}", clock.fps());
    }

    #[test]
    fn backwards_time_is_zero_delta() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
    }
}

//! Rate limiting for high-frequency browser events (scroll, resize, drag).

/// Leading-edge throttle: the first call in a window fires, the rest are
/// dropped until `delay_ms` has elapsed since the last accepted call.
#[derive(Debug, Clone)]
pub struct Throttle {
    delay_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, last: None }
    }

    /// Returns true when a call at `now_ms` should run.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.delay_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

/// Single-flight gate for `requestAnimationFrame`: at most one callback
/// queued at a time.
#[derive(Debug, Default, Clone)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Claims the gate. Returns false if a frame is already pending.
    pub fn claim(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn release(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

/// Now, in milliseconds, from the JS clock.
pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(80.0);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(10.0));
        assert!(!throttle.ready(79.9));
        assert!(throttle.ready(80.0));
        assert!(!throttle.ready(100.0));
        assert!(throttle.ready(200.0));
    }

    #[test]
    fn frame_gate_is_single_flight() {
        let mut gate = FrameGate::default();
        assert!(gate.claim());
        assert!(!gate.claim());
        assert!(gate.is_pending());
        gate.release();
        assert!(gate.claim());
    }
}

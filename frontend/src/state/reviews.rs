use serde::Deserialize;

use crate::config;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub rating: u8,
    pub image: String,
    pub text: String,
}

impl Testimonial {
    /// `★★★★☆` for a rating of 4. Ratings above 5 are capped.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Character budget for review text at a given viewport width.
pub fn review_text_budget(viewport_width: f64) -> usize {
    if viewport_width <= 480.0 {
        80
    } else if viewport_width <= 768.0 {
        120
    } else {
        160
    }
}

pub fn truncate_review(text: &str, viewport_width: f64) -> String {
    let budget = review_text_budget(viewport_width);
    if text.chars().count() > budget {
        let mut cut: String = text.chars().take(budget).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

/// Review carousel with a single in-flight transition.
///
/// A transition runs fade-out -> content swap -> fade-in. While one is
/// running, further requests are dropped, not queued.
#[derive(Debug, Clone)]
pub struct ReviewSlider {
    len: usize,
    index: usize,
    pending: Option<usize>,
}

impl ReviewSlider {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            pending: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a transition toward `target`. Returns false when the gate is
    /// closed or the target is out of range.
    pub fn request(&mut self, target: usize) -> bool {
        if self.is_animating() || target >= self.len {
            return false;
        }
        self.pending = Some(target);
        true
    }

    pub fn request_next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.request((self.index + 1) % self.len)
    }

    pub fn request_prev(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.request((self.index + self.len - 1) % self.len)
    }

    /// Swaps in the pending content and reopens the gate. Returns the new
    /// index if a transition was in flight.
    pub fn swap(&mut self) -> Option<usize> {
        let target = self.pending.take()?;
        self.index = target;
        Some(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged right: show the previous review.
    Prev,
    /// Dragged left: show the next review.
    Next,
}

/// Shared touch/mouse drag tracker for swipe navigation.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f64,
    current_x: f64,
    dragging: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        self.current_x = x;
        self.dragging = true;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn track(&mut self, x: f64) {
        if self.dragging {
            self.current_x = x;
        }
    }

    pub fn cancel(&mut self) {
        self.dragging = false;
    }

    /// Ends the gesture. `None` means the drag was not a gesture at all.
    pub fn finish(&mut self) -> Option<Option<Swipe>> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let diff = self.current_x - self.start_x;
        Some(if diff > config::SWIPE_THRESHOLD_PX {
            Some(Swipe::Prev)
        } else if diff < -config::SWIPE_THRESHOLD_PX {
            Some(Swipe::Next)
        } else {
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Testimonial {
        Testimonial {
            name: "Meena".to_string(),
            role: "Brand Manager".to_string(),
            rating,
            image: "./assets/Sethu.png".to_string(),
            text: "Elegant".to_string(),
        }
    }

    #[test]
    fn stars_fill_to_rating() {
        assert_eq!(review(4).stars(), "★★★★☆");
        assert_eq!(review(0).stars(), "☆☆☆☆☆");
        assert_eq!(review(9).stars(), "★★★★★");
    }

    #[test]
    fn truncation_follows_breakpoints() {
        let text = "x".repeat(200);
        assert_eq!(truncate_review(&text, 375.0).chars().count(), 81);
        assert_eq!(truncate_review(&text, 768.0).chars().count(), 121);
        assert_eq!(truncate_review(&text, 1440.0).chars().count(), 161);
        assert!(truncate_review(&text, 1440.0).ends_with('…'));
        assert_eq!(truncate_review("short", 320.0), "short");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "é".repeat(81);
        let cut = truncate_review(&text, 400.0);
        assert_eq!(cut.chars().count(), 81);
    }

    #[test]
    fn two_requests_inside_fade_window_change_content_once() {
        let mut slider = ReviewSlider::new(10);
        assert!(slider.request_next());
        assert!(!slider.request_next());
        assert!(!slider.request(5));
        assert_eq!(slider.swap(), Some(1));
        assert_eq!(slider.swap(), None);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut slider = ReviewSlider::new(3);
        slider.request_prev();
        assert_eq!(slider.swap(), Some(2));
        slider.request_next();
        assert_eq!(slider.swap(), Some(0));
        assert!(!slider.request(3));
    }

    #[test]
    fn swipe_threshold() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.finish(), None);

        swipe.begin(300.0);
        swipe.track(250.0);
        assert_eq!(swipe.finish(), Some(None));

        swipe.begin(300.0);
        swipe.track(200.0);
        assert_eq!(swipe.finish(), Some(Some(Swipe::Next)));

        swipe.begin(100.0);
        swipe.track(181.0);
        assert_eq!(swipe.finish(), Some(Some(Swipe::Prev)));
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(0.0);
        swipe.track(500.0);
        swipe.finish();
        swipe.begin(10.0);
        assert_eq!(swipe.finish(), Some(None));
    }
}

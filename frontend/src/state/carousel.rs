//! Carousel state machines.
//!
//! [`LoopingCarousel`] drives the tools track: the rendered sequence is the
//! real items followed by one clone of each, so a forward wrap can animate
//! into the clone and then jump back to the start with transitions off.
//! [`Deck`] drives the hero project carousel, which rotates its items
//! instead of sliding a track.

use std::collections::VecDeque;

/// Where the track should sit, and whether the move should be animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    pub offset_px: f64,
    pub animate: bool,
}

impl TrackFrame {
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset_px)
    }

    pub fn transition(&self) -> &'static str {
        if self.animate {
            "transform 0.6s ease-in-out"
        } else {
            "none"
        }
    }
}

/// Outcome of one navigation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Animate to the frame.
    Slide(TrackFrame),
    /// Animate into the clone; once the transition ends call
    /// [`LoopingCarousel::settle`] to teleport back to the real item.
    SlideThenSettle(TrackFrame),
    /// Jump to the first clone now, then animate the second frame on the
    /// next animation frame.
    TeleportThenSlide {
        teleport: TrackFrame,
        slide: TrackFrame,
    },
}

#[derive(Debug, Clone)]
pub struct LoopingCarousel {
    real_len: usize,
    index: usize,
    item_width: f64,
    paused: bool,
    pending_wrap: bool,
}

impl LoopingCarousel {
    pub fn new(real_len: usize) -> Self {
        Self {
            real_len,
            index: 0,
            item_width: 0.0,
            paused: false,
            pending_wrap: false,
        }
    }

    pub fn real_len(&self) -> usize {
        self.real_len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Index of the highlighted indicator dot.
    pub fn active_dot(&self) -> usize {
        if self.real_len == 0 {
            0
        } else {
            self.index % self.real_len
        }
    }

    fn frame(&self, animate: bool) -> TrackFrame {
        TrackFrame {
            offset_px: self.index as f64 * self.item_width,
            animate,
        }
    }

    /// Recomputes item width after a resize. The track is repositioned
    /// without animation.
    pub fn set_item_width(&mut self, width: f64) -> TrackFrame {
        self.item_width = width.max(0.0);
        self.frame(false)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Finishes a forward wrap: jumps from the clone back to index 0.
    pub fn settle(&mut self) -> Option<TrackFrame> {
        if !self.pending_wrap {
            return None;
        }
        self.pending_wrap = false;
        self.index = 0;
        Some(self.frame(false))
    }

    pub fn next(&mut self) -> Option<Motion> {
        if self.paused || self.real_len == 0 {
            return None;
        }
        // A wrap still in flight lands first so the index never runs past
        // the clones.
        self.settle();
        self.index += 1;
        let frame = self.frame(true);
        if self.index >= self.real_len {
            self.pending_wrap = true;
            Some(Motion::SlideThenSettle(frame))
        } else {
            Some(Motion::Slide(frame))
        }
    }

    pub fn prev(&mut self) -> Option<Motion> {
        if self.paused || self.real_len == 0 {
            return None;
        }
        self.settle();
        if self.index == 0 {
            self.index = self.real_len;
            let teleport = self.frame(false);
            self.index -= 1;
            let slide = self.frame(true);
            Some(Motion::TeleportThenSlide { teleport, slide })
        } else {
            self.index -= 1;
            Some(Motion::Slide(self.frame(true)))
        }
    }

    /// Jumps to a real item. Clones are not addressable.
    pub fn go_to(&mut self, index: usize) -> Option<TrackFrame> {
        if index >= self.real_len {
            return None;
        }
        self.pending_wrap = false;
        self.index = index;
        Some(self.frame(true))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckDirection {
    Next,
    Prev,
}

impl DeckDirection {
    pub fn class(&self) -> &'static str {
        match self {
            DeckDirection::Next => "next",
            DeckDirection::Prev => "prev",
        }
    }
}

/// Rotating deck: `next` sends the front item to the back, `prev` brings
/// the back item to the front.
#[derive(Debug, Clone)]
pub struct Deck {
    order: VecDeque<usize>,
    direction: Option<DeckDirection>,
}

impl Deck {
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            direction: None,
        }
    }

    pub fn order(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn front(&self) -> Option<usize> {
        self.order.front().copied()
    }

    pub fn direction(&self) -> Option<DeckDirection> {
        self.direction
    }

    pub fn shift(&mut self, direction: DeckDirection) {
        if self.order.is_empty() {
            return;
        }
        match direction {
            DeckDirection::Next => self.order.rotate_left(1),
            DeckDirection::Prev => self.order.rotate_right(1),
        }
        self.direction = Some(direction);
    }

    /// Called once the CSS transition has run.
    pub fn clear_direction(&mut self) {
        self.direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(len: usize) -> LoopingCarousel {
        let mut carousel = LoopingCarousel::new(len);
        carousel.set_item_width(100.0);
        carousel
    }

    #[test]
    fn forward_advances_wrap_modulo_len() {
        for steps in 0..20 {
            let mut carousel = sized(4);
            for _ in 0..steps {
                if let Some(Motion::SlideThenSettle(_)) = carousel.next() {
                    carousel.settle();
                }
            }
            assert_eq!(carousel.index(), steps % 4);
            assert_eq!(carousel.active_dot(), steps % 4);
        }
    }

    #[test]
    fn forward_wrap_slides_into_clone_then_teleports() {
        let mut carousel = sized(3);
        carousel.next();
        carousel.next();
        let motion = carousel.next();
        assert_eq!(
            motion,
            Some(Motion::SlideThenSettle(TrackFrame { offset_px: 300.0, animate: true }))
        );
        // Clone 0 is highlighted as dot 0 while the wrap is in flight.
        assert_eq!(carousel.active_dot(), 0);
        assert_eq!(
            carousel.settle(),
            Some(TrackFrame { offset_px: 0.0, animate: false })
        );
        assert_eq!(carousel.settle(), None);
    }

    #[test]
    fn next_during_pending_wrap_settles_first() {
        let mut carousel = sized(2);
        carousel.next();
        carousel.next();
        assert_eq!(
            carousel.next(),
            Some(Motion::Slide(TrackFrame { offset_px: 100.0, animate: true }))
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn backward_wrap_teleports_to_clone_then_slides() {
        let mut carousel = sized(5);
        assert_eq!(
            carousel.prev(),
            Some(Motion::TeleportThenSlide {
                teleport: TrackFrame { offset_px: 500.0, animate: false },
                slide: TrackFrame { offset_px: 400.0, animate: true },
            })
        );
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn paused_carousel_ignores_navigation() {
        let mut carousel = sized(3);
        carousel.pause();
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.index(), 0);
        carousel.resume();
        assert!(carousel.next().is_some());
    }

    #[test]
    fn go_to_rejects_clone_indices() {
        let mut carousel = sized(3);
        assert_eq!(carousel.go_to(3), None);
        assert_eq!(
            carousel.go_to(2),
            Some(TrackFrame { offset_px: 200.0, animate: true })
        );
    }

    #[test]
    fn resize_repositions_without_animation() {
        let mut carousel = sized(3);
        carousel.next();
        assert_eq!(
            carousel.set_item_width(150.0),
            TrackFrame { offset_px: 150.0, animate: false }
        );
    }

    fn landed(carousel: &mut LoopingCarousel, motion: Option<Motion>) -> f64 {
        match motion {
            Some(Motion::Slide(frame)) => frame.offset_px,
            Some(Motion::SlideThenSettle(frame)) => {
                carousel.settle().map_or(frame.offset_px, |frame| frame.offset_px)
            }
            Some(Motion::TeleportThenSlide { slide, .. }) => slide.offset_px,
            None => panic!("carousel refused to move"),
        }
    }

    #[test]
    fn settled_offset_is_index_times_width() {
        let mut carousel = sized(4);
        let mut width = 100.0;
        for round in 0..12 {
            let offset = match round % 4 {
                0 => {
                    let motion = carousel.next();
                    landed(&mut carousel, motion)
                }
                1 => {
                    let motion = carousel.prev();
                    landed(&mut carousel, motion)
                }
                2 => carousel.go_to(round % 3).map(|frame| frame.offset_px).unwrap_or_default(),
                _ => {
                    width += 25.0;
                    carousel.set_item_width(width).offset_px
                }
            };
            assert!(carousel.index() < carousel.real_len());
            assert_eq!(offset, carousel.index() as f64 * width);
        }
        // Wrapping both ways lands on a real item.
        carousel.go_to(3);
        let motion = carousel.next();
        assert_eq!(landed(&mut carousel, motion), 0.0);
        let motion = carousel.prev();
        assert_eq!(landed(&mut carousel, motion), 3.0 * width);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = LoopingCarousel::new(0);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.go_to(0), None);
    }

    #[test]
    fn deck_rotates_and_tracks_direction() {
        let mut deck = Deck::new(4);
        deck.shift(DeckDirection::Next);
        assert_eq!(deck.order().collect::<Vec<_>>(), vec![1, 2, 3, 0]);
        assert_eq!(deck.direction(), Some(DeckDirection::Next));
        deck.shift(DeckDirection::Prev);
        deck.shift(DeckDirection::Prev);
        assert_eq!(deck.order().collect::<Vec<_>>(), vec![3, 0, 1, 2]);
        assert_eq!(deck.direction().map(|d| d.class()), Some("prev"));
        deck.clear_direction();
        assert_eq!(deck.direction(), None);
    }
}

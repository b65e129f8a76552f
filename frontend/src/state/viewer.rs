//! Zoom/pan image viewer for the project grid.
//!
//! closed -> open(index, zoom = 1) -> zoomed(index, 1 < zoom <= 3, pan) -> open

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 1.2;

// Repeated division by the step drifts above 1.0; anything this close
// counts as fully zoomed out.
const ZOOM_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "other".to_string()
}

/// Project cards grouped by category, keeping each card's position in the
/// full grid so a click can be mapped back to its slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    by_category: BTreeMap<String, Vec<(usize, ProjectEntry)>>,
}

impl Gallery {
    pub fn collect(cards: &[ProjectEntry]) -> Self {
        let mut by_category: BTreeMap<String, Vec<(usize, ProjectEntry)>> = BTreeMap::new();
        for (grid_index, card) in cards.iter().enumerate() {
            by_category
                .entry(card.category.clone())
                .or_default()
                .push((grid_index, card.clone()));
        }
        Self { by_category }
    }

    /// The category collection for a grid card and the card's position in it.
    pub fn locate(&self, category: &str, grid_index: usize) -> Option<(Vec<ProjectEntry>, usize)> {
        let entries = self.by_category.get(category)?;
        let position = entries.iter().position(|(i, _)| *i == grid_index)?;
        Some((entries.iter().map(|(_, e)| e.clone()).collect(), position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

impl Pan {
    pub const ORIGIN: Pan = Pan { x: 0.0, y: 0.0 };
}

/// What a key press asked the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    Close,
    Navigated,
    Panned,
    Zoomed(ZoomChange),
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomChange {
    /// Zoomed in and the image is larger than its frame: flash the pan hint.
    ZoomedIn,
    ZoomedOut,
    Reset,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct ImageViewer {
    items: Vec<ProjectEntry>,
    index: usize,
    open: bool,
    loading: bool,
    zoom: f64,
    pan: Pan,
    committed: Pan,
    drag_anchor: Option<Pan>,
}

impl ImageViewer {
    pub fn new() -> Self {
        Self {
            zoom: MIN_ZOOM,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Pan {
        self.pan
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Counter, info panel and nav buttons are hidden while zoomed.
    pub fn chrome_hidden(&self) -> bool {
        self.is_zoomed()
    }

    pub fn current(&self) -> Option<&ProjectEntry> {
        if !self.open {
            return None;
        }
        self.items.get(self.index)
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.items.len())
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.zoom, self.pan.x, self.pan.y
        )
    }

    /// Opens on `index` of `items`. An empty collection keeps the viewer
    /// closed.
    pub fn open(&mut self, items: Vec<ProjectEntry>, index: usize) -> bool {
        if items.is_empty() {
            return false;
        }
        self.index = index.min(items.len() - 1);
        self.items = items;
        self.open = true;
        self.show_current();
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
        self.reset_zoom();
    }

    /// The `<img>` finished loading.
    pub fn image_loaded(&mut self) {
        self.loading = false;
        self.reset_zoom();
    }

    fn show_current(&mut self) {
        self.loading = true;
        self.reset_zoom();
    }

    pub fn next(&mut self) -> bool {
        if !self.open || !self.has_next() {
            return false;
        }
        self.index += 1;
        self.show_current();
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.open || !self.has_prev() {
            return false;
        }
        self.index -= 1;
        self.show_current();
        true
    }

    pub fn zoom_in(&mut self) -> ZoomChange {
        if self.zoom >= MAX_ZOOM {
            return ZoomChange::Unchanged;
        }
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
        if self.is_zoomed() {
            ZoomChange::ZoomedIn
        } else {
            ZoomChange::Unchanged
        }
    }

    pub fn zoom_out(&mut self) -> ZoomChange {
        if !self.is_zoomed() {
            return ZoomChange::Unchanged;
        }
        let zoom = self.zoom / ZOOM_STEP;
        if zoom <= MIN_ZOOM + ZOOM_EPSILON {
            self.reset_zoom();
        } else {
            self.zoom = zoom;
        }
        ZoomChange::ZoomedOut
    }

    pub fn reset_zoom(&mut self) -> ZoomChange {
        self.zoom = MIN_ZOOM;
        self.reset_pan();
        ZoomChange::Reset
    }

    fn reset_pan(&mut self) {
        self.pan = Pan::ORIGIN;
        self.committed = Pan::ORIGIN;
        self.drag_anchor = None;
    }

    /// Wheel up zooms in, wheel down zooms out.
    pub fn wheel(&mut self, delta_y: f64) -> ZoomChange {
        if delta_y < 0.0 {
            self.zoom_in()
        } else {
            self.zoom_out()
        }
    }

    /// Pointer down at client coordinates. Only starts a drag when zoomed.
    pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.drag_anchor = Some(Pan {
            x: x - self.committed.x,
            y: y - self.committed.y,
        });
        true
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        match self.drag_anchor {
            Some(anchor) if self.is_zoomed() => {
                self.pan = Pan {
                    x: x - anchor.x,
                    y: y - anchor.y,
                };
                true
            }
            _ => false,
        }
    }

    pub fn end_drag(&mut self) -> bool {
        if self.drag_anchor.take().is_none() {
            return false;
        }
        self.committed = self.pan;
        true
    }

    /// Keyboard pan. Committed immediately so a later drag starts from here.
    pub fn nudge(&mut self, dx: f64, dy: f64) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.pan.x += dx;
        self.pan.y += dy;
        self.committed = self.pan;
        true
    }

    pub fn handle_key(&mut self, key: &str, shift: bool) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        let step = config::KEY_PAN_STEP_PX;
        match key {
            "Escape" => {
                self.close();
                KeyOutcome::Close
            }
            "ArrowLeft" if shift => navigated(self.prev()),
            "ArrowRight" if shift => navigated(self.next()),
            "ArrowLeft" => panned(self.nudge(step, 0.0)),
            "ArrowRight" => panned(self.nudge(-step, 0.0)),
            "ArrowUp" => panned(self.nudge(0.0, step)),
            "ArrowDown" => panned(self.nudge(0.0, -step)),
            "+" | "=" => KeyOutcome::Zoomed(self.zoom_in()),
            "-" | "_" => KeyOutcome::Zoomed(self.zoom_out()),
            "0" => KeyOutcome::Zoomed(self.reset_zoom()),
            _ => KeyOutcome::Ignored,
        }
    }
}

fn navigated(moved: bool) -> KeyOutcome {
    if moved {
        KeyOutcome::Navigated
    } else {
        KeyOutcome::Ignored
    }
}

fn panned(moved: bool) -> KeyOutcome {
    if moved {
        KeyOutcome::Panned
    } else {
        KeyOutcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            description: String::new(),
            image: format!("/assets/{title}.webp"),
            category: category.to_string(),
        }
    }

    fn open_viewer(len: usize) -> ImageViewer {
        let items = (0..len).map(|i| entry(&format!("p{i}"), "branding")).collect();
        let mut viewer = ImageViewer::new();
        assert!(viewer.open(items, 0));
        viewer.image_loaded();
        viewer
    }

    fn assert_invariants(viewer: &ImageViewer) {
        assert!(viewer.zoom() >= MIN_ZOOM && viewer.zoom() <= MAX_ZOOM);
        if viewer.zoom() == MIN_ZOOM {
            assert_eq!(viewer.pan(), Pan::ORIGIN);
            assert!(!viewer.chrome_hidden());
        } else {
            assert!(viewer.chrome_hidden());
        }
    }

    #[test]
    fn gallery_filters_by_category() {
        let cards = vec![
            entry("a", "logo"),
            entry("b", "poster"),
            entry("c", "logo"),
        ];
        let gallery = Gallery::collect(&cards);
        let (items, position) = gallery.locate("logo", 2).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(position, 1);
        assert_eq!(items[position].title, "c");
        assert!(gallery.locate("logo", 1).is_none());
    }

    #[test]
    fn empty_collection_stays_closed() {
        let mut viewer = ImageViewer::new();
        assert!(!viewer.open(Vec::new(), 0));
        assert!(!viewer.is_open());
    }

    #[test]
    fn zoom_is_clamped_and_pan_resets_at_one() {
        let mut viewer = open_viewer(1);
        for _ in 0..20 {
            viewer.zoom_in();
            assert_invariants(&viewer);
        }
        assert_eq!(viewer.zoom(), MAX_ZOOM);
        assert_eq!(viewer.zoom_in(), ZoomChange::Unchanged);

        viewer.begin_drag(0.0, 0.0);
        viewer.drag_to(40.0, -10.0);
        viewer.end_drag();
        assert_eq!(viewer.pan(), Pan { x: 40.0, y: -10.0 });

        for _ in 0..20 {
            viewer.zoom_out();
            assert_invariants(&viewer);
        }
        assert_eq!(viewer.zoom(), MIN_ZOOM);
        assert_eq!(viewer.pan(), Pan::ORIGIN);
    }

    #[test]
    fn drag_requires_zoom_and_composes() {
        let mut viewer = open_viewer(1);
        assert!(!viewer.begin_drag(10.0, 10.0));

        viewer.zoom_in();
        assert!(viewer.begin_drag(100.0, 100.0));
        viewer.drag_to(130.0, 90.0);
        viewer.end_drag();
        assert!(viewer.begin_drag(0.0, 0.0));
        viewer.drag_to(5.0, 5.0);
        viewer.end_drag();
        assert_eq!(viewer.pan(), Pan { x: 35.0, y: -5.0 });
        assert!(!viewer.end_drag());
    }

    #[test]
    fn keyboard_pan_commits_translation() {
        let mut viewer = open_viewer(1);
        assert_eq!(viewer.handle_key("ArrowLeft", false), KeyOutcome::Ignored);
        viewer.zoom_in();
        assert_eq!(viewer.handle_key("ArrowLeft", false), KeyOutcome::Panned);
        assert_eq!(viewer.handle_key("ArrowUp", false), KeyOutcome::Panned);
        viewer.begin_drag(0.0, 0.0);
        viewer.drag_to(0.0, 0.0);
        viewer.end_drag();
        assert_eq!(viewer.pan(), Pan { x: 20.0, y: 20.0 });
    }

    #[test]
    fn navigation_resets_zoom_and_stops_at_ends() {
        let mut viewer = open_viewer(3);
        assert!(!viewer.prev());
        viewer.zoom_in();
        viewer.nudge(10.0, 0.0);
        assert_eq!(viewer.handle_key("ArrowRight", true), KeyOutcome::Navigated);
        assert_eq!(viewer.zoom(), MIN_ZOOM);
        assert_eq!(viewer.pan(), Pan::ORIGIN);
        assert!(viewer.is_loading());
        assert_eq!(viewer.counter(), "2 / 3");
        assert!(viewer.next());
        assert!(!viewer.next());
        assert_eq!(viewer.counter(), "3 / 3");
    }

    #[test]
    fn key_bindings() {
        let mut viewer = open_viewer(2);
        assert_eq!(
            viewer.handle_key("=", false),
            KeyOutcome::Zoomed(ZoomChange::ZoomedIn)
        );
        assert_eq!(
            viewer.handle_key("_", false),
            KeyOutcome::Zoomed(ZoomChange::ZoomedOut)
        );
        assert_eq!(viewer.zoom(), MIN_ZOOM);
        viewer.handle_key("+", false);
        viewer.handle_key("+", false);
        assert_eq!(viewer.handle_key("0", false), KeyOutcome::Zoomed(ZoomChange::Reset));
        assert_invariants(&viewer);
        assert_eq!(viewer.handle_key("x", false), KeyOutcome::Ignored);
        assert_eq!(viewer.handle_key("Escape", false), KeyOutcome::Close);
        assert!(!viewer.is_open());
        assert_eq!(viewer.handle_key("+", false), KeyOutcome::Ignored);
    }

    #[test]
    fn wheel_direction_maps_to_zoom() {
        let mut viewer = open_viewer(1);
        assert_eq!(viewer.wheel(-100.0), ZoomChange::ZoomedIn);
        assert_eq!(viewer.wheel(100.0), ZoomChange::ZoomedOut);
        assert_eq!(viewer.wheel(100.0), ZoomChange::Unchanged);
    }
}

//! Viewport-dependent entrance classes and tooltip placement.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    MobileSmall,
    Mobile,
    Tablet,
    Laptop,
}

/// Breakpoints used by the service cards (no small-mobile tier).
pub fn card_device(width: f64) -> Device {
    if width >= 1024.0 {
        Device::Laptop
    } else if width >= 768.0 {
        Device::Tablet
    } else {
        Device::Mobile
    }
}

/// Breakpoints used by the project grid.
pub fn grid_device(width: f64) -> Device {
    if width <= 360.0 {
        Device::MobileSmall
    } else if width <= 768.0 {
        Device::Mobile
    } else if width <= 1024.0 {
        Device::Tablet
    } else {
        Device::Laptop
    }
}

/// Entrance classes for the `idx`-th (zero based) service card.
pub fn service_card_classes(idx: usize, device: Device) -> Vec<&'static str> {
    let n = idx + 1;
    let mut classes = Vec::with_capacity(2);
    match device {
        Device::Laptop | Device::Tablet => {
            classes.push(if matches!(n, 1 | 2 | 5 | 6) { "from-left" } else { "from-right" });
            if device == Device::Laptop && matches!(n, 1 | 4 | 5 | 8) {
                classes.push("delay-1s");
            }
        }
        Device::Mobile | Device::MobileSmall => {
            classes.push(if matches!(n, 1 | 3 | 5 | 7) { "from-left" } else { "from-right" });
        }
    }
    classes
}

/// Entrance class for the `idx`-th project card.
pub fn project_card_class(idx: usize, device: Device) -> &'static str {
    match device {
        Device::Laptop => match idx % 3 {
            0 => "from-left",
            1 => "from-bottom",
            _ => "from-right",
        },
        _ if idx % 2 == 0 => "from-left",
        _ => "from-right",
    }
}

/// A project card is shown once its top crosses 85% of the viewport and
/// until it scrolls off the top.
pub fn card_in_view(rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height * 0.85 && rect_bottom > 0.0
}

pub const TOOLTIP_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    pub arrow_left: f64,
}

/// Centers the tooltip above the item, clamped inside the viewport, with
/// the arrow still pointing at the item's center.
pub fn place_tooltip(
    item_left: f64,
    item_top: f64,
    item_width: f64,
    tooltip_width: f64,
    viewport_width: f64,
) -> TooltipPlacement {
    let center = item_left + item_width / 2.0;
    let half = tooltip_width / 2.0;
    let mut left = center;
    if left - half < TOOLTIP_MARGIN {
        left = half + TOOLTIP_MARGIN;
    }
    if left + half > viewport_width - TOOLTIP_MARGIN {
        left = viewport_width - half - TOOLTIP_MARGIN;
    }
    TooltipPlacement {
        left,
        top: item_top - 12.0,
        arrow_left: center - (left - half),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(card_device(1024.0), Device::Laptop);
        assert_eq!(card_device(768.0), Device::Tablet);
        assert_eq!(card_device(767.0), Device::Mobile);
        assert_eq!(grid_device(360.0), Device::MobileSmall);
        assert_eq!(grid_device(768.0), Device::Mobile);
        assert_eq!(grid_device(1024.0), Device::Tablet);
        assert_eq!(grid_device(1025.0), Device::Laptop);
    }

    #[test]
    fn service_cards_on_laptop() {
        assert_eq!(service_card_classes(0, Device::Laptop), vec!["from-left", "delay-1s"]);
        assert_eq!(service_card_classes(2, Device::Laptop), vec!["from-right"]);
        assert_eq!(service_card_classes(3, Device::Laptop), vec!["from-right", "delay-1s"]);
        assert_eq!(service_card_classes(0, Device::Tablet), vec!["from-left"]);
        assert_eq!(service_card_classes(1, Device::Mobile), vec!["from-right"]);
        assert_eq!(service_card_classes(2, Device::Mobile), vec!["from-left"]);
    }

    #[test]
    fn project_stagger() {
        let laptop: Vec<_> = (0..4).map(|i| project_card_class(i, Device::Laptop)).collect();
        assert_eq!(laptop, vec!["from-left", "from-bottom", "from-right", "from-left"]);
        assert_eq!(project_card_class(1, Device::Tablet), "from-right");
        assert_eq!(project_card_class(2, Device::MobileSmall), "from-left");
    }

    #[test]
    fn visibility_window() {
        assert!(card_in_view(500.0, 800.0, 1000.0));
        assert!(!card_in_view(850.0, 1100.0, 1000.0));
        assert!(!card_in_view(-400.0, 0.0, 1000.0));
    }

    #[test]
    fn tooltip_stays_inside_viewport() {
        let centered = place_tooltip(400.0, 300.0, 100.0, 120.0, 1280.0);
        assert_eq!(centered.left, 450.0);
        assert_eq!(centered.top, 288.0);
        assert_eq!(centered.arrow_left, 60.0);

        let left_edge = place_tooltip(0.0, 300.0, 40.0, 200.0, 1280.0);
        assert_eq!(left_edge.left, 110.0);
        assert_eq!(left_edge.arrow_left, 10.0);

        let right_edge = place_tooltip(1260.0, 300.0, 20.0, 200.0, 1280.0);
        assert_eq!(right_edge.left, 1170.0);
        assert_eq!(right_edge.arrow_left, 200.0);
    }
}

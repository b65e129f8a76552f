
#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    ""  // Same origin in production
}

/// Relative location of the navbar partial injected at startup.
pub fn navbar_partial_url() -> String {
    format!("{}/navbar.html", get_asset_base())
}

// Tools carousel
pub const TOOLS_AUTO_MS: u32 = 3_000;
pub const TOOLS_TRANSITION_MS: u32 = 600;
pub const TOOLS_RESIZE_THROTTLE_MS: f64 = 150.0;

// Project deck on the home page
pub const DECK_TRANSITION_MS: u32 = 1_200;
pub const DECK_AUTO_MS: u32 = 10_000;

// Reviews
pub const REVIEW_AUTO_MS: u32 = 6_000;
pub const REVIEW_FADE_MS: u32 = 350;
pub const REVIEW_IMAGE_REVEAL_MS: u32 = 40;
pub const SWIPE_THRESHOLD_PX: f64 = 80.0;

// Rotating hero text
pub const ROTATING_TEXT_MS: u32 = 3_000;

// Image viewer
pub const PAN_HINT_MS: u32 = 2_000;
pub const KEY_PAN_STEP_PX: f64 = 20.0;

// Contact form
pub const TOAST_MS: u32 = 3_000;
pub const TOAST_FADE_MS: u32 = 300;
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const STEP_SWAP_MS: u32 = 50;
pub const FORM_SHAKE_MS: u32 = 500;
pub const UPLOAD_SHAKE_MS: u32 = 400;
pub const MESSAGE_HIGHLIGHT_MS: u32 = 2_000;

// Tooltip / highlight
pub const TOOLTIP_TOUCH_HIDE_MS: u32 = 5_000;
pub const TOOLTIP_RESUME_MS: u32 = 1_000;
pub const TOOL_HIGHLIGHT_MS: u32 = 5_000;

// Scroll handling
pub const SCROLL_THROTTLE_MS: f64 = 60.0;
pub const RESIZE_THROTTLE_MS: f64 = 200.0;
pub const BLUR_RESTORE_MS: u32 = 150;
pub const SCROLLED_NAV_PX: f64 = 50.0;
pub const ACTIVE_LINK_OFFSET_PX: f64 = 120.0;
pub const CURSOR_FOLLOW_MS: u32 = 100;

// Breakpoints
pub const MOBILE_NAV_MAX: f64 = 768.0;
pub const TOUCH_MAX: f64 = 1_024.0;

//! Responsive layout state for the sidebar shell.
//!
//! Layout is an explicit function of three inputs instead of media queries:
//! - the `side_bar_open` flag from settings
//! - [`ViewportMode`], chosen by comparing the viewport width with
//!   [`ShellConfig::narrow_breakpoint_px`] (900px by default, narrow is inclusive)
//! - [`OutputTarget`], which switches to [`OutputTarget::Print`] while the
//!   browser prepares a printout
//!
//! [`SidebarLayout::derive`] is pure; the hooks below only feed it signals.
//!
//! Signal updates reach the DOM asynchronously, so `window.print()` from a
//! click handler lays out the page before [`OutputTarget::Print`] is applied.
//! The `@media print` block in `static/sidebar.css` is what hides the drawer
//! on paper; [`OutputTarget`] keeps the derived state consistent with it.

use contracts::shared::shell_config::ShellConfig;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    /// Panel pushes the content area to the right.
    Wide,
    /// Panel floats above the content behind a scrim.
    Narrow,
}

impl ViewportMode {
    pub fn from_width(width_px: f64, config: &ShellConfig) -> Self {
        if width_px <= config.narrow_breakpoint_px {
            ViewportMode::Narrow
        } else {
            ViewportMode::Wide
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Screen,
    Print,
}

/// Everything the view needs to place the shell regions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarLayout {
    pub open: bool,
    pub panel_visible: bool,
    /// Horizontal translation of the panel; `0` when open, minus its width when closed.
    pub panel_offset_px: f64,
    pub panel_width_px: f64,
    pub panel_rounded: bool,
    pub overlay_visible: bool,
    pub content_margin_px: f64,
    pub opener_icon_visible: bool,
}

impl SidebarLayout {
    pub fn derive(
        open: bool,
        mode: ViewportMode,
        target: OutputTarget,
        config: &ShellConfig,
    ) -> Self {
        let width = config.sidebar_width_px;
        let printing = target == OutputTarget::Print;

        let content_margin_px = match (mode, printing) {
            (ViewportMode::Wide, false) if open => width,
            _ => 0.0,
        };

        Self {
            open,
            panel_visible: !printing,
            panel_offset_px: if open { 0.0 } else { -width },
            panel_width_px: width,
            panel_rounded: mode == ViewportMode::Wide,
            overlay_visible: open && mode == ViewportMode::Narrow && !printing,
            content_margin_px,
            opener_icon_visible: !printing,
        }
    }
}

fn current_viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
}

/// Viewport mode, recomputed on every window resize.
pub fn use_viewport_mode(config: ShellConfig) -> Signal<ViewportMode> {
    let mode_for = move |width: Option<f64>| match width {
        Some(width) => ViewportMode::from_width(width, &config),
        None => ViewportMode::Wide,
    };
    let mode = RwSignal::new(mode_for(current_viewport_width()));

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        let next = mode_for(current_viewport_width());
        if mode.get_untracked() != next {
            log::debug!("viewport mode changed to {:?}", next);
            mode.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    mode.into()
}

/// Output target, switched to print between `beforeprint` and `afterprint`.
pub fn use_output_target() -> Signal<OutputTarget> {
    let target = RwSignal::new(OutputTarget::Screen);

    let before = window_event_listener(leptos::ev::beforeprint, move |_| {
        target.set(OutputTarget::Print);
    });
    let after = window_event_listener(leptos::ev::afterprint, move |_| {
        target.set(OutputTarget::Screen);
    });
    on_cleanup(move || {
        before.remove();
        after.remove();
    });

    target.into()
}

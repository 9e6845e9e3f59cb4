//! Viewport scroll observer
//!
//! Samples `window.scrollY` on every scroll event and feeds it to the shell. The handler
//! never calls `preventDefault`, so scrolling is never blocked. The listener is removed when
//! the owning component is torn down.

use leptos::ev;
use leptos::prelude::*;

use crate::state::shell::ShellContext;

/// Register the scroll listener for the lifetime of the current reactive owner.
pub fn use_scroll_observer(shell: ShellContext) {
    // The page can be restored mid-scroll on reload, so sample once up front.
    shell.scrolled_to(current_offset());

    let handle = window_event_listener(ev::scroll, move |_| {
        shell.scrolled_to(current_offset());
    });

    on_cleanup(move || {
        log::debug!("Removing scroll listener");
        handle.remove();
    });
}

/// Current vertical scroll offset, 0 when it cannot be read.
fn current_offset() -> f64 {
    match web_sys::window().map(|w| w.scroll_y()) {
        Some(Ok(offset)) => offset,
        Some(Err(e)) => {
            log::debug!("scrollY unavailable: {:?}", e);
            0.0
        }
        None => 0.0,
    }
}

/// Smoothly scroll the viewport back to the top.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

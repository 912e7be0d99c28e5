//! Small DOM helpers.

/// Smooth-scroll the page to the top, so a form populated from a table
/// row becomes visible. No-op outside a browser.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

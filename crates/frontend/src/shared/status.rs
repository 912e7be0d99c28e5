//! Per-view status banners.
//!
//! Two independent slots, error and success, each holding at most one
//! message. Every operation clears both on start; neither auto-dismisses.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct StatusChannel {
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl StatusChannel {
    pub fn new() -> Self {
        Self {
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn clear(&self) {
        self.error.set(None);
        self.success.set(None);
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
        self.success.set(None);
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.success.set(Some(message.into()));
        self.error.set(None);
    }
}

impl Default for StatusChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Error and success banners, rendered above the form when present.
#[component]
pub fn StatusBanners(status: StatusChannel) -> impl IntoView {
    view! {
        {move || status.error.get().map(|e| view! { <div class="error">{e}</div> })}
        {move || status.success.get().map(|s| view! { <div class="success">{s}</div> })}
    }
}

//! URL construction for the REST backend.

/// Base URL for API requests, derived from the current window location.
/// The backend listens on port 5000. Empty string outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Full API URL for a path like `/api/companies/123`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

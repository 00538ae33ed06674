//! Thin localStorage bridge over `document::eval`.
//!
//! Keys and values are embedded as JSON string literals so quotes in a
//! stored record cannot break out of the script.

use dioxus::prelude::*;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn read_script(key: &str) -> String {
    format!(
        "try {{ return window.localStorage.getItem({}); }} catch (e) {{ return null; }}",
        js_string(key)
    )
}

fn write_script(key: &str, value: &str) -> String {
    format!(
        "try {{ window.localStorage.setItem({}, {}); }} catch (e) {{}}",
        js_string(key),
        js_string(value)
    )
}

fn remove_script(key: &str) -> String {
    format!(
        "try {{ window.localStorage.removeItem({}); }} catch (e) {{}}",
        js_string(key)
    )
}

/// Read one key. Storage being unavailable reads as a missing key.
pub async fn read(key: &str) -> Option<String> {
    match document::eval(&read_script(key)).join::<Option<String>>().await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = ?err, "storage read failed");
            None
        }
    }
}

pub fn write(key: &str, value: &str) {
    document::eval(&write_script(key, value));
}

pub fn remove(key: &str) {
    document::eval(&remove_script(key));
}

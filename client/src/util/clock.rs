//! Wall-clock access for message timestamps.

/// Milliseconds since the Unix epoch in the browser, `0.0` elsewhere.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

//! Placeholder predictor behind the home page widget. It performs no analysis;
//! it acknowledges the submitted text until a model is wired in.

/// Canned acknowledgement for `input`, or `None` when there is nothing to echo.
#[must_use]
pub fn predict(input: &str) -> Option<String> {
    // blank input yields nothing rather than `Predicted trend for ""`
    if input.trim().is_empty() {
        return None;
    }
    Some(format!("Predicted trend for \"{input}\""))
}

//! Build-time configuration with an optional runtime override read from
//! `window.FINTRACK_CONFIG`, so a static deployment can be tuned without a
//! rebuild. Values are public; do not store secrets here.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_name: String,
    /// Replaces both simulated authentication delays when set.
    pub auth_latency: Option<Duration>,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let app_name = option_env!("FINTRACK_APP_NAME").unwrap_or("FinTrack");
        let auth_latency = option_env!("FINTRACK_AUTH_LATENCY_MS").and_then(parse_latency);

        let mut config = Self {
            app_name: app_name.to_string(),
            auth_latency,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    app_name: Option<String>,
    auth_latency: Option<Duration>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.app_name {
        config.app_name = value;
    }
    if let Some(value) = runtime.auth_latency {
        config.auth_latency = Some(value);
    }
}

fn parse_latency(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_millis)
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("FINTRACK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        app_name: read_runtime_value(&object, "app_name"),
        auth_latency: read_runtime_value(&object, "auth_latency_ms")
            .as_deref()
            .and_then(parse_latency),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

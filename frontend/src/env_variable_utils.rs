use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_API_BASE_URL: &str = "https://huy-7xbr.onrender.com";
pub const DEFAULT_APP_NAME: &str = "Anh Em Tam Đa";

lazy_static! {
    pub static ref API_BASE_URL: String = get_api_base_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Populated by env.js before the wasm bundle starts
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string().filter(|v| !v.trim().is_empty())
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_base_url() -> String {
    get_env_var("VIDEO_API_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

//! Reading and rewriting the page URL: the share token lives in a query
//! parameter, the active map in the path. Updates use `replaceState` so the
//! back button is not flooded with one entry per click.

use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn query_param(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

/// Set `key=value` in the query string, keeping other parameters and the hash.
pub fn replace_query_param(key: &str, value: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return;
    };
    params.set(key, value);
    let query: String = params.to_string().into();
    let new_url = build_url(&path, &query, &hash);
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
    }
}

/// Switch to `path`, dropping the query (share tokens are per page).
pub fn replace_path(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

pub fn build_url(path: &str, query: &str, hash: &str) -> String {
    let query = query.trim_start_matches('?');
    let mut url = path.to_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url.push_str(hash);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_with_optional_parts() {
        assert_eq!(build_url("/sigungu", "s=abc", ""), "/sigungu?s=abc");
        assert_eq!(build_url("/sigungu", "?s=abc&x=1", "#top"), "/sigungu?s=abc&x=1#top");
        assert_eq!(build_url("/governor", "", ""), "/governor");
    }
}

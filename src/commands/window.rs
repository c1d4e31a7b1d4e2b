//! Window Commands
//!
//! Page location access and new-tab opening.

use gloo_timers::future::TimeoutFuture;

pub(crate) fn browser_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window".to_string())
}

/// Origin + path of the current page, without query or fragment
pub fn page_base_url() -> Result<String, String> {
    let location = browser_window()?.location();
    let origin = location.origin().map_err(|e| format!("{:?}", e))?;
    let path = location.pathname().map_err(|e| format!("{:?}", e))?;
    Ok(format!("{}{}", origin, path))
}

/// Raw `location.search` of the current page
pub fn current_search() -> Result<String, String> {
    browser_window()?
        .location()
        .search()
        .map_err(|e| format!("{:?}", e))
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    browser_window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Open each `(delay_ms, url)` once its delay has elapsed. Delays are
/// measured from the start and must be non-decreasing.
pub async fn open_staggered(plan: Vec<(u32, String)>) {
    let mut elapsed = 0;
    for (delay, url) in plan {
        if delay > elapsed {
            TimeoutFuture::new(delay - elapsed).await;
            elapsed = delay;
        }
        if let Err(e) = open_in_new_tab(&url) {
            log::warn!("could not open {}: {}", url, e);
        }
    }
}

use crate::constants::SESSION_VISITED_KEY;
use motion_core::SessionStore;
use web_sys as web;

/// Visited flag kept in `sessionStorage`: survives reloads, cleared with the tab.
pub struct BrowserSession {
    storage: Option<web::Storage>,
}

impl BrowserSession {
    pub fn new(window: &web::Window) -> Self {
        let storage = window.session_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[session] sessionStorage unavailable; loader plays on every load");
        }
        Self { storage }
    }
}

impl SessionStore for BrowserSession {
    fn visited(&self) -> bool {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(SESSION_VISITED_KEY).ok().flatten())
            .is_some_and(|v| v == "1")
    }

    fn mark_visited(&mut self) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(SESSION_VISITED_KEY, "1") {
                log::warn!("[session] could not persist visited flag: {:?}", e);
            }
        }
    }
}

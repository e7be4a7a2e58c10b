//! Cross-cutting UI state: loader, mobile menu and cursor mode.
//!
//! Scroll lock is never stored. It is `loader_active || menu_open`, read
//! through `scroll_locked()` after every transition.

/// Session-scoped persistence for the "already saw the loader" flag.
pub trait SessionStore {
    fn visited(&self) -> bool;
    fn mark_visited(&mut self);
}

/// In-memory store; the flag lives as long as the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemorySession {
    visited: bool,
}

impl MemorySession {
    pub fn visited_already() -> Self {
        Self { visited: true }
    }
}

impl SessionStore for MemorySession {
    fn visited(&self) -> bool {
        self.visited
    }

    fn mark_visited(&mut self) {
        self.visited = true;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Default,
    HoverActive,
    Magnetic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrchestratorState {
    pub loader_active: bool,
    pub menu_open: bool,
    pub cursor_mode: CursorMode,
    pub main_started: bool,
}

impl OrchestratorState {
    #[inline]
    pub fn scroll_locked(&self) -> bool {
        self.loader_active || self.menu_open
    }
}

/// What the host should do right after boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPlan {
    RunLoader,
    SkipLoader,
}

/// Effects the scheduler carries out after a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Start the hero animations; true at most once per page.
    pub start_main: bool,
    /// Hide the loader element.
    pub hide_loader: bool,
}

#[derive(Debug, Default)]
pub struct Orchestrator {
    state: OrchestratorState,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &OrchestratorState {
        &self.state
    }

    #[inline]
    pub fn scroll_locked(&self) -> bool {
        self.state.scroll_locked()
    }

    /// Decide between the loader sequence and showing the page right away.
    pub fn boot(&mut self, session: &dyn SessionStore, skip_when_visited: bool) -> (BootPlan, Transition) {
        if skip_when_visited && session.visited() {
            log::info!("[loader] session already visited; skipping loader");
            self.state.loader_active = false;
            let mut t = self.start_main();
            t.hide_loader = true;
            (BootPlan::SkipLoader, t)
        } else {
            self.start_loader();
            (BootPlan::RunLoader, Transition::default())
        }
    }

    pub fn start_loader(&mut self) {
        self.state.loader_active = true;
    }

    /// Finish the loader. The session flag is set on the first completion only.
    pub fn complete_loader(&mut self, session: &mut dyn SessionStore) -> Transition {
        let was_active = self.state.loader_active;
        self.state.loader_active = false;
        if was_active && !session.visited() {
            session.mark_visited();
        }
        let mut t = self.start_main();
        t.hide_loader = was_active;
        t
    }

    pub fn open_menu(&mut self) {
        self.state.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        log::debug!("[menu] open={}", self.state.menu_open);
    }

    pub fn hover_enter(&mut self, magnetic: bool) {
        self.state.cursor_mode = if magnetic {
            CursorMode::Magnetic
        } else {
            CursorMode::HoverActive
        };
    }

    pub fn hover_leave(&mut self) {
        self.state.cursor_mode = CursorMode::Default;
    }

    fn start_main(&mut self) -> Transition {
        let start_main = !self.state.main_started;
        self.state.main_started = true;
        Transition {
            start_main,
            hide_loader: false,
        }
    }
}

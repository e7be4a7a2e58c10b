//! Per-frame driver.
//!
//! `MotionEngine::frame` is the only place the engine advances. Order inside
//! a frame is fixed: queued input, scroll, tweens, cursor, triggers. Triggers
//! therefore always see this frame's scroll offset.

use crate::config::MotionConfig;
use crate::constants::ANCHOR_SCROLL_DURATION_SEC;
use crate::cursor::{CursorFollower, CursorFollowerState};
use crate::easing::Easing;
use crate::event::{Cue, InputEvent};
use crate::form::FormFlow;
use crate::layout::{ElementId, Layout, Rect};
use crate::orchestrator::{BootPlan, CursorMode, Orchestrator, OrchestratorState, SessionStore, Transition};
use crate::scroll::{ScrollState, ScrollVirtualizer};
use crate::stage::Stage;
use crate::trigger::{PinState, Trigger, TriggerEvent, TriggerId, TriggerRegistry};
use crate::tween::{Property, PropertyStore, Tween, TweenId, TweenSet};
use glam::Vec2;
use std::collections::VecDeque;
use std::time::Duration;

/// Everything the host needs to paint one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    /// Animation step actually applied, after clamping.
    pub dt: f32,
    pub scroll: ScrollState,
    /// Property values changed this frame.
    pub properties: Vec<(ElementId, Property, f32)>,
    pub cursor: CursorFollowerState,
    pub cursor_mode: CursorMode,
    pub pins: Vec<PinState>,
    pub header_scrolled: bool,
    pub menu_open: bool,
    pub hide_loader: bool,
    /// The host should send the form now.
    pub submit_requested: bool,
    /// New submit-button label, when it changed this frame.
    pub form_label: Option<String>,
    pub triggers: Vec<TriggerEvent>,
}

pub struct MotionEngine {
    config: MotionConfig,
    stage: Stage,
    session: Box<dyn SessionStore>,
    queue: VecDeque<InputEvent>,
    scroll: ScrollVirtualizer,
    tweens: TweenSet,
    store: PropertyStore,
    cursor: CursorFollower,
    triggers: TriggerRegistry,
    orchestrator: Orchestrator,
    form: FormFlow,
    pending_hide_loader: bool,
    pending_submit: bool,
    cues: Vec<Cue>,
}

impl MotionEngine {
    pub fn new(config: MotionConfig, stage: Stage, layout: Layout, session: Box<dyn SessionStore>) -> Self {
        let mut scroll = ScrollVirtualizer::new(config.scroll.clone());
        scroll.set_bounds(layout.content_height, layout.viewport.y);
        let mut triggers = TriggerRegistry::new(layout);
        for trigger in stage.scroll_triggers() {
            triggers.register(trigger);
        }
        let mut store = PropertyStore::default();
        for (element, property, value) in stage.initial_values() {
            store.set(element, property, value);
        }
        Self {
            cursor: CursorFollower::new(config.cursor.clone()),
            form: FormFlow::new(config.form.clone()),
            config,
            stage,
            session,
            queue: VecDeque::new(),
            scroll,
            tweens: TweenSet::new(),
            store,
            triggers,
            orchestrator: Orchestrator::new(),
            pending_hide_loader: false,
            pending_submit: false,
            cues: Vec::new(),
        }
    }

    /// Run the loader or, for a returning visitor, show the page at once.
    pub fn boot(&mut self) -> BootPlan {
        let (plan, transition) = self
            .orchestrator
            .boot(self.session.as_ref(), self.config.skip_loader_when_visited);
        match plan {
            BootPlan::RunLoader => {
                let timeline = self.stage.loader_timeline();
                if timeline.duration() <= 0.0 {
                    log::warn!("[loader] no loader parts on the page; completing immediately");
                    self.cues.push(Cue::LoaderFinished);
                    self.route_cues();
                } else {
                    log::info!("[loader] running for {:.2}s", timeline.duration());
                    self.tweens.start_all(timeline.on_complete(Cue::LoaderFinished));
                }
            }
            BootPlan::SkipLoader => self.apply_transition(transition),
        }
        self.sync_scroll_lock();
        plan
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn start_tween(&mut self, tween: Tween) -> TweenId {
        self.tweens.start(tween)
    }

    pub fn register_trigger(&mut self, trigger: Trigger) -> TriggerId {
        self.triggers.register(trigger)
    }

    #[inline]
    pub fn scroll(&self) -> &ScrollState {
        self.scroll.state()
    }

    #[inline]
    pub fn orchestrator(&self) -> &OrchestratorState {
        self.orchestrator.state()
    }

    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    pub fn tweens(&self) -> &TweenSet {
        &self.tweens
    }

    pub fn cursor(&self) -> &CursorFollowerState {
        self.cursor.state()
    }

    pub fn form(&self) -> &FormFlow {
        &self.form
    }

    pub fn value(&self, element: ElementId, property: Property) -> f32 {
        self.store.get(element, property)
    }

    /// Advance one display frame by the host-measured `elapsed` time.
    pub fn frame(&mut self, elapsed: Duration) -> FrameReport {
        let wall = elapsed.as_secs_f32();
        let dt = wall.min(self.config.max_frame_dt_sec);
        if wall > dt {
            log::trace!("[frame] dt {:.3}s clamped to {:.3}s", wall, dt);
        }

        // Wall-clock timers run before input so a result arriving now starts its hold at zero.
        let form_phase = std::mem::discriminant(&self.form.status());
        let reverted = self.form.tick(wall);
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event);
        }

        // (1) scroll
        let offset = self.scroll.tick(dt);

        // (2) tweens; completion cues act before the cursor and triggers run
        self.tweens.advance(dt, &mut self.store, &mut self.cues);
        self.route_cues();

        // (3) cursor
        self.cursor.tick(dt);

        // (4) triggers, against this frame's offset
        let trigger_events = self
            .triggers
            .evaluate(offset, dt, &mut self.store, &mut self.cues);
        self.route_cues();

        let form_label = (reverted || form_phase != std::mem::discriminant(&self.form.status()))
            .then(|| self.form.label().to_string());

        let state = *self.orchestrator.state();
        FrameReport {
            dt,
            scroll: *self.scroll.state(),
            properties: self.store.drain_dirty(),
            cursor: *self.cursor.state(),
            cursor_mode: state.cursor_mode,
            pins: self.triggers.pins(offset),
            header_scrolled: offset > self.config.header_scrolled_offset,
            menu_open: state.menu_open,
            hide_loader: std::mem::take(&mut self.pending_hide_loader),
            submit_requested: std::mem::take(&mut self.pending_submit),
            form_label,
            triggers: trigger_events,
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove(pos) => self.cursor.on_pointer_move(pos),
            InputEvent::Scroll { source, delta } => self.scroll.feed_input(source, delta),
            InputEvent::Resize(layout) => {
                self.scroll
                    .set_bounds(layout.content_height, layout.viewport.y);
                self.triggers.invalidate(layout);
            }
            InputEvent::HoverEnter { element, magnetic } => {
                self.orchestrator.hover_enter(magnetic);
                if magnetic {
                    self.cursor
                        .set_magnetic(element, self.config.cursor.magnetic_strength);
                }
            }
            InputEvent::HoverLeave { element } => {
                self.orchestrator.hover_leave();
                if self.cursor.is_magnetic(element) {
                    self.cursor.clear_magnetic(element);
                    self.tweens.start(
                        Tween::to(element, self.config.cursor.magnetic_tween_sec)
                            .prop(Property::X, 0.0)
                            .prop(Property::Y, 0.0)
                            .ease(Easing::Power2Out),
                    );
                }
            }
            InputEvent::MagnetMove { element, bounds } => self.lean_magnetic(element, &bounds),
            InputEvent::MenuToggle => {
                self.orchestrator.toggle_menu();
                self.sync_scroll_lock();
            }
            InputEvent::MenuClose => {
                self.orchestrator.close_menu();
                self.sync_scroll_lock();
            }
            InputEvent::AnchorClick { target } => {
                // Close first so the destination is measured against the closed-menu layout.
                self.orchestrator.close_menu();
                self.sync_scroll_lock();
                match target.and_then(|id| self.triggers.layout().rect(id).copied()) {
                    Some(rect) => self.scroll.scroll_to(
                        rect.top,
                        ANCHOR_SCROLL_DURATION_SEC,
                        self.config.scroll.easing,
                    ),
                    None => log::debug!("[menu] anchor target {:?} not on page", target),
                }
            }
            InputEvent::FormSubmit => {
                if self.form.begin() {
                    self.pending_submit = true;
                } else {
                    log::debug!("[form] submit ignored; already sending");
                }
            }
            InputEvent::FormResolved(result) => self.form.resolve(result),
        }
    }

    fn lean_magnetic(&mut self, element: ElementId, bounds: &Rect) {
        let resting = Vec2::new(
            self.store.get(element, Property::X),
            self.store.get(element, Property::Y),
        );
        if let Some(lean) = self.cursor.magnetic_offset(element, bounds, resting) {
            self.tweens.start(
                Tween::to(element, self.config.cursor.magnetic_tween_sec)
                    .prop(Property::X, lean.x)
                    .prop(Property::Y, lean.y)
                    .ease(Easing::Power2Out),
            );
        }
    }

    fn route_cues(&mut self) {
        for cue in std::mem::take(&mut self.cues) {
            match cue {
                Cue::LoaderFinished => {
                    let transition = self.orchestrator.complete_loader(self.session.as_mut());
                    log::info!("[loader] finished");
                    self.apply_transition(transition);
                    self.sync_scroll_lock();
                }
                Cue::Reveal(element) => {
                    self.tweens.start(Stage::reveal_tween(element));
                }
            }
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        if transition.start_main {
            self.tweens.start_all(self.stage.main_animations());
        }
        if transition.hide_loader {
            self.pending_hide_loader = true;
        }
    }

    fn sync_scroll_lock(&mut self) {
        self.scroll.set_locked(self.orchestrator.scroll_locked());
    }
}

impl std::fmt::Debug for MotionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionEngine")
            .field("scroll", self.scroll.state())
            .field("orchestrator", self.orchestrator.state())
            .field("tweens", &self.tweens.len())
            .field("triggers", &self.triggers.len())
            .field("queued", &self.queue.len())
            .finish()
    }
}

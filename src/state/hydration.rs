//! Hydration lifecycle for persisted collection stores.
//!
//! DESIGN
//! ======
//! Each store moves `Unhydrated -> Hydrated` exactly once. Two events can
//! cause the move: the persisted snapshot finished loading, or the fallback
//! window elapsed first (storage slow or missing). Both are modeled here as
//! plain state so the race is deterministic under a [`ManualClock`]; the
//! browser timer glue lives in `util::hydrate_trigger`.

#[cfg(test)]
#[path = "hydration_test.rs"]
mod hydration_test;

use std::cell::Cell;
use std::rc::Rc;

/// Whether a store's contents reflect its persisted snapshot yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HydrationPhase {
    #[default]
    Unhydrated,
    /// Terminal.
    Hydrated,
}

impl HydrationPhase {
    #[must_use]
    pub fn is_hydrated(self) -> bool {
        self == Self::Hydrated
    }

    /// Move to `Hydrated`. Returns `true` only on the call that transitions.
    pub fn complete(&mut self) -> bool {
        if self.is_hydrated() {
            return false;
        }
        *self = Self::Hydrated;
        true
    }
}

/// What moved a store to `Hydrated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HydrationTrigger {
    /// The persisted snapshot was loaded (or loading failed and was reported).
    Rehydrated,
    /// The fallback window elapsed while still unhydrated.
    FallbackElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HydrationOutcome {
    pub trigger: HydrationTrigger,
    pub elapsed_ms: f64,
}

/// A store with a persisted snapshot and a hydration phase.
pub trait Hydratable {
    fn is_hydrated(&self) -> bool;

    /// Force `Hydrated` without touching contents. Returns `true` if this call
    /// transitioned.
    fn mark_hydrated(&mut self) -> bool;

    /// Replace contents with the persisted snapshot and mark hydrated. Storage
    /// failures leave contents empty but still hydrate. On a store the
    /// fallback already hydrated, fold the snapshot into the current contents
    /// and persist the result instead.
    fn rehydrate(&mut self);
}

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall time: `Date.now()` in the browser, system time elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
        }
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms: Rc::new(Cell::new(now_ms)) }
    }

    pub fn advance(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// One-shot deadline. Fires at most once and never after [`cancel`](Self::cancel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackTimer {
    deadline_ms: f64,
    state: TimerState,
}

impl FallbackTimer {
    #[must_use]
    pub fn start(now_ms: f64, window_ms: u32) -> Self {
        Self { deadline_ms: now_ms + f64::from(window_ms), state: TimerState::Pending }
    }

    #[must_use]
    pub fn deadline_ms(&self) -> f64 {
        self.deadline_ms
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_due(&self, now_ms: f64) -> bool {
        self.state == TimerState::Pending && now_ms >= self.deadline_ms
    }

    /// Fire if the deadline has passed. Returns `true` on the firing call.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.state = TimerState::Fired;
        true
    }

    /// Fire now regardless of the deadline (the host timer already waited).
    pub fn expire(&mut self) -> bool {
        if self.state != TimerState::Pending {
            return false;
        }
        self.state = TimerState::Fired;
        true
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            self.state = TimerState::Cancelled;
        }
    }
}

/// Startup hydration of one store: the snapshot load racing the fallback timer.
#[derive(Debug)]
pub struct HydrationRun<C: Clock> {
    clock: C,
    started_ms: f64,
    timer: FallbackTimer,
}

impl<C: Clock> HydrationRun<C> {
    pub fn start(clock: C, window_ms: u32) -> Self {
        let started_ms = clock.now_ms();
        Self { clock, started_ms, timer: FallbackTimer::start(started_ms, window_ms) }
    }

    #[must_use]
    pub fn timer(&self) -> &FallbackTimer {
        &self.timer
    }

    /// Storage answered: load the snapshot. A load arriving after the
    /// fallback still reaches the store but reports no outcome, since the
    /// fallback already moved the phase.
    pub fn on_rehydrated<H: Hydratable>(&mut self, store: &mut H) -> Option<HydrationOutcome> {
        self.timer.cancel();
        let was_hydrated = store.is_hydrated();
        store.rehydrate();
        if was_hydrated {
            return None;
        }
        Some(self.outcome(HydrationTrigger::Rehydrated))
    }

    /// Clock-driven check of the fallback deadline.
    pub fn on_tick<H: Hydratable>(&mut self, store: &mut H) -> Option<HydrationOutcome> {
        if !self.timer.poll(self.clock.now_ms()) {
            return None;
        }
        self.force(store)
    }

    /// Host-timer-driven fallback: the window has elapsed.
    pub fn on_deadline<H: Hydratable>(&mut self, store: &mut H) -> Option<HydrationOutcome> {
        if !self.timer.expire() {
            return None;
        }
        self.force(store)
    }

    /// The owning UI scope went away; the fallback must not fire.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    fn force<H: Hydratable>(&self, store: &mut H) -> Option<HydrationOutcome> {
        if !store.mark_hydrated() {
            return None;
        }
        Some(self.outcome(HydrationTrigger::FallbackElapsed))
    }

    fn outcome(&self, trigger: HydrationTrigger) -> HydrationOutcome {
        HydrationOutcome { trigger, elapsed_ms: (self.clock.now_ms() - self.started_ms).max(0.0) }
    }
}

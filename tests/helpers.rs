//! Simulated TIMER5 shared by the integration tests.
//!
//! The simulation keeps an independent reference clock (`now_us`) next to the countdown, so tests
//! can check the clock's readings and waits against "real" time. Rollovers set the raw pending
//! flag; the interrupt is delivered immediately when unmasked, or at the next unmask otherwise,
//! exactly like the NVIC would.

#![allow(dead_code)]

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use cybot_clock::{Clock, SpinDelay, TickCounter, TickSource};

// ============================================================================
// Simulation State
// ============================================================================

#[derive(Debug, Default)]
pub struct SimState {
    pub powered: bool,
    pub irq_enabled: bool,
    pub enabled: bool,
    pub masked: bool,
    pub pending: bool,

    pub reload: u32,
    pub live: u32,
    pub prescale: u8,
    pub priority: u8,

    /// Reference time (µs). Advances whether or not the counter runs.
    pub now_us: u64,
    /// Time consumed by every read of the live counter (µs).
    pub read_cost_us: u32,
    /// One-off stall applied after the next unmask, as if a long ISR ran (µs).
    pub stall_after_unmask_us: u32,

    pub live_reads: u32,
    pub spins: u32,
    pub delivered: u32,
    /// Rollovers that hit an already-pending flag.
    pub lost: u32,
    pub events: Vec<&'static str>,
}

pub struct Sim<'a> {
    state: RefCell<SimState>,
    ticks: &'a TickCounter,
}

impl<'a> Sim<'a> {
    pub fn new(ticks: &'a TickCounter) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(SimState {
                // Reset value of the timer registers
                live: 0xFFFF,
                reload: 0xFFFF,
                ..Default::default()
            }),
            ticks,
        })
    }

    pub fn state(&self) -> Ref<'_, SimState> {
        self.state.borrow()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut SimState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub fn now_us(&self) -> u64 {
        self.state.borrow().now_us
    }

    pub fn set_read_cost(&self, us: u32) {
        self.with(|s| s.read_cost_us = us);
    }

    pub fn stall_after_next_unmask(&self, us: u32) {
        self.with(|s| s.stall_after_unmask_us = us);
    }

    /// Let `us` microseconds of reference time pass.
    pub fn advance(self: &Rc<Self>, us: u64) {
        let mut left = us;
        while left > 0 {
            let rolled = {
                let mut s = self.state.borrow_mut();
                if !(s.powered && s.enabled) {
                    s.now_us += left;
                    left = 0;
                    false
                } else if left <= u64::from(s.live) {
                    s.live -= left as u32;
                    s.now_us += left;
                    left = 0;
                    false
                } else {
                    // Count down to zero, then one more count to reload
                    let step = u64::from(s.live) + 1;
                    s.now_us += step;
                    left -= step;
                    s.live = s.reload;
                    if s.pending {
                        s.lost += 1;
                    }
                    s.pending = true;
                    true
                }
            };
            if rolled {
                self.deliver();
            }
        }
    }

    fn deliver(self: &Rc<Self>) {
        let fire = {
            let s = self.state.borrow();
            s.pending && !s.masked && s.irq_enabled
        };
        if fire {
            self.ticks.on_rollover(&SimTimer(Rc::clone(self)));
            self.state.borrow_mut().delivered += 1;
        }
    }

    fn event(&self, name: &'static str) {
        self.state.borrow_mut().events.push(name);
    }
}

// ============================================================================
// Tick Source / Spin
// ============================================================================

pub struct SimTimer<'a>(pub Rc<Sim<'a>>);

impl TickSource for SimTimer<'_> {
    fn power_up(&mut self) {
        self.0.event("power_up");
        self.0.with(|s| s.powered = true);
    }

    fn power_down(&mut self) {
        self.0.event("power_down");
        self.0.with(|s| s.powered = false);
    }

    fn configure(&mut self, reload: u32, prescale: u8, priority: u8) {
        self.0.event("configure");
        self.0.with(|s| {
            assert!(s.powered, "register access with the peripheral clock gated");
            s.reload = reload;
            s.live = reload;
            s.prescale = prescale;
            s.priority = priority;
            s.pending = false;
            s.masked = false;
            s.irq_enabled = true;
        });
    }

    fn start(&mut self) {
        self.0.event("start");
        self.0.with(|s| s.enabled = true);
    }

    fn halt(&mut self) {
        self.0.event("halt");
        self.0.with(|s| s.enabled = false);
    }

    fn set_live(&mut self, value: u32) {
        self.0.event("set_live");
        self.0.with(|s| s.live = value);
    }

    fn live(&self) -> u32 {
        let cost = self.0.with(|s| {
            s.live_reads += 1;
            s.read_cost_us
        });
        self.0.advance(u64::from(cost));
        // Upper half carries the prescaler snapshot, like the real GPTMTAR
        self.0.with(|s| s.live | (u32::from(s.prescale) << 16))
    }

    fn mask_rollover(&self) {
        self.0.with(|s| s.masked = true);
    }

    fn unmask_rollover(&self) {
        self.0.with(|s| s.masked = false);
        self.0.deliver();
        let stall = self.0.with(|s| core::mem::take(&mut s.stall_after_unmask_us));
        self.0.advance(u64::from(stall));
    }

    fn rollover_pending(&self) -> bool {
        self.0.state().pending
    }

    fn ack_rollover(&self) {
        self.0.with(|s| s.pending = false);
    }
}

/// Spin that burns exactly one microsecond of reference time per call.
pub struct SimSpin<'a>(pub Rc<Sim<'a>>);

impl SpinDelay for SimSpin<'_> {
    fn spin_one_micro(&mut self) {
        self.0.with(|s| s.spins += 1);
        self.0.advance(1);
    }
}

// ============================================================================
// Clock Creation Helpers
// ============================================================================

pub type SimClock<'a> = Clock<'a, SimTimer<'a>, SimSpin<'a>>;

/// Clock on top of the simulation, not yet initialized.
pub fn sim_clock<'a>(sim: &Rc<Sim<'a>>) -> SimClock<'a> {
    Clock::new(SimTimer(Rc::clone(sim)), SimSpin(Rc::clone(sim)), sim.ticks)
}

/// Clock on top of the simulation, initialized at reference time zero.
pub fn running_clock<'a>(sim: &Rc<Sim<'a>>) -> SimClock<'a> {
    let mut clock = sim_clock(sim);
    clock.init();
    sim.with(|s| s.events.clear());
    clock
}

/// Tiny deterministic PRNG for property-style loops.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) as u32) % bound
    }
}

//! Simulated board for the host tests.
//!
//! Models the interrupt by running the timebase handler
//! directly from the test or, with auto-tick enabled,
//! once per timebase poll while a gate is driven high.

use crate::{
    debug::{Debug, NRVALUES},
    hal::{AdcPeriph, DebugOut, Gate, GateOutputs, TimebaseAccess},
    params::{DEFAULT_PARAMS, Params},
    timebase::{Events, Timebase},
};
use core::cell::{Cell, RefCell};

pub struct SimBoard {
    params: Params,
    tb: RefCell<Timebase>,
    gates: [Cell<bool>; 2],
    high_ticks: [Cell<u16>; 2],
    auto_tick: Cell<bool>,
    sync_after_ticks: Cell<Option<u16>>,
    sync_on_modify: Cell<bool>,
    adc_raw: Cell<u16>,
    adc_busy_polls: Cell<u16>,
    adc_polls: Cell<u16>,
    adc_enabled: Cell<bool>,
    adc_conversions: Cell<u16>,
    values: [Cell<u16>; NRVALUES],
    marks: Cell<u16>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_PARAMS)
    }

    pub fn with_params(params: Params) -> Self {
        let tb = Timebase::new(params.initial_edge);
        Self {
            params,
            tb: RefCell::new(tb),
            gates: [Cell::new(false), Cell::new(false)],
            high_ticks: [Cell::new(0), Cell::new(0)],
            auto_tick: Cell::new(false),
            sync_after_ticks: Cell::new(None),
            sync_on_modify: Cell::new(false),
            adc_raw: Cell::new(0),
            adc_busy_polls: Cell::new(0),
            adc_polls: Cell::new(0),
            adc_enabled: Cell::new(false),
            adc_conversions: Cell::new(0),
            values: Default::default(),
            marks: Cell::new(0),
        }
    }

    fn irq(&self, events: Events) {
        if events.tick {
            for gate in [Gate::A, Gate::B] {
                if self.gates[gate as usize].get() {
                    let count = &self.high_ticks[gate as usize];
                    count.set(count.get() + 1);
                }
            }
        }
        self.tb.borrow_mut().handle(events, &self.params);
    }

    /// One time base timer event.
    pub fn tick(&self) {
        self.irq(Events {
            tick: true,
            sync: false,
        });
        if let Some(count) = self.sync_after_ticks.get() {
            if count <= 1 {
                self.sync_after_ticks.set(None);
                self.sync();
            } else {
                self.sync_after_ticks.set(Some(count - 1));
            }
        }
    }

    /// One zero crossing event.
    pub fn sync(&self) {
        self.irq(Events {
            tick: false,
            sync: true,
        });
    }

    pub fn set_auto_tick(&self, auto_tick: bool) {
        self.auto_tick.set(auto_tick);
    }

    /// Inject a zero crossing after `ticks` more ticks.
    pub fn sync_after_ticks(&self, ticks: u16) {
        self.sync_after_ticks.set(Some(ticks));
    }

    /// Inject a zero crossing right before the next main loop modification.
    pub fn sync_on_modify(&self) {
        self.sync_on_modify.set(true);
    }

    pub fn set_adc(&self, raw: u16, busy_polls: u16) {
        self.adc_raw.set(raw);
        self.adc_busy_polls.set(busy_polls);
    }

    pub fn adc_enabled(&self) -> bool {
        self.adc_enabled.get()
    }

    pub fn adc_conversions(&self) -> u16 {
        self.adc_conversions.get()
    }

    pub fn gates(&self) -> (bool, bool) {
        (
            self.gates[Gate::A as usize].get(),
            self.gates[Gate::B as usize].get(),
        )
    }

    /// Number of ticks the gate was high since the last [Self::clear_trace].
    pub fn high_ticks(&self, gate: Gate) -> u16 {
        self.high_ticks[gate as usize].get()
    }

    pub fn clear_trace(&self) {
        for count in &self.high_ticks {
            count.set(0);
        }
    }

    pub fn value(&self, id: Debug) -> u16 {
        self.values[id as usize].get()
    }

    pub fn marks(&self) -> u16 {
        self.marks.get()
    }
}

impl GateOutputs for SimBoard {
    fn set_gate(&self, gate: Gate, high: bool) {
        self.gates[gate as usize].set(high);
    }
}

impl AdcPeriph for SimBoard {
    fn enable(&self) {
        self.adc_enabled.set(true);
    }

    fn start_conversion(&self) {
        assert!(self.adc_enabled.get());
        self.adc_polls.set(0);
        self.adc_conversions.set(self.adc_conversions.get() + 1);
    }

    fn conversion_done(&self) -> bool {
        let polls = self.adc_polls.get();
        if polls >= self.adc_busy_polls.get() {
            true
        } else {
            self.adc_polls.set(polls + 1);
            false
        }
    }

    fn result_bytes(&self) -> (u8, u8) {
        let raw = self.adc_raw.get();
        ((raw >> 8) as u8, raw as u8)
    }
}

impl TimebaseAccess for SimBoard {
    fn snapshot(&self) -> Timebase {
        let (a, b) = self.gates();
        if self.auto_tick.get() && (a || b) {
            self.tick();
        }
        *self.tb.borrow()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut Timebase) -> R) -> R {
        if self.sync_on_modify.replace(false) {
            self.sync();
        }
        f(&mut self.tb.borrow_mut())
    }
}

impl DebugOut for SimBoard {
    fn log_u16(&self, id: Debug, value: u16) {
        self.values[id as usize].set(value);
    }

    fn mark(&self) {
        self.marks.set(self.marks.get() + 1);
    }
}

// vim: ts=4 sw=4 expandtab

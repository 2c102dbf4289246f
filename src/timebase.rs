use crate::{fixpt::Deg, params::Params};

/// Direction of the next expected zero crossing edge.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Edge {
    Rising,
    Falling,
}

impl Edge {
    pub const fn toggled(self) -> Self {
        match self {
            Edge::Rising => Edge::Falling,
            Edge::Falling => Edge::Rising,
        }
    }
}

/// Pending interrupt events.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Events {
    /// The periodic time base timer elapsed.
    pub tick: bool,
    /// A mains zero crossing edge was detected.
    pub sync: bool,
}

/// Phase tracking state.
///
/// Shared between the time base interrupt and the main loop.
/// The interrupt is the only writer of everything, except for
/// the pulse counter reset and the pulse-fired flag,
/// which the main loop writes with interrupts disabled.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Timebase {
    phase: Deg,
    ticks: u16,
    pulse_ticks: u8,
    pulse_fired: bool,
    edge: Edge,
    halfwave: u8,
}

impl Timebase {
    pub const fn new(initial_edge: Edge) -> Self {
        Self {
            phase: Deg::zero(),
            ticks: 0,
            pulse_ticks: 0,
            pulse_fired: false,
            edge: initial_edge,
            halfwave: 0,
        }
    }

    /// Interrupt handler body.
    ///
    /// Both events are evaluated independently.
    /// Returns the new edge to arm the zero crossing detector for,
    /// if there was a zero crossing.
    pub fn handle(&mut self, events: Events, params: &Params) -> Option<Edge> {
        if events.tick {
            self.tick(params.phase_per_tick);
        }
        if events.sync {
            Some(self.sync())
        } else {
            None
        }
    }

    pub fn tick(&mut self, phase_per_tick: Deg) {
        self.ticks = self.ticks.saturating_add(1);
        self.pulse_ticks = self.pulse_ticks.saturating_add(1);
        self.phase = self.phase.saturating_add(phase_per_tick);
    }

    pub fn sync(&mut self) -> Edge {
        self.edge = self.edge.toggled();
        self.phase = Deg::zero();
        self.ticks = 0;
        self.pulse_fired = false;
        self.halfwave = self.halfwave.wrapping_add(1);
        self.edge
    }

    /// Restart the pulse width counter for a pulse in `halfwave`.
    ///
    /// Returns the edge that selects the gate.
    /// Returns None, if a zero crossing happened after `halfwave`
    /// was observed or if the half-wave has already been fired.
    pub fn begin_pulse(&mut self, halfwave: u8) -> Option<Edge> {
        if self.halfwave == halfwave && !self.pulse_fired {
            self.pulse_ticks = 0;
            Some(self.edge)
        } else {
            None
        }
    }

    /// Mark the pulse of `halfwave` as fired.
    ///
    /// Does nothing, if a zero crossing happened since the pulse started.
    /// The new half-wave has not been fired, yet.
    pub fn mark_fired(&mut self, halfwave: u8) -> bool {
        if self.halfwave == halfwave {
            self.pulse_fired = true;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> Deg {
        self.phase
    }

    pub fn ticks(&self) -> u16 {
        self.ticks
    }

    pub fn pulse_ticks(&self) -> u8 {
        self.pulse_ticks
    }

    pub fn pulse_fired(&self) -> bool {
        self.pulse_fired
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn halfwave(&self) -> u8 {
        self.halfwave
    }
}


// vim: ts=4 sw=4 expandtab

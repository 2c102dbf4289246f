// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::{analog::AnalogError, params::Params, timebase::Timebase};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Fault {
    /// No mains zero crossing within the timeout.
    SyncLost,
    /// The delay angle ADC did not finish a conversion.
    AnalogTimeout,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Shutoff {
    MachineShutoff(Fault),
    MachineRunning,
}

impl Shutoff {
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Shutoff::MachineShutoff(fault) => Some(*fault),
            Shutoff::MachineRunning => None,
        }
    }
}

pub struct Mon {
    /// Remaining zero crossings until an analog failure is healed.
    analog_latch: u8,
    prev_halfwave: u8,
}

impl Mon {
    pub const fn new() -> Self {
        Self {
            analog_latch: 0,
            prev_halfwave: 0,
        }
    }

    pub fn check(
        &mut self,
        tb: &Timebase,
        analog: Result<(), AnalogError>,
        params: &Params,
    ) -> Shutoff {
        // Count down the analog failure latch on every zero crossing.
        if tb.halfwave() != self.prev_halfwave {
            self.prev_halfwave = tb.halfwave();
            self.analog_latch = self.analog_latch.saturating_sub(1);
        }
        if analog.is_err() {
            self.analog_latch = params.analog_fault_halfwaves.max(1);
        }

        // Without zero crossings the phase does not mean anything.
        if tb.ticks() >= params.sync_timeout_ticks {
            Shutoff::MachineShutoff(Fault::SyncLost)
        } else if self.analog_latch > 0 {
            Shutoff::MachineShutoff(Fault::AnalogTimeout)
        } else {
            Shutoff::MachineRunning
        }
    }
}

impl Default for Mon {
    fn default() -> Self {
        Self::new()
    }
}


// vim: ts=4 sw=4 expandtab

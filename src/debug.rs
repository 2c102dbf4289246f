// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{fixpt::Deg, hal::DebugOut, mon::Fault};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Debug {
    Phase,
    Alpha,
    Ticks,
    Fault,
    Pulses,
}
pub const NRVALUES: usize = 5;

impl Debug {
    pub fn log_u16(&self, out: &impl DebugOut, value: u16) {
        out.log_u16(*self, value);
    }

    pub fn log_u8(&self, out: &impl DebugOut, value: u8) {
        self.log_u16(out, value.into());
    }

    pub fn log_deg(&self, out: &impl DebugOut, value: Deg) {
        self.log_u16(out, value.to_q());
    }

    pub fn log_fault(&self, out: &impl DebugOut, fault: Option<Fault>) {
        self.log_u8(out, fault.map(|f| f as u8 + 1).unwrap_or(0));
    }
}

// vim: ts=4 sw=4 expandtab

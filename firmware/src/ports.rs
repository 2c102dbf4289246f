// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::hw::mcu;
use avr_context::InitCtx;
use triacphase::Gate;

/// PORTA bit of the triac gate A drive.
const GATE_A_BIT: u8 = 1;
/// PORTA bit of the triac gate B drive.
const GATE_B_BIT: u8 = 2;
/// PORTA bit of the debug pin.
const DEBUG_BIT: u8 = 6;

const fn pin_input(_bit: u8) -> u8 {
    0
}
const fn pin_output(bit: u8) -> u8 {
    1 << bit
}
const fn pin_low(_bit: u8) -> u8 {
    0
}
const fn pin_floating(_bit: u8) -> u8 {
    0
}
const fn pin_pullup(bit: u8) -> u8 {
    1 << bit
}

const fn gate_mask(gate: Gate) -> u8 {
    match gate {
        Gate::A => 1 << GATE_A_BIT,
        Gate::B => 1 << GATE_B_BIT,
    }
}

#[allow(non_snake_case)]
pub struct Ports {
    pub PORTA: mcu::PORTA,
    pub PORTB: mcu::PORTB,
}

impl Ports {
    pub fn setup(&self, _: &InitCtx) {
        self.PORTA.porta().write(|w| {
            w.set(
                pin_floating(0) | // delay angle potentiometer, single ended ADC
                pin_low(GATE_A_BIT) | // gate A, active high
                pin_low(GATE_B_BIT) | // gate B, active high
                pin_floating(3) | // AREF
                pin_pullup(4) | // n/c
                pin_pullup(5) | // n/c
                pin_low(DEBUG_BIT) | // Debug
                pin_pullup(7), // n/c
            )
        });
        self.PORTA.ddra().write(|w| {
            w.set(
                pin_input(0) | // delay angle potentiometer, single ended ADC
                pin_output(GATE_A_BIT) | // gate A, active high
                pin_output(GATE_B_BIT) | // gate B, active high
                pin_input(3) | // AREF
                pin_input(4) | // n/c
                pin_input(5) | // n/c
                pin_output(DEBUG_BIT) | // Debug
                pin_input(7), // n/c
            )
        });
        self.PORTB.portb().write(|w| {
            w.set(
                pin_low(0) | // ISP MOSI
                pin_pullup(1) | // ISP MISO
                pin_low(2) | // ISP SCK
                pin_pullup(3) | // n/c
                pin_floating(4) | // XTAL1
                pin_floating(5) | // XTAL2
                pin_floating(6) | // INT0: mains zero crossing
                pin_floating(7), // RESET, Debug-Wire
            )
        });
        self.PORTB.ddrb().write(|w| {
            w.set(
                pin_input(0) | // ISP MOSI
                pin_input(1) | // ISP MISO
                pin_output(2) | // ISP SCK
                pin_input(3) | // n/c
                pin_input(4) | // XTAL1
                pin_input(5) | // XTAL2
                pin_input(6) | // INT0: mains zero crossing
                pin_input(7), // RESET, Debug-Wire
            )
        });
    }

    #[inline(always)]
    pub fn set_gate(&self, gate: Gate, high: bool) {
        let mask = gate_mask(gate);
        self.PORTA.porta().modify(|r, w| {
            if high {
                w.set(r.bits() | mask)
            } else {
                w.set(r.bits() & !mask)
            }
        });
    }

    #[inline(always)]
    pub fn all_gates_low(&self) {
        let mask = gate_mask(Gate::A) | gate_mask(Gate::B);
        self.PORTA.porta().modify(|r, w| w.set(r.bits() & !mask));
    }

    #[inline(always)]
    pub fn toggle_debug(&self) {
        // Writing a one to PINA toggles the PORTA bit.
        self.PORTA.pina().write(|w| w.set(1 << DEBUG_BIT));
    }
}

// vim: ts=4 sw=4 expandtab

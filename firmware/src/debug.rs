// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::hw::{Mutex, interrupt};
use core::cell::Cell;
use triacphase::debug::{Debug, NRVALUES};

/// Latest debug values.
/// Read them with the debugger.
#[used]
#[unsafe(no_mangle)]
static DEBUG_VALUES: Mutex<[Cell<u16>; NRVALUES]> = Mutex::new([
    Cell::new(0),
    Cell::new(0),
    Cell::new(0),
    Cell::new(0),
    Cell::new(0),
]);

#[inline(always)]
pub fn debug_log_u16(id: Debug, value: u16) {
    if cfg!(feature = "debug") {
        interrupt::free(|cs| {
            let id = id as usize;
            let values = DEBUG_VALUES.borrow(cs);
            if id < values.len() {
                values[id].set(value);
            }
        });
    }
}

// vim: ts=4 sw=4 expandtab

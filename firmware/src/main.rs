// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]
#![feature(asm_experimental_arch)]

mod analog;
mod debug;
mod exint;
mod hw;
mod ports;
mod system;
mod timebase;
mod timer;

use crate::{
    analog::Adc,
    exint::exint_init,
    hw::{Peripherals, interrupt, mcu, unwrap_option},
    ports::Ports,
    system::{PARAMS, SysBoard, SysPeriph},
    timebase::{IRQ_PERIPH, IrqPeriph},
    timer::timer_init,
};
use avr_context::MainCtx;
use triacphase::System;

/// Minimum free stack bytes before the monitoring resets the system.
#[cfg(feature = "monitoring")]
const MIN_STACK_SPACE: u16 = 32;

fn wdt_init() {
    // SAFETY: The asm code only accesses the WDT registers
    //         which are not accessed from anywhere else in the program.
    unsafe {
        // Enable WDT with timeout 32.5 ms
        core::arch::asm!(
            "ldi {tmp}, 0x10", // WDCE=1
            "out {WDTCR}, {tmp}",
            "ldi {tmp}, 0x19", // WDCE=1, WDE=1, WDP2=0, WDP1=0, WDP0=1
            "out {WDTCR}, {tmp}",
            tmp = out(reg_upper) _,
            WDTCR = const 0x21,
            options(nostack, preserves_flags)
        );
    }
}

fn wdt_poke(_wp: &mcu::WDT) {
    avr_device::asm::wdr();
}

#[cfg(feature = "monitoring")]
fn check_stack() {
    if avr_stack::estimate_unused_stack_space() < MIN_STACK_SPACE {
        crate::hw::reset_system();
    }
}

#[avr_device::entry]
fn main() -> ! {
    wdt_init();

    let dp = unwrap_option(Peripherals::take());

    let sp = SysPeriph {
        ports: Ports {
            PORTA: dp.PORTA,
            PORTB: dp.PORTB,
        },
        adc: Adc { ADC: dp.ADC },
    };

    let ip = IrqPeriph {
        CPU: dp.CPU,
        EXINT: dp.EXINT,
        TC0: dp.TC0,
    };

    // SAFETY:
    // This is the context handle for the main() function.
    // Holding a reference to this object proves that the holder
    // is running in main() context.
    // Interrupts are still disabled here.
    let m = unsafe {
        MainCtx::new_with_init(|c| {
            sp.ports.setup(c);
            sp.adc.setup(c);
            timer_init(c, &ip.TC0);
            exint_init(c, &ip.EXINT, &ip.CPU, PARAMS.initial_edge);
            IRQ_PERIPH.init(c, ip);
        })
    };

    let board = SysBoard::new(&m, &sp);
    let mut sys = System::new(&PARAMS);
    sys.init(&board);

    // SAFETY: This must be after construction of MainCtx
    //         and after initialization of static InitCtx variables.
    unsafe { interrupt::enable() };

    loop {
        sys.run(&board, &PARAMS);
        #[cfg(feature = "monitoring")]
        check_stack();
        wdt_poke(&dp.WDT);
    }
}

// vim: ts=4 sw=4 expandtab

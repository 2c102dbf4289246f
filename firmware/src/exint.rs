use crate::hw::mcu;
use avr_context::InitCtx;
use triacphase::Edge;

const ISC0_MASK: u8 = 0x3;
const ISC0_FALLING: u8 = 0x2;
const ISC0_RISING: u8 = 0x3;
const INT0: u8 = 1 << 6;
const INTF0: u8 = 1 << 6;

const fn edge_to_isc0(edge: Edge) -> u8 {
    match edge {
        Edge::Rising => ISC0_RISING,
        Edge::Falling => ISC0_FALLING,
    }
}

pub fn exint_init(_: &InitCtx, exint: &mcu::EXINT, cpu: &mcu::CPU, edge: Edge) {
    exint_set_edge(cpu, edge);
    exint.gifr().write(|w| w.set(INTF0));
    exint.gimsk().modify(|r, w| w.set(r.bits() | INT0));
}

/// Arm the zero crossing interrupt for the next edge.
#[inline(always)]
pub fn exint_set_edge(cpu: &mcu::CPU, edge: Edge) {
    let isc0 = edge_to_isc0(edge);
    cpu.mcucr()
        .modify(|r, w| w.set((r.bits() & !ISC0_MASK) | isc0));
}

/// Check and clear a pending zero crossing.
#[inline(always)]
pub fn exint_take_pending(exint: &mcu::EXINT) -> bool {
    if exint.gifr().read().bits() & INTF0 != 0 {
        exint.gifr().write(|w| w.set(INTF0));
        true
    } else {
        false
    }
}

// vim: ts=4 sw=4 expandtab

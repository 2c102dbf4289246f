//! Hardware seams of the controller.

use crate::{debug::Debug, timebase::Timebase};

/// Triac gate drive line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Gate {
    /// Fired in the half-wave that ends with a rising edge.
    A,
    /// Fired in the half-wave that ends with a falling edge.
    B,
}

pub trait GateOutputs {
    fn set_gate(&self, gate: Gate, high: bool);

    fn all_gates_low(&self) {
        self.set_gate(Gate::A, false);
        self.set_gate(Gate::B, false);
    }
}

/// Delay angle ADC channel.
pub trait AdcPeriph {
    fn enable(&self);
    fn start_conversion(&self);
    fn conversion_done(&self) -> bool;
    /// Result register (high byte, low byte).
    fn result_bytes(&self) -> (u8, u8);
}

/// Access to the [Timebase] that is shared with the interrupt.
pub trait TimebaseAccess {
    /// Consistent copy of the whole state.
    fn snapshot(&self) -> Timebase;

    /// Modify the state without interference from the interrupt.
    fn modify<R>(&self, f: impl FnOnce(&mut Timebase) -> R) -> R;
}

pub trait DebugOut {
    fn log_u16(&self, id: Debug, value: u16);

    /// Signal an event on the debug pin, if there is one.
    fn mark(&self) {}
}

pub trait Board: GateOutputs + AdcPeriph + TimebaseAccess + DebugOut {}

impl<T: GateOutputs + AdcPeriph + TimebaseAccess + DebugOut> Board for T {}

// vim: ts=4 sw=4 expandtab

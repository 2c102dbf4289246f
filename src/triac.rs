use crate::{
    hal::{Gate, GateOutputs, TimebaseAccess},
    params::Params,
    timebase::Edge,
};

fn edge_to_gate(edge: Edge) -> Gate {
    match edge {
        Edge::Rising => Gate::A,
        Edge::Falling => Gate::B,
    }
}

pub struct Triac {
    pulses: u16,
}

impl Triac {
    pub const fn new() -> Self {
        Self { pulses: 0 }
    }

    /// Fire one gate pulse in `halfwave`.
    ///
    /// Blocks until the time base has counted the pulse width.
    /// Returns false without pulsing, if `halfwave` is already over
    /// or has already been fired.
    pub fn generate_pulse<B: GateOutputs + TimebaseAccess>(
        &mut self,
        b: &B,
        halfwave: u8,
        params: &Params,
    ) -> bool {
        let Some(edge) = b.modify(|tb| tb.begin_pulse(halfwave)) else {
            return false;
        };

        b.set_gate(edge_to_gate(edge), true);
        while b.snapshot().pulse_ticks() < params.pulse_width_ticks {}
        b.all_gates_low();

        self.pulses = self.pulses.wrapping_add(1);
        true
    }

    pub fn shutoff(&self, b: &impl GateOutputs) {
        b.all_gates_low();
    }

    /// Number of generated pulses.
    pub fn pulses(&self) -> u16 {
        self.pulses
    }
}

impl Default for Triac {
    fn default() -> Self {
        Self::new()
    }
}


// vim: ts=4 sw=4 expandtab

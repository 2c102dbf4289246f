use crate::{
    analog::read_delay_angle,
    debug::Debug,
    fixpt::Deg,
    hal::Board,
    mon::{Fault, Mon, Shutoff},
    params::Params,
    triac::Triac,
};

/// Triac state within the current half-wave.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GateState {
    /// The phase has not reached the delay angle, yet.
    Waiting,
    /// The phase reached the delay angle. Pulse now.
    Fire,
    /// This half-wave has been fired.
    Fired,
    /// Monitoring forces the gates off.
    Inhibit(Fault),
}

impl GateState {
    pub fn evaluate(phase: Deg, alpha: Deg, pulse_fired: bool, shutoff: Shutoff) -> Self {
        if let Shutoff::MachineShutoff(fault) = shutoff {
            GateState::Inhibit(fault)
        } else if phase < alpha {
            GateState::Waiting
        } else if !pulse_fired {
            GateState::Fire
        } else {
            GateState::Fired
        }
    }
}

pub struct System {
    alpha: Deg,
    state: GateState,
    mon: Mon,
    triac: Triac,
}

impl System {
    pub const fn new(params: &Params) -> Self {
        Self {
            alpha: params.default_alpha,
            state: GateState::Waiting,
            mon: Mon::new(),
            triac: Triac::new(),
        }
    }

    pub fn init(&self, b: &impl Board) {
        self.triac.shutoff(b);
    }

    /// One iteration of the control loop.
    pub fn run(&mut self, b: &impl Board, params: &Params) -> GateState {
        // Sample the delay angle potentiometer.
        // Keep the previous angle, if the ADC failed.
        let analog = read_delay_angle(b, params).map(|alpha| {
            self.alpha = alpha;
        });

        let tb = b.snapshot();
        let shutoff = self.mon.check(&tb, analog, params);

        let mut state = GateState::evaluate(tb.phase(), self.alpha, tb.pulse_fired(), shutoff);
        match state {
            GateState::Fire => {
                let halfwave = tb.halfwave();
                if self.triac.generate_pulse(b, halfwave, params) {
                    b.modify(|tb| tb.mark_fired(halfwave));
                    b.mark();
                    Debug::Pulses.log_u16(b, self.triac.pulses());
                } else {
                    // A zero crossing came first. Fire in the new half-wave.
                    self.triac.shutoff(b);
                    state = GateState::Waiting;
                }
            }
            GateState::Waiting | GateState::Fired | GateState::Inhibit(_) => {
                self.triac.shutoff(b);
            }
        }

        Debug::Phase.log_deg(b, tb.phase());
        Debug::Alpha.log_deg(b, self.alpha);
        Debug::Ticks.log_u16(b, tb.ticks());
        Debug::Fault.log_fault(b, shutoff.fault());

        self.state = state;
        state
    }

    pub fn alpha(&self) -> Deg {
        self.alpha
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn pulses(&self) -> u16 {
        self.triac.pulses()
    }
}


// vim: ts=4 sw=4 expandtab

use crate::{
    fixpt::{Deg, deg},
    timebase::Edge,
};

/// Controller tuning.
#[derive(Copy, Clone, Debug)]
pub struct Params {
    /// Phase advance per time base tick.
    pub phase_per_tick: Deg,
    /// Gate pulse length in time base ticks.
    pub pulse_width_ticks: u8,
    /// Delay angle used until the first ADC sample succeeded.
    pub default_alpha: Deg,
    /// Maximum number of ADC status polls per conversion.
    pub adc_poll_limit: u16,
    /// Shut off, if there was no zero crossing for this many ticks.
    pub sync_timeout_ticks: u16,
    /// Number of zero crossings an analog failure stays latched.
    pub analog_fault_halfwaves: u8,
    /// Edge of the very first zero crossing after reset.
    pub initial_edge: Edge,
}

/// 90 ticks per half-wave, 2 degrees each.
pub const DEFAULT_PARAMS: Params = Params {
    phase_per_tick: deg!(2),
    pulse_width_ticks: 4,
    default_alpha: deg!(30),
    adc_poll_limit: 4096,
    sync_timeout_ticks: 3 * 90,
    analog_fault_halfwaves: 2,
    initial_edge: Edge::Rising,
};

// vim: ts=4 sw=4 expandtab

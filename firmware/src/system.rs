use crate::{
    analog::Adc,
    debug::debug_log_u16,
    ports::Ports,
    timebase::SharedTimebase,
};
use avr_context::MainCtx;
use triacphase::{
    AdcPeriph, DEFAULT_PARAMS, DebugOut, Gate, GateOutputs, Params, TimebaseAccess, debug::Debug,
    timebase::Timebase,
};

pub const PARAMS: Params = DEFAULT_PARAMS;

/// Peripherals owned by the main context.
pub struct SysPeriph {
    pub ports: Ports,
    pub adc: Adc,
}

/// The controller's view of the hardware.
pub struct SysBoard<'a, 'cs> {
    _m: &'a MainCtx<'cs>,
    sp: &'a SysPeriph,
    tb: SharedTimebase,
}

impl<'a, 'cs> SysBoard<'a, 'cs> {
    pub fn new(m: &'a MainCtx<'cs>, sp: &'a SysPeriph) -> Self {
        Self {
            _m: m,
            sp,
            tb: SharedTimebase,
        }
    }
}

impl GateOutputs for SysBoard<'_, '_> {
    #[inline(always)]
    fn set_gate(&self, gate: Gate, high: bool) {
        self.sp.ports.set_gate(gate, high);
    }

    #[inline(always)]
    fn all_gates_low(&self) {
        self.sp.ports.all_gates_low();
    }
}

impl AdcPeriph for SysBoard<'_, '_> {
    fn enable(&self) {
        self.sp.adc.enable();
    }

    fn start_conversion(&self) {
        self.sp.adc.start_conversion();
    }

    fn conversion_done(&self) -> bool {
        self.sp.adc.conversion_done()
    }

    fn result_bytes(&self) -> (u8, u8) {
        self.sp.adc.result_bytes()
    }
}

impl TimebaseAccess for SysBoard<'_, '_> {
    #[inline(always)]
    fn snapshot(&self) -> Timebase {
        self.tb.snapshot()
    }

    #[inline(always)]
    fn modify<R>(&self, f: impl FnOnce(&mut Timebase) -> R) -> R {
        self.tb.modify(f)
    }
}

impl DebugOut for SysBoard<'_, '_> {
    fn log_u16(&self, id: Debug, value: u16) {
        debug_log_u16(id, value);
    }

    fn mark(&self) {
        if cfg!(feature = "debug") {
            self.sp.ports.toggle_debug();
        }
    }
}

// vim: ts=4 sw=4 expandtab

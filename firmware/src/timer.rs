use crate::hw::mcu;
use avr_context::InitCtx;

/// 16 MHz CPU clock, prescaler 8.
const TIMER_TICK_NS: u32 = 500;

/// Time base period.
/// 90 ticks per mains half-wave give 2 degrees per tick.
#[cfg(not(feature = "mains-50hz"))]
pub const TIMEBASE_PERIOD_NS: u32 = 1_000_000_000 / 60 / 2 / 90;
#[cfg(feature = "mains-50hz")]
pub const TIMEBASE_PERIOD_NS: u32 = 1_000_000_000 / 50 / 2 / 90;

const OCR0A: u8 = {
    let ticks = TIMEBASE_PERIOD_NS / TIMER_TICK_NS;
    assert!(ticks >= 2 && ticks <= 256);
    (ticks - 1) as u8
};

const TCCR0A_CTC0: u8 = 1 << 0;
const TCCR0B_CS_DIV8: u8 = 0b010;
const OCIE0A: u8 = 1 << 4;
pub const OCF0A: u8 = 1 << 4;

pub fn timer_init(_: &InitCtx, tc0: &mcu::TC0) {
    // Timer 0 configuration:
    // 8 bit, CTC on OCR0A.
    tc0.tccr0b().write(|w| w.set(0));
    tc0.tcnt0l().write(|w| w.set(0));
    tc0.ocr0a().write(|w| w.set(OCR0A));
    tc0.tccr0a().write(|w| w.set(TCCR0A_CTC0));
    tc0.tifr().write(|w| w.set(OCF0A));
    tc0.timsk().modify(|r, w| w.set(r.bits() | OCIE0A));
    tc0.tccr0b().write(|w| w.set(TCCR0B_CS_DIV8));
}

/// Check and clear a pending time base compare match.
#[inline(always)]
pub fn timer_take_pending(tc0: &mcu::TC0) -> bool {
    if tc0.tifr().read().bits() & OCF0A != 0 {
        // Write-one-to-clear. Don't touch the other flags.
        tc0.tifr().write(|w| w.set(OCF0A));
        true
    } else {
        false
    }
}

// vim: ts=4 sw=4 expandtab

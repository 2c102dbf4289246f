use crate::{
    exint::{exint_set_edge, exint_take_pending},
    hw::{Mutex, interrupt, mcu},
    system::PARAMS,
    timer::timer_take_pending,
};
use avr_context::{InitCtxCell, IrqCtx};
use core::cell::Cell;
use triacphase::{Events, TimebaseAccess, timebase::Timebase};

#[allow(non_snake_case)]
pub struct IrqPeriph {
    pub CPU: mcu::CPU,
    pub EXINT: mcu::EXINT,
    pub TC0: mcu::TC0,
}

// SAFETY: Is initialized when constructing the MainCtx.
pub static IRQ_PERIPH: InitCtxCell<IrqPeriph> = unsafe { InitCtxCell::uninit() };

static TIMEBASE: Mutex<Cell<Timebase>> = Mutex::new(Cell::new(Timebase::new(PARAMS.initial_edge)));

fn irq_handle(c: &IrqCtx, events: Events) {
    let cs = c.cs();
    let mut tb = TIMEBASE.borrow(cs).get();
    let new_edge = tb.handle(events, &PARAMS);
    TIMEBASE.borrow(cs).set(tb);

    if let Some(edge) = new_edge {
        exint_set_edge(&IRQ_PERIPH.CPU, edge);
        // Changing the sense control may raise a spurious flag.
        exint_take_pending(&IRQ_PERIPH.EXINT);
    }
}

/// Time base timer interrupt.
pub fn irq_handler_timer0_compa(c: &IrqCtx) {
    // The hardware cleared our own flag on vector entry.
    let events = Events {
        tick: true,
        sync: exint_take_pending(&IRQ_PERIPH.EXINT),
    };
    irq_handle(c, events);
}

/// Mains zero crossing interrupt.
pub fn irq_handler_int0(c: &IrqCtx) {
    let events = Events {
        tick: timer_take_pending(&IRQ_PERIPH.TC0),
        sync: true,
    };
    irq_handle(c, events);
}

/// Main context access to the interrupt's [Timebase].
pub struct SharedTimebase;

impl TimebaseAccess for SharedTimebase {
    #[inline(always)]
    fn snapshot(&self) -> Timebase {
        interrupt::free(|cs| TIMEBASE.borrow(cs).get())
    }

    #[inline(always)]
    fn modify<R>(&self, f: impl FnOnce(&mut Timebase) -> R) -> R {
        interrupt::free(|cs| {
            let cell = TIMEBASE.borrow(cs);
            let mut tb = cell.get();
            let ret = f(&mut tb);
            cell.set(tb);
            ret
        })
    }
}

// vim: ts=4 sw=4 expandtab

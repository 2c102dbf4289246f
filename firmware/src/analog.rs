use crate::hw::mcu;
use avr_context::InitCtx;

const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;
const ADIF: u8 = 1 << 4;
/// 250 kHz ADC clock. One conversion takes 52 us, less than one time base tick.
const ADPS_DIV64: u8 = 0x6;

/// REFS = Vcc, right adjusted, single ended ADC0.
const ADMUX_DELAY_ANGLE: u8 = 0x00;

/// Delay angle potentiometer ADC.
#[allow(non_snake_case)]
pub struct Adc {
    pub ADC: mcu::ADC,
}

impl Adc {
    #[rustfmt::skip]
    pub fn setup(&self, _: &InitCtx) {
        self.ADC.didr0().write(|w| {
            w.adc0d().set_bit() // PA0: delay angle potentiometer
             .adc1d().clear_bit()
             .adc2d().clear_bit()
             .arefd().clear_bit()
             .adc3d().clear_bit()
             .adc4d().clear_bit()
             .adc5d().clear_bit()
             .adc6d().clear_bit()
        });
        self.ADC.adcsrb().write(|w| w.set(0));
        self.ADC.admux().write(|w| w.set(ADMUX_DELAY_ANGLE));
        self.ADC.adcsra().write(|w| w.set(ADIF | ADPS_DIV64));
    }

    #[inline(always)]
    pub fn enable(&self) {
        self.ADC.adcsra().write(|w| w.set(ADEN | ADPS_DIV64));
    }

    #[inline(always)]
    pub fn start_conversion(&self) {
        self.ADC
            .adcsra()
            .write(|w| w.set(ADEN | ADSC | ADIF | ADPS_DIV64));
    }

    /// ADSC reads as one, while the conversion is in progress.
    #[inline(always)]
    pub fn conversion_done(&self) -> bool {
        self.ADC.adcsra().read().bits() & ADSC == 0
    }

    /// The 16 bit data register access reads ADCL before ADCH.
    #[inline(always)]
    pub fn result_bytes(&self) -> (u8, u8) {
        let value = self.ADC.adc().read().bits();
        ((value >> 8) as u8, value as u8)
    }
}

// vim: ts=4 sw=4 expandtab

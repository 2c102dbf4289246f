use crate::{fixpt::Deg, hal::AdcPeriph, params::Params};

/// The ADC delivers 10 bit results.
const ADC_MASK: u16 = 0x3FF;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AnalogError {
    /// The conversion did not finish within the poll limit.
    Timeout,
}

/// Convert a raw 0..0x3FF ADC sample into 0..64 degrees.
///
/// One ADC code is 1/16 degree, which is exactly the [Deg] LSB.
pub const fn raw_to_delay_angle(raw: u16) -> Deg {
    Deg::from_q(raw & ADC_MASK)
}

/// Read the delay angle potentiometer.
///
/// Runs one complete conversion and busy-waits for the result.
pub fn read_delay_angle(adc: &impl AdcPeriph, params: &Params) -> Result<Deg, AnalogError> {
    adc.enable();
    adc.start_conversion();

    let mut polls: u16 = 0;
    while !adc.conversion_done() {
        polls += 1;
        if polls >= params.adc_poll_limit {
            return Err(AnalogError::Timeout);
        }
    }

    let (hi, lo) = adc.result_bytes();
    let raw = ((hi as u16) << 8) | lo as u16;
    Ok(raw_to_delay_angle(raw))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{fixpt::deg, params::DEFAULT_PARAMS, sim::SimBoard};

    #[test]
    fn test_scaling() {
        assert_eq!(raw_to_delay_angle(0), Deg::zero());
        assert_eq!(raw_to_delay_angle(1023), deg!(1023 / 16));
        assert_eq!(raw_to_delay_angle(1023).to_q(), 1023);
        // 1023 * 0.0625 = 63.9375
        assert_eq!(raw_to_delay_angle(1023), deg!(63) + deg!(15 / 16));
        assert_eq!(raw_to_delay_angle(1023).saturating_add(Deg::from_q(1)), deg!(64));
        assert_eq!(raw_to_delay_angle(480), deg!(30));
        assert_eq!(raw_to_delay_angle(512), deg!(32));

        let mut prev = raw_to_delay_angle(0);
        for raw in 1..=1023_u16 {
            let angle = raw_to_delay_angle(raw);
            assert!(angle > prev);
            assert_eq!(angle.to_q() - prev.to_q(), 1);
            prev = angle;
        }
    }

    #[test]
    fn test_read() {
        let board = SimBoard::new();
        board.set_adc(0x2A5, 3);
        let angle = read_delay_angle(&board, &DEFAULT_PARAMS).unwrap();
        assert_eq!(angle.to_q(), 0x2A5);
        assert!(board.adc_enabled());
        assert_eq!(board.adc_conversions(), 1);
    }

    #[test]
    fn test_read_masks_high_bits() {
        let board = SimBoard::new();
        board.set_adc(0xFC00 | 100, 0);
        let angle = read_delay_angle(&board, &DEFAULT_PARAMS).unwrap();
        assert_eq!(angle.to_q(), 100);
    }

    #[test]
    fn test_read_timeout() {
        let board = SimBoard::new();
        board.set_adc(480, u16::MAX);
        assert_eq!(
            read_delay_angle(&board, &DEFAULT_PARAMS),
            Err(AnalogError::Timeout)
        );

        // Just within the limit.
        board.set_adc(480, DEFAULT_PARAMS.adc_poll_limit - 1);
        assert_eq!(read_delay_angle(&board, &DEFAULT_PARAMS), Ok(deg!(30)));
    }
}

// vim: ts=4 sw=4 expandtab

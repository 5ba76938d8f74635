//! Two-axis analog joystick on ADC1.
//!
//! Each axis is read several times per sample and the median is reported,
//! which removes the occasional spike the SAR ADC produces.

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    peripherals::{
        ADC1,
        GPIO9,
        GPIO10,
    },
};
use platformer::{
    AxisSample,
    Joystick,
    config::JOYSTICK_MAX,
    input::median,
};

use crate::JoystickResources;

/// Reads taken per axis for each sample.
const OVERSAMPLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum JoystickError {
    /// A reading outside the 12-bit range; the stick is likely unplugged
    /// or the ADC misconfigured.
    OutOfRange(u16),
}

pub struct BadgeJoystick<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    x: AdcPin<GPIO9<'d>, ADC1<'d>>,
    y: AdcPin<GPIO10<'d>, ADC1<'d>>,
}

impl<'d> From<JoystickResources<'d>> for BadgeJoystick<'d> {
    fn from(res: JoystickResources<'d>) -> Self {
        // Full 0..3.3 V swing of the stick's potentiometers.
        let mut config = AdcConfig::new();
        let x = config.enable_pin(res.x, Attenuation::_11dB);
        let y = config.enable_pin(res.y, Attenuation::_11dB);

        Self {
            adc: Adc::new(res.adc, config),
            x,
            y,
        }
    }
}

impl Joystick for BadgeJoystick<'_> {
    type Error = JoystickError;

    fn sample(&mut self) -> Result<AxisSample, JoystickError> {
        let mut xs = [0_u16; OVERSAMPLE];
        let mut ys = [0_u16; OVERSAMPLE];
        for (x, y) in xs.iter_mut().zip(&mut ys) {
            *x = self.adc.read_blocking(&mut self.x);
            *y = self.adc.read_blocking(&mut self.y);
        }

        Ok(AxisSample {
            x: in_range(median(&mut xs))?,
            y: in_range(median(&mut ys))?,
        })
    }
}

const fn in_range(value: u16) -> Result<u16, JoystickError> {
    if value > JOYSTICK_MAX {
        return Err(JoystickError::OutOfRange(value));
    }
    Ok(value)
}

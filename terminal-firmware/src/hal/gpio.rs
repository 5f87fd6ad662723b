// Digitale Ein-/Ausgänge: Indikator-LED und Bewegungssensor

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use terminal_core::{DriverError, IndicatorWriter, MotionSensor};

/// Indikator-LED an einem Output-Pin (aktiv high)
pub struct GpioIndicator<P> {
    pin: P,
}

impl<P: OutputPin> GpioIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin> IndicatorWriter for GpioIndicator<P> {
    fn set(&mut self, on: bool) -> Result<(), DriverError> {
        self.pin
            .set_state(PinState::from(on))
            .map_err(|_| DriverError::WriteFailed)
    }
}

/// PIR-Sensor an einem Input-Pin. Liefert den Rohpegel,
/// die Polarität wird im Scheduler normalisiert.
pub struct GpioMotionSensor<P> {
    pin: P,
}

impl<P: InputPin> GpioMotionSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> MotionSensor for GpioMotionSensor<P> {
    fn is_high(&mut self) -> Result<bool, DriverError> {
        self.pin.is_high().map_err(|_| DriverError::ReadFailed)
    }
}

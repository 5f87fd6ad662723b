// Bit-Bang Schiebe-Ausgabe (Daten + Takt)
//
// Gemeinsame Basis für MAX7219 und 74HC595: Bit anlegen, Takt hoch,
// Takt runter. Übernahme beim steigenden Takt.

use embedded_hal::digital::{OutputPin, PinState};
use terminal_core::{DriverError, shift_bits_msb_first};

/// Schiebt ein Byte MSB zuerst hinaus
pub fn shift_out<D, C>(data: &mut D, clock: &mut C, byte: u8) -> Result<(), DriverError>
where
    D: OutputPin,
    C: OutputPin,
{
    for bit in shift_bits_msb_first(byte) {
        data.set_state(PinState::from(bit))
            .map_err(|_| DriverError::WriteFailed)?;
        clock.set_high().map_err(|_| DriverError::WriteFailed)?;
        clock.set_low().map_err(|_| DriverError::WriteFailed)?;
    }
    Ok(())
}

// HD44780 Zeichen-Display (16x2) hinter einem PCF8574 I2C-Backpack
//
// Das Display läuft im 4-Bit-Modus. Jedes Nibble wird als zwei I2C-Bytes
// geschrieben (EN high, EN low); die I2C-Übertragung selbst ist lang genug
// für die Enable-Pulsbreite.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use terminal_core::{CharDisplay, DriverError, LCD_WIDTH};

// PCF8574 Pin-Belegung des Backpacks
const PIN_RS: u8 = 0x01;
const PIN_EN: u8 = 0x04;
const PIN_BACKLIGHT: u8 = 0x08;

// HD44780 Kommandos
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM-Startadresse pro Zeile
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// LCD-Writer über I2C
pub struct Hd44780I2c<I, D> {
    i2c: I,
    delay: D,
    address: u8,
}

impl<I: I2c, D: DelayNs> Hd44780I2c<I, D> {
    /// Erstellt den Writer. Das Display ist erst nach `init()` benutzbar.
    pub fn new(i2c: I, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Initialisierungssequenz laut Datenblatt (Reset per Instruction)
    pub fn init(&mut self) -> Result<(), DriverError> {
        self.delay.delay_ms(50);

        // Dreimal 8-Bit-Modus, dann auf 4 Bit umschalten
        self.write_nibble(0x30, false)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, false)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, false)?;

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        self.command(CMD_ENTRY_MODE_INCREMENT)
    }

    fn write_nibble(&mut self, nibble: u8, register_select: bool) -> Result<(), DriverError> {
        let mut data = (nibble & 0xF0) | PIN_BACKLIGHT;
        if register_select {
            data |= PIN_RS;
        }
        self.i2c
            .write(self.address, &[data | PIN_EN, data])
            .map_err(|_| DriverError::WriteFailed)
    }

    fn send(&mut self, byte: u8, register_select: bool) -> Result<(), DriverError> {
        self.write_nibble(byte & 0xF0, register_select)?;
        self.write_nibble(byte << 4, register_select)?;
        // Ausführungszeit eines Befehls (37 µs)
        self.delay.delay_us(40);
        Ok(())
    }

    fn command(&mut self, command: u8) -> Result<(), DriverError> {
        self.send(command, false)
    }
}

impl<I: I2c, D: DelayNs> CharDisplay for Hd44780I2c<I, D> {
    fn write_text(&mut self, row: u8, text: &[u8; LCD_WIDTH]) -> Result<(), DriverError> {
        let offset = ROW_OFFSETS[usize::from(row.min(1))];
        self.command(CMD_SET_DDRAM | offset)?;
        for &byte in text {
            self.send(byte, true)?;
        }
        Ok(())
    }
}

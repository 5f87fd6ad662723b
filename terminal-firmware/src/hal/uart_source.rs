// Nicht-blockierende Byte-Quelle über UART

use esp_hal::Blocking;
use esp_hal::uart::Uart;
use terminal_core::SerialSource;

/// UART-Empfänger für die Host-Verbindung
///
/// Liest nur Bytes, die bereits im RX-FIFO liegen, und blockiert nie.
/// Bytes mit Empfangsfehler (Framing, Parity) werden verworfen.
pub struct UartSource<'d> {
    uart: Uart<'d, Blocking>,
}

impl<'d> UartSource<'d> {
    pub fn new(uart: Uart<'d, Blocking>) -> Self {
        Self { uart }
    }
}

impl SerialSource for UartSource<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        if !self.uart.read_ready() {
            return None;
        }

        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

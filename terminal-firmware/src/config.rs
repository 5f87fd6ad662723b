// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use terminal_core::{Polarity, TerminalConfig};

// ============================================================================
// Serial Konfiguration
// ============================================================================

/// Baudrate der Verbindung zum Text-Host
pub const SERIAL_BAUD: u32 = 9600;

/// GPIO-Pin UART1 RX (vom Host)
pub const UART_RX_GPIO_PIN: u8 = 4;

/// GPIO-Pin UART1 TX (unbenutzt, aber vom Treiber verlangt)
pub const UART_TX_GPIO_PIN: u8 = 5;

// ============================================================================
// LCD Konfiguration (HD44780 hinter PCF8574 I2C-Backpack)
// ============================================================================

/// I2C-Adresse des PCF8574 Backpacks
/// Übliche Werte: 0x27 (PCF8574T) oder 0x3F (PCF8574AT)
pub const LCD_I2C_ADDRESS: u8 = 0x27;

/// I2C SDA Pin
pub const LCD_SDA_GPIO_PIN: u8 = 6;

/// I2C SCL Pin
pub const LCD_SCL_GPIO_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz
pub const LCD_I2C_FREQUENCY_KHZ: u32 = 100;

// ============================================================================
// Dot-Matrix Konfiguration (MAX7219, bit-banged)
// ============================================================================

/// MAX7219 DIN Pin
pub const MATRIX_DIN_GPIO_PIN: u8 = 19;

/// MAX7219 CS/LOAD Pin
pub const MATRIX_CS_GPIO_PIN: u8 = 20;

/// MAX7219 CLK Pin
pub const MATRIX_CLK_GPIO_PIN: u8 = 21;

/// Helligkeit der Matrix (0-15)
/// Wert ist gedimmt für Augenschonung
pub const MATRIX_INTENSITY: u8 = 2;

// ============================================================================
// 7-Segment Konfiguration (74HC595)
// ============================================================================

/// 74HC595 DS (Data) Pin
pub const SEGMENT_DATA_GPIO_PIN: u8 = 1;

/// 74HC595 SH_CP (Clock) Pin
pub const SEGMENT_CLOCK_GPIO_PIN: u8 = 2;

/// 74HC595 ST_CP (Latch) Pin
pub const SEGMENT_LATCH_GPIO_PIN: u8 = 3;

// ============================================================================
// Bewegungssensor Konfiguration
// ============================================================================

/// PIR-Sensor Eingang
pub const MOTION_SENSOR_GPIO_PIN: u8 = 22;

/// Indikator-LED Ausgang
pub const INDICATOR_GPIO_PIN: u8 = 23;

/// Aktiver Pegel des Sensors
/// Wird zur Build-Zeit aus der Environment Variable MOTION_SENSOR_POLARITY geladen
/// ("high" oder "low", Default: high). Setze diese in .env file (siehe .env.example)
pub fn motion_polarity() -> Polarity {
    match option_env!("MOTION_SENSOR_POLARITY") {
        Some("low") | Some("active_low") => Polarity::ActiveLow,
        _ => Polarity::ActiveHigh,
    }
}

// ============================================================================
// Scheduler Konfiguration
// ============================================================================

/// Scheduler-Konfiguration mit Referenz-Intervallen (350/80/50 ms)
pub fn terminal_config() -> TerminalConfig {
    TerminalConfig::new(motion_polarity())
}

// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{error, info};

// Projekt-Module und Konfiguration
use status_terminal::config::{
    INDICATOR_GPIO_PIN, LCD_I2C_ADDRESS, LCD_I2C_FREQUENCY_KHZ, LCD_SCL_GPIO_PIN,
    LCD_SDA_GPIO_PIN, MATRIX_CLK_GPIO_PIN, MATRIX_CS_GPIO_PIN, MATRIX_DIN_GPIO_PIN,
    MATRIX_INTENSITY, MOTION_SENSOR_GPIO_PIN, SEGMENT_CLOCK_GPIO_PIN, SEGMENT_DATA_GPIO_PIN,
    SEGMENT_LATCH_GPIO_PIN, SERIAL_BAUD, UART_RX_GPIO_PIN, UART_TX_GPIO_PIN, terminal_config,
};
use status_terminal::hal::{
    GpioIndicator, GpioMotionSensor, Hc595Digit, Hd44780I2c, Max7219, UartSource,
};
use status_terminal::tasks::terminal_task;
use status_terminal::{Devices, Scheduler};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt den
/// Terminal Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Serial vom Text-Host (UART1, 9600 Baud, 8N1)
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(SERIAL_BAUD),
    )
    .expect("Failed to initialize UART")
    .with_rx(peripherals.GPIO4)
    .with_tx(peripherals.GPIO5);

    // LCD über I2C0
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(LCD_I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);
    let mut lcd = Hd44780I2c::new(i2c, Delay::new(), LCD_I2C_ADDRESS);

    // Dot-Matrix (MAX7219): DIN, CS, CLK
    let mut matrix = Max7219::new(
        Output::new(peripherals.GPIO19, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO20, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO21, Level::Low, OutputConfig::default()),
    );

    // 7-Segment (74HC595): Data, Clock, Latch
    let mut segments = Hc595Digit::new(
        Output::new(peripherals.GPIO1, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO3, Level::High, OutputConfig::default()),
    );

    // Bewegungssensor + Indikator-LED
    let sensor = GpioMotionSensor::new(Input::new(
        peripherals.GPIO22,
        InputConfig::default().with_pull(Pull::Down),
    ));
    let indicator = GpioIndicator::new(Output::new(
        peripherals.GPIO23,
        Level::Low,
        OutputConfig::default(),
    ));

    // Peripherie initialisieren - Fehler sind nicht fatal, der Scheduler
    // schreibt ohnehin periodisch neu
    if lcd.init().is_err() {
        error!("LCD init failed (I2C address {:#x})", LCD_I2C_ADDRESS);
    }
    if matrix.init(MATRIX_INTENSITY).is_err() {
        error!("Matrix init failed");
    }
    if segments.init().is_err() {
        error!("Segment display init failed");
    }

    // Scheduler ist wegen der Text-Buffer zu groß für den Task-Stack
    static SCHEDULER: static_cell::StaticCell<Scheduler> = static_cell::StaticCell::new();
    let scheduler = SCHEDULER.init(Scheduler::new(terminal_config()));

    info!("Status terminal ready");
    info!(
        "  UART1: RX GPIO{}, TX GPIO{}, {} baud",
        UART_RX_GPIO_PIN, UART_TX_GPIO_PIN, SERIAL_BAUD
    );
    info!("  LCD: SDA GPIO{}, SCL GPIO{}", LCD_SDA_GPIO_PIN, LCD_SCL_GPIO_PIN);
    info!(
        "  Matrix: DIN GPIO{}, CS GPIO{}, CLK GPIO{}",
        MATRIX_DIN_GPIO_PIN, MATRIX_CS_GPIO_PIN, MATRIX_CLK_GPIO_PIN
    );
    info!(
        "  Digit: DS GPIO{}, SH_CP GPIO{}, ST_CP GPIO{}",
        SEGMENT_DATA_GPIO_PIN, SEGMENT_CLOCK_GPIO_PIN, SEGMENT_LATCH_GPIO_PIN
    );
    info!(
        "  Sensor: GPIO{}, Indicator: GPIO{}",
        MOTION_SENSOR_GPIO_PIN, INDICATOR_GPIO_PIN
    );

    let devices = Devices {
        serial: UartSource::new(uart),
        lcd,
        matrix,
        segments,
        indicator,
        sensor,
    };

    // Spawn Terminal Task (Super-Loop über alle Peripherie)
    spawner.spawn(terminal_task(scheduler, devices)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Terminal Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

// Monotone Millisekunden-Uhr auf Basis von embassy-time

use embassy_time::Instant;
use terminal_core::Clock;

/// Clock-Implementierung über den esp-rtos Time-Driver
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

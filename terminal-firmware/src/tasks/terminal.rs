// Terminal Task - Super-Loop über alle Peripherie
use defmt::{debug, error, info, warn};
use embassy_futures::yield_now;

use crate::TerminalDevices;
use crate::hal::EmbassyClock;
use terminal_core::{
    CharDisplay, Clock, Devices, DisplayState, IndicatorWriter, MatrixWriter, MotionSensor,
    RouteOutcome, Scheduler, SegmentWriter, SerialSource, TickReport,
};

/// Terminal Logic - Testbare Hauptschleife ohne Hardware-Abhängigkeit
///
/// Jede Iteration ist ein Scheduler-Tick:
/// - Serial lesen und fertige Zeilen routen
/// - LCD-, Matrix- und Sensor-Task, jeweils nur wenn fällig
/// - 7-Segment-Ziffer in jedem Tick
///
/// Danach wird die CPU kurz an den Executor zurückgegeben. Es gibt keine
/// weiteren Tasks, die Schleife läuft also praktisch ohne Pause.
///
/// # Trait-basierte Abstraktion
/// Alle Peripherie kommt über die Traits aus terminal-core:
/// - Real Hardware (UartSource, Hd44780I2c, ...) im Production-Code
/// - Mock Implementation in terminal-tests
pub async fn terminal_logic<C, R, L, M, G, I, S>(
    scheduler: &mut Scheduler,
    mut devices: Devices<R, L, M, G, I, S>,
    clock: C,
) where
    C: Clock,
    R: SerialSource,
    L: CharDisplay,
    M: MatrixWriter,
    G: SegmentWriter,
    I: IndicatorWriter,
    S: MotionSensor,
{
    let config = *scheduler.config();
    info!(
        "Terminal loop started (lcd {}ms, matrix {}ms, motion {}ms, {})",
        config.lcd_interval_ms,
        config.matrix_interval_ms,
        config.motion_interval_ms,
        config.polarity
    );

    loop {
        let report = scheduler.tick(clock.now_ms(), &mut devices);
        log_report(&report, scheduler.state());

        // Kooperativ: gibt CPU an den Executor zurück
        yield_now().await;
    }
}

/// Schreibt die Ereignisse eines Ticks ins Log
fn log_report(report: &TickReport, state: &DisplayState) {
    for line in &report.lines {
        if line.truncated > 0 {
            warn!("Line too long, {} bytes dropped", line.truncated);
        }
        match line.outcome {
            RouteOutcome::Updated {
                field,
                len,
                dropped,
            } => {
                info!("{} updated ({} bytes)", field, len);
                if dropped > 0 {
                    warn!("{} truncated, {} bytes dropped", field, dropped);
                }
            }
            RouteOutcome::Staged { field, len } => {
                debug!("{} chunk staged ({} bytes total)", field, len);
            }
            RouteOutcome::Ignored => debug!("Unrecognized line ignored"),
        }
    }

    if let Some(sample) = report.motion
        && sample.rising
    {
        info!("Motion detected (count {})", state.motion_count);
    }

    for fault in &report.faults {
        error!("Driver fault: {} {}", fault.device, fault.error);
    }
}

/// Terminal Task - Embassy Task für den Super-Loop
///
/// Übernimmt den fertig initialisierten Scheduler und die Treiber und ruft
/// die testbare `terminal_logic()` Funktion auf.
///
/// # Parameter
/// - `scheduler`: Scheduler mit Anzeige-Zustand (StaticCell, zu groß für den Task-Stack)
/// - `devices`: Alle initialisierten Peripherie-Treiber
#[embassy_executor::task]
pub async fn terminal_task(scheduler: &'static mut Scheduler, devices: TerminalDevices) {
    terminal_logic(scheduler, devices, EmbassyClock).await;
}

// Strip Refresh Task - Steuert den LPD6803 Strip per Bit-Banging
use defmt::{debug, info};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::{GPIO4, GPIO5};
use lpd_core::{Cell, LineWriter, StripTransmitter, rotate_colors};

use crate::config::{
    CELL_COUNT, DEMO_INTENSITY, LED_CLOCK_GPIO_PIN, LED_DATA_GPIO_PIN, REFRESH_INTERVAL_MS,
};
use crate::demo_pattern;
use crate::hal::gpio_strip_lines;

/// Strip Refresh Logic - Control-Loop ohne Hardware-Abhängigkeit
///
/// - Füllt den Strip einmal mit dem Rot/Grün/Blau Demo-Muster
/// - Schiebt das Muster jeden Tick eine Zelle weiter
/// - Sendet danach synchron einen kompletten Refresh
///
/// Der Refresh selbst hat keine Await-Punkte: Start, alle Frames und End
/// laufen am Stück durch, erst danach gibt der Task die CPU ab.
///
/// # Parameter
/// - `strip`: Transmitter mit den Leitungen (Hardware oder Mock)
/// - `cells`: Zellen-Array, gehört dem Aufrufer
pub async fn strip_refresh_logic<W: LineWriter>(
    mut strip: StripTransmitter<W>,
    cells: &mut [Cell],
) {
    demo_pattern(cells, DEMO_INTENSITY);
    info!("Demo pattern loaded: {} cells", cells.len());

    let mut tick: u32 = 0;
    loop {
        strip.refresh(cells);
        rotate_colors(cells);

        tick = tick.wrapping_add(1);
        if tick % 100 == 0 {
            debug!("Refresh #{}", tick);
        }

        Timer::after(Duration::from_millis(REFRESH_INTERVAL_MS)).await;
    }
}

/// Strip Refresh Task - Embassy Task
///
/// Übernimmt die GPIO-Initialisierung und ruft dann die testbare
/// `strip_refresh_logic()` auf.
///
/// # Parameter
/// - `data_pin`: GPIO4 Peripheral für die Datenleitung
/// - `clock_pin`: GPIO5 Peripheral für die Taktleitung
/// - `cells`: statisches Zellen-Array aus `main`
#[embassy_executor::task]
pub async fn strip_refresh_task(
    data_pin: GPIO4<'static>,
    clock_pin: GPIO5<'static>,
    cells: &'static mut [Cell; CELL_COUNT],
) {
    info!(
        "LPD6803 strip on GPIO{} (data) / GPIO{} (clock)",
        LED_DATA_GPIO_PIN, LED_CLOCK_GPIO_PIN
    );

    let strip = StripTransmitter::new(gpio_strip_lines(data_pin, clock_pin));

    strip_refresh_logic(strip, cells).await;
}

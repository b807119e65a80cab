// GPIO-Leitungen für den LPD6803 Strip
//
// Daten und Takt sind zwei normale Push-Pull Ausgänge. Das Timing ergibt
// sich allein aus der Folge der Schreibzugriffe, es gibt keine Delays.

use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO4, GPIO5};
use lpd_core::PinLines;

/// Real Hardware Leitungen: zwei esp-hal `Output`s
///
/// `Output` implementiert embedded-hal `OutputPin` mit `Error = Infallible`
/// und passt damit direkt in `PinLines`.
pub type GpioStripLines<'d> = PinLines<Output<'d>, Output<'d>>;

/// Konfiguriert beide Pins als Ausgang, Startpegel Low
///
/// # Parameter
/// - `data_pin`: GPIO4 für die serielle Datenleitung
/// - `clock_pin`: GPIO5 für die Taktleitung
pub fn gpio_strip_lines<'d>(data_pin: GPIO4<'d>, clock_pin: GPIO5<'d>) -> GpioStripLines<'d> {
    let data = Output::new(data_pin, Level::Low, OutputConfig::default());
    let clock = Output::new(clock_pin, Level::Low, OutputConfig::default());
    PinLines::new(data, clock)
}

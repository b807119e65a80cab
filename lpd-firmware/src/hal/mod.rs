// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul bindet die ESP32-GPIOs an den LineWriter-Trait aus lpd-core,
// damit die Refresh-Logik ohne Hardware testbar bleibt.

pub mod strip_lines;

pub use strip_lines::{GpioStripLines, gpio_strip_lines};

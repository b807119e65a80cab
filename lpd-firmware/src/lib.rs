// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von lpd-core
pub use lpd_core::{Cell, LineWriter, StripTransmitter, rotate_colors};

// RGB Farb-Typ (direkt von rgb crate)
use rgb::RGB8;

// ============================================================================
// Firmware-spezifische Helper
// ============================================================================

/// Füllt die Zellen abwechselnd mit Rot, Grün und Blau
///
/// `intensity` ist ein 5-Bit Wert (0-31), höhere Bits schneidet der
/// Encoder ab.
pub fn demo_pattern(cells: &mut [Cell], intensity: u8) {
    let palette = [
        RGB8 {
            r: intensity,
            g: 0,
            b: 0,
        },
        RGB8 {
            r: 0,
            g: intensity,
            b: 0,
        },
        RGB8 {
            r: 0,
            g: 0,
            b: intensity,
        },
    ];
    for (cell, color) in cells.iter_mut().zip(palette.iter().cycle()) {
        cell.set_rgb(*color);
    }
}

//! LED-Zelle: drei 5-Bit Farbkanäle plus ihr serialisierter Frame
//!
//! Die Zelle ist ein reiner Wert. Das Array aller Zellen gehört dem
//! Aufrufer, der Core allokiert oder hält selbst keine Zellen.

use rgb::RGB8;

use crate::encoder;
use crate::frame::Frame;

/// Eine adressierbare LED-Einheit
///
/// `red`, `green` und `blue` werden so gespeichert wie übergeben. Nur die
/// unteren 5 Bits landen im Frame, Werte ab 32 werden beim Encodieren
/// abgeschnitten (nicht abgelehnt).
///
/// Der Frame ist ein Cache: jede Farbänderung encodiert sofort neu, und
/// `StripTransmitter::refresh` encodiert vor dem Senden noch einmal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CellColor", into = "CellColor")
)]
pub struct Cell {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
    pub(crate) frame: Frame,
}

impl Cell {
    /// Erstellt eine Zelle mit allen Kanälen auf 0 und gelöschtem Frame
    pub const fn new() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            frame: Frame::CLEARED,
        }
    }

    /// Erstellt eine Zelle mit Farbe, Frame ist bereits encodiert
    pub fn with_color(red: u8, green: u8, blue: u8) -> Self {
        let mut cell = Self::new();
        cell.set_color(red, green, blue);
        cell
    }

    /// Setzt alle drei Kanäle und encodiert den Frame neu
    ///
    /// ```
    /// # use lpd_core::Cell;
    /// let mut cell = Cell::new();
    /// cell.set_color(0, 31, 0);
    /// assert_eq!(cell.frame().to_word(), 0x801F);
    /// ```
    pub fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.encode();
    }

    /// Wie [`Cell::set_color`], aber aus einem `RGB8`
    ///
    /// Die Werte werden NICHT skaliert, nur maskiert. Für 8-Bit Farben
    /// vorher `pattern::to_five_bit` benutzen.
    pub fn set_rgb(&mut self, color: RGB8) {
        self.set_color(color.r, color.g, color.b);
    }

    /// Encodiert den Frame aus `red/green/blue` neu
    pub fn encode(&mut self) {
        encoder::encode(self);
    }

    /// Schreibt den Frame aus einem gepackten 15-Bit Code
    ///
    /// Die Kanäle bleiben dabei unverändert, siehe [`encoder::encode_from_raw`].
    pub fn encode_from_raw(&mut self, code: u16) {
        encoder::encode_from_raw(self, code);
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Gespeicherte Kanäle als `RGB8` (ungemaskt)
    pub fn color(&self) -> RGB8 {
        RGB8 {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RGB8> for Cell {
    fn from(color: RGB8) -> Self {
        Self::with_color(color.r, color.g, color.b)
    }
}

// ============================================================================
// serde: nur die Kanäle werden serialisiert, der Frame wird neu berechnet
// ============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CellColor {
    red: u8,
    green: u8,
    blue: u8,
}

#[cfg(feature = "serde")]
impl From<CellColor> for Cell {
    fn from(color: CellColor) -> Self {
        Self::with_color(color.red, color.green, color.blue)
    }
}

#[cfg(feature = "serde")]
impl From<Cell> for CellColor {
    fn from(cell: Cell) -> Self {
        Self {
            red: cell.red,
            green: cell.green,
            blue: cell.blue,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Cell {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Cell {{ rgb: ({}, {}, {}), frame: {} }}",
            self.red,
            self.green,
            self.blue,
            self.frame
        )
    }
}

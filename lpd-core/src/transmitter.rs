//! Strip-Transmitter: Start-, Daten- und End-Segment auf zwei Leitungen
//!
//! Ablauf pro Refresh: `Idle → Start → (Frame)* → End → Idle`.
//! Ein Refresh läuft synchron bis zum Ende durch. Da er `&mut self` braucht,
//! kann er nicht während seiner eigenen Ausführung erneut starten.
//!
//! | Segment | Inhalt                         | Länge            |
//! |---------|--------------------------------|------------------|
//! | Start   | Daten = 0, Takt gepulst        | 32 Pulse         |
//! | Frame   | Flag + 15 Farbbits, MSB zuerst | 16 Bit pro Zelle |
//! | End     | Daten = 0, Takt gepulst        | 1 Puls pro Zelle |

use crate::cell::Cell;
use crate::frame::Frame;
use crate::traits::{Line, LineWriter};

/// Anzahl Takt-Pulse im Start-Segment (fest, unabhängig von der Strip-Länge)
pub const START_PULSES: usize = 32;

/// Treibt einen LPD6803 Strip über einen [`LineWriter`]
///
/// Der Transmitter besitzt die Leitungen exklusiv, solange er lebt.
/// Mit [`StripTransmitter::release`] bekommt man sie zurück.
pub struct StripTransmitter<W> {
    lines: W,
}

impl<W: LineWriter> StripTransmitter<W> {
    pub fn new(lines: W) -> Self {
        Self { lines }
    }

    pub fn release(self) -> W {
        self.lines
    }

    /// Start-Segment: Daten auf Low, dann 32 Takt-Pulse
    pub fn emit_start(&mut self) {
        self.hold_data_low();
        self.pulse_clock_times(START_PULSES);
    }

    /// Sendet einen Frame MSB zuerst (Index 15 bis 0), ein Takt-Puls pro Bit
    pub fn emit_frame(&mut self, frame: &Frame) {
        for bit in frame.msb_first() {
            self.lines.set_line(Line::Data, bit);
            self.pulse_clock();
        }
    }

    /// End-Segment: Daten auf Low, dann ein Takt-Puls pro Zelle
    ///
    /// Der LPD6803 braucht diese Pulse, um den letzten Frame bis zur letzten
    /// LED durchzuschieben.
    pub fn emit_end(&mut self, cell_count: usize) {
        self.hold_data_low();
        self.pulse_clock_times(cell_count);
    }

    /// Kompletter Strip-Refresh
    ///
    /// Jede Zelle wird direkt vor dem Senden neu encodiert, ein per
    /// `encode_from_raw` gesetzter Frame wird dabei überschrieben.
    ///
    /// ```
    /// # use lpd_core::{Cell, Line, LineWriter, StripTransmitter};
    /// struct Count(usize);
    /// impl LineWriter for Count {
    ///     fn set_line(&mut self, line: Line, high: bool) {
    ///         if line == Line::Clock && high {
    ///             self.0 += 1;
    ///         }
    ///     }
    /// }
    ///
    /// let mut cells = [Cell::with_color(31, 0, 0); 3];
    /// let mut strip = StripTransmitter::new(Count(0));
    /// strip.refresh(&mut cells);
    /// assert_eq!(strip.release().0, 32 + 3 * 16 + 3);
    /// ```
    pub fn refresh(&mut self, cells: &mut [Cell]) {
        #[cfg(feature = "defmt")]
        defmt::trace!("LPD6803 refresh: {} cells", cells.len());

        self.emit_start();
        for cell in cells.iter_mut() {
            cell.encode();
            self.emit_frame(cell.frame());
        }
        self.emit_end(cells.len());
    }

    fn hold_data_low(&mut self) {
        self.lines.set_line(Line::Clock, false);
        self.lines.set_line(Line::Data, false);
    }

    fn pulse_clock(&mut self) {
        self.lines.set_line(Line::Clock, true);
        self.lines.set_line(Line::Clock, false);
    }

    fn pulse_clock_times(&mut self, count: usize) {
        for _ in 0..count {
            self.pulse_clock();
        }
    }
}

// ============================================================================
// smart-leds Integration (optional feature)
// ============================================================================

#[cfg(feature = "smart-leds")]
impl<W: LineWriter> smart_leds_trait::SmartLedsWrite for StripTransmitter<W> {
    type Error = core::convert::Infallible;
    type Color = rgb::RGB8;

    /// Sendet 8-Bit Farben als kompletten Refresh
    ///
    /// Jede Farbe wird auf 5 Bit herunterskaliert (`>> 3`), das End-Segment
    /// bekommt so viele Pulse wie Farben geliefert wurden.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.emit_start();
        let mut count = 0;
        for item in iterator {
            let color = crate::pattern::to_five_bit(item.into());
            self.emit_frame(&crate::encoder::pack_channels(color.r, color.g, color.b));
            count += 1;
        }
        self.emit_end(count);
        Ok(())
    }
}

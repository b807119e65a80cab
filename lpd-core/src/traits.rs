//! Hardware Abstraction Traits
//!
//! Der Strip-Transmitter kennt keine Register. Er schreibt nur über
//! [`LineWriter`] auf zwei Leitungen, die Implementierung liefert der
//! Aufrufer (echte GPIOs oder ein Mock im Test).

/// Die beiden Ausgangsleitungen des LPD6803-Busses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Serielle Daten (SDO)
    Data,
    /// Takt (SCLK)
    Clock,
}

/// Trait für den Zugriff auf die Ausgangsleitungen
///
/// # Vertrag
/// - synchron: der Pegel liegt an, bevor der nächste Aufruf wirkt
/// - keine Pufferung, keine Umsortierung
/// - unfehlbar: Fehler der Hardware muss die Implementierung selbst
///   behandeln, der Transmitter sieht keine
///
/// # Implementierungen
/// - **Production:** [`PinLines`](crate::PinLines) über zwei embedded-hal `OutputPin`s
/// - **Testing:** RecordingLines (in-memory Mock in `lpd-tests`)
pub trait LineWriter {
    /// Setzt `line` auf High (`true`) oder Low (`false`)
    fn set_line(&mut self, line: Line, high: bool);
}

impl<W: LineWriter + ?Sized> LineWriter for &mut W {
    fn set_line(&mut self, line: Line, high: bool) {
        (**self).set_line(line, high);
    }
}

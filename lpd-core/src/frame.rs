//! 16-Bit Frame für LPD6803 LED-Zellen
//!
//! Ein Frame ist das serialisierte Abbild einer Zelle auf der Leitung:
//! Index 15 ist das Flag-Bit (immer 1), darunter folgen Blau, Rot und Grün
//! mit je 5 Bit. Absteigender Index = absteigende Wertigkeit.

use core::ops::Index;

/// Anzahl Bits pro Frame
pub const FRAME_BITS: usize = 16;

/// Index des Flag-Bits (Protokoll verlangt hier immer 1)
pub const FLAG_INDEX: usize = 15;

/// Bits pro Farbkanal
pub const CHANNEL_BITS: usize = 5;

/// Maske für die gültigen Bits eines Farbkanals
pub const CHANNEL_MASK: u8 = 0x1F;

/// Höchste darstellbare Intensität eines Kanals
pub const MAX_INTENSITY: u8 = CHANNEL_MASK;

/// Start-Index des Grün-Segments (Indizes 0-4)
pub const GREEN_OFFSET: usize = 0;

/// Start-Index des Rot-Segments (Indizes 5-9)
pub const RED_OFFSET: usize = 5;

/// Start-Index des Blau-Segments (Indizes 10-14)
pub const BLUE_OFFSET: usize = 10;

/// Maske für die 15 Farbbits eines gepackten Codes
const COLOR_BITS_MASK: u16 = 0x7FFF;

/// Fester 16-Bit Frame einer LED-Zelle
///
/// Invariante: `frame[FLAG_INDEX]` ist immer `true`. Alle Konstruktoren
/// setzen das Flag, es gibt keinen Weg es zu löschen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bits: [bool; FRAME_BITS],
}

impl Frame {
    /// Frame einer frisch initialisierten Zelle: nur das Flag-Bit ist gesetzt
    pub const CLEARED: Frame = {
        let mut bits = [false; FRAME_BITS];
        bits[FLAG_INDEX] = true;
        Frame { bits }
    };

    /// Erstellt einen Frame aus einem gepackten Wort
    ///
    /// Bit `i` des Worts landet auf Index `i`. Bit 15 wird ignoriert und
    /// immer auf 1 gesetzt.
    ///
    /// ```
    /// # use lpd_core::Frame;
    /// let frame = Frame::from_word(0x0000);
    /// assert_eq!(frame, Frame::CLEARED);
    /// assert_eq!(Frame::from_word(0x7FFF).to_word(), 0xFFFF);
    /// ```
    pub fn from_word(word: u16) -> Self {
        let mut frame = Self::CLEARED;
        for index in 0..FLAG_INDEX {
            frame.bits[index] = word & (1u16 << index) != 0;
        }
        frame
    }

    /// Packt den Frame in ein `u16` (Index `i` = Bit `i`)
    pub fn to_word(&self) -> u16 {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .fold(0u16, |word, (index, _)| word | (1u16 << index))
    }

    /// Liefert das Bit an `index` (0 = LSB, 15 = Flag)
    ///
    /// Panics bei `index >= FRAME_BITS`, wie ein Array-Zugriff.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn bits(&self) -> &[bool; FRAME_BITS] {
        &self.bits
    }

    /// Iteriert in Leitungsreihenfolge: Index 15 zuerst, Index 0 zuletzt
    pub fn msb_first(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().rev().copied()
    }

    /// Liest die 5 Bits eines Kanal-Segments zurück
    pub fn channel(&self, offset: usize) -> u8 {
        (0..CHANNEL_BITS)
            .filter(|bit| self.bits[offset + bit])
            .fold(0u8, |value, bit| value | (1u8 << bit))
    }

    /// Schreibt die unteren 5 Bits von `value` in das Segment ab `offset`
    ///
    /// Höhere Bits werden stillschweigend verworfen.
    pub(crate) fn write_channel(&mut self, offset: usize, value: u8) {
        for bit in 0..CHANNEL_BITS {
            self.bits[offset + bit] = value & (1u8 << bit) != 0;
        }
    }

    /// Baut einen Frame aus drei Kanälen (jeweils untere 5 Bits)
    pub(crate) fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        let mut frame = Self::CLEARED;
        frame.write_channel(GREEN_OFFSET, green);
        frame.write_channel(RED_OFFSET, red);
        frame.write_channel(BLUE_OFFSET, blue);
        frame
    }

    /// Gepackter 15-Bit Farbcode ohne Flag
    pub fn color_code(&self) -> u16 {
        self.to_word() & COLOR_BITS_MASK
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::CLEARED
    }
}

impl Index<usize> for Frame {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Frame({=u16:#x})", self.to_word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_has_only_flag() {
        let frame = Frame::CLEARED;
        assert!(frame[FLAG_INDEX]);
        assert_eq!(frame.to_word(), 0x8000);
        assert_eq!(frame.color_code(), 0);
    }

    #[test]
    fn test_default_is_cleared() {
        assert_eq!(Frame::default(), Frame::CLEARED);
    }

    #[test]
    fn test_from_word_forces_flag() {
        let frame = Frame::from_word(0x0001);
        assert!(frame[FLAG_INDEX]);
        assert!(frame[0]);
        assert_eq!(frame.to_word(), 0x8001);
    }

    #[test]
    fn test_from_word_keeps_color_bits() {
        let frame = Frame::from_word(0b0101_0101_0101_0101);
        assert_eq!(frame.color_code(), 0b0101_0101_0101_0101);
        assert!(frame[FLAG_INDEX]);
    }

    #[test]
    fn test_msb_first_order() {
        let frame = Frame::from_word(0x0001);
        let mut iter = frame.msb_first();
        assert_eq!(iter.next(), Some(true)); // Flag
        for _ in 0..14 {
            assert_eq!(iter.next(), Some(false));
        }
        assert_eq!(iter.next(), Some(true)); // Index 0
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_write_channel_masks_high_bits() {
        let mut frame = Frame::CLEARED;
        frame.write_channel(RED_OFFSET, 0xFF);
        assert_eq!(frame.channel(RED_OFFSET), MAX_INTENSITY);
        assert_eq!(frame.channel(GREEN_OFFSET), 0);
        assert_eq!(frame.channel(BLUE_OFFSET), 0);
    }

    #[test]
    fn test_from_channels_segments() {
        let frame = Frame::from_channels(0b10000, 0b00001, 0b00011);
        assert_eq!(frame.channel(RED_OFFSET), 0b10000);
        assert_eq!(frame.channel(GREEN_OFFSET), 0b00001);
        assert_eq!(frame.channel(BLUE_OFFSET), 0b00011);
        assert!(frame[9]); // Rot Bit 4
        assert!(frame[0]); // Grün Bit 0
        assert!(frame[10] && frame[11]); // Blau Bit 0 und 1
    }
}

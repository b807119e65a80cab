//! Frame-Encoder: Farbkanäle → 16-Bit Frame
//!
//! Zwei Einstiegspunkte mit bewusst unterschiedlichem Verhalten:
//! - [`encode`] liest `red/green/blue` der Zelle und schreibt den Frame
//! - [`encode_from_raw`] schreibt den Frame aus einem gepackten Code und
//!   lässt `red/green/blue` unverändert (die Kanäle sind danach veraltet)

use crate::cell::Cell;
use crate::frame::Frame;

/// Berechnet `cell.frame` neu aus den unteren 5 Bits jedes Kanals
///
/// Total über alle `u8`-Werte: höhere Bits werden ignoriert, nicht geprüft.
/// Ändert nur den Frame.
///
/// ```
/// # use lpd_core::{Cell, encode};
/// let mut cell = Cell::with_color(31, 0, 0);
/// encode(&mut cell);
/// assert_eq!(cell.frame().to_word(), 0b1_00000_11111_00000);
/// ```
pub fn encode(cell: &mut Cell) {
    cell.frame = pack_channels(cell.red, cell.green, cell.blue);
}

/// Setzt Frame-Bits 0..14 direkt aus den Bits 0..14 von `code`, Bit 15 = 1
///
/// Achtung: `red/green/blue` der Zelle werden NICHT angepasst. Nach diesem
/// Aufruf liefern [`Cell::red`], [`Cell::green`] und [`Cell::blue`] die alten
/// Werte. Ein späteres [`encode`] (z.B. durch `refresh`) überschreibt den
/// Frame wieder aus diesen Kanälen.
pub fn encode_from_raw(cell: &mut Cell, code: u16) {
    cell.frame = Frame::from_word(code);
}

/// Packt drei Kanäle in einen Frame ohne Zelle
pub fn pack_channels(red: u8, green: u8, blue: u8) -> Frame {
    Frame::from_channels(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{BLUE_OFFSET, FLAG_INDEX, GREEN_OFFSET, RED_OFFSET};

    #[test]
    fn test_encode_zero_cell_sets_flag() {
        let mut cell = Cell::new();
        encode(&mut cell);
        assert_eq!(*cell.frame(), Frame::CLEARED);
        assert!(cell.frame()[FLAG_INDEX]);
    }

    #[test]
    fn test_encode_every_channel_value() {
        for value in 0..=u8::MAX {
            let expected = value % 32;
            for offset in [GREEN_OFFSET, RED_OFFSET, BLUE_OFFSET] {
                let (r, g, b) = match offset {
                    RED_OFFSET => (value, 0, 0),
                    GREEN_OFFSET => (0, value, 0),
                    _ => (0, 0, value),
                };
                let mut cell = Cell::with_color(r, g, b);
                encode(&mut cell);

                let frame = cell.frame();
                assert!(frame[FLAG_INDEX]);
                for bit in 0..5 {
                    assert_eq!(frame[offset + bit], expected & (1u8 << bit) != 0);
                }
                assert_eq!(frame.to_word() & !0x8000, (expected as u16) << offset);
            }
        }
    }

    #[test]
    fn test_encode_is_idempotent() {
        let mut cell = Cell::with_color(7, 19, 30);
        encode(&mut cell);
        let first = *cell.frame();
        encode(&mut cell);
        assert_eq!(*cell.frame(), first);
    }

    #[test]
    fn test_reencode_overwrites_all_bits() {
        let mut cell = Cell::new();
        cell.set_color(31, 31, 31);
        assert_eq!(cell.frame().to_word(), 0xFFFF);

        cell.set_color(0, 0, 0);
        assert_eq!(cell.frame().to_word(), 0x8000);
    }

    #[test]
    fn test_encode_from_raw_leaves_channels() {
        let mut cell = Cell::with_color(1, 2, 3);
        encode_from_raw(&mut cell, 0x7FFF);

        assert_eq!(cell.frame().to_word(), 0xFFFF);
        assert_eq!((cell.red(), cell.green(), cell.blue()), (1, 2, 3));
    }

    #[test]
    fn test_encode_from_raw_ignores_bit_15() {
        let mut cell = Cell::new();
        encode_from_raw(&mut cell, 0x8000);
        assert_eq!(*cell.frame(), Frame::CLEARED);
    }

    #[test]
    fn test_encode_restores_after_raw() {
        let mut cell = Cell::with_color(0, 31, 0);
        encode_from_raw(&mut cell, 0x7C00);
        encode(&mut cell);
        assert_eq!(cell.frame().to_word(), 0x801F);
    }
}

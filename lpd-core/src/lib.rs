//! LPD Core - Protokoll-Logik für LPD6803 LED-Strips
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den Frame-Encoder, den Strip-Transmitter und den
//! `LineWriter`-Trait, über den die Leitungen getrieben werden.

#![no_std]

pub mod cell;
pub mod encoder;
pub mod frame;
pub mod pattern;
pub mod pins;
pub mod traits;
pub mod transmitter;

// Re-exports für einfachen Zugriff
pub use cell::Cell;
pub use encoder::{encode, encode_from_raw, pack_channels};
pub use frame::{FRAME_BITS, Frame, MAX_INTENSITY};
pub use pattern::{fill, rotate_colors, to_five_bit};
pub use pins::PinLines;
pub use traits::{Line, LineWriter};
pub use transmitter::{START_PULSES, StripTransmitter};

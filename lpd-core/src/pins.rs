//! LineWriter-Adapter für embedded-hal Output-Pins

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::traits::{Line, LineWriter};

/// Bindet Daten- und Takt-Leitung an zwei embedded-hal `OutputPin`s
///
/// Nur Pins mit `Error = Infallible` sind erlaubt (z.B. `esp_hal::gpio::Output`),
/// weil der Transmitter keine Schreibfehler kennt.
pub struct PinLines<D, C> {
    data: D,
    clock: C,
}

impl<D, C> PinLines<D, C>
where
    D: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
{
    pub fn new(data: D, clock: C) -> Self {
        Self { data, clock }
    }

    /// Gibt die Pins zurück (Daten, Takt)
    pub fn release(self) -> (D, C) {
        (self.data, self.clock)
    }
}

impl<D, C> LineWriter for PinLines<D, C>
where
    D: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
{
    fn set_line(&mut self, line: Line, high: bool) {
        let result = match line {
            Line::Data => self.data.set_state(high.into()),
            Line::Clock => self.clock.set_state(high.into()),
        };
        if let Err(never) = result {
            match never {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct FakePin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_lines_map_to_pins() {
        let mut lines = PinLines::new(FakePin::default(), FakePin::default());

        lines.set_line(Line::Data, true);
        lines.set_line(Line::Clock, true);
        lines.set_line(Line::Clock, false);

        let (data, clock) = lines.release();
        assert!(data.high);
        assert_eq!(data.writes, 1);
        assert!(!clock.high);
        assert_eq!(clock.writes, 2);
    }
}

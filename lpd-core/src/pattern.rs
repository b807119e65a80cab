//! Pure Helper-Funktionen für Control-Loops
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::cell::Cell;

/// Skaliert eine 8-Bit Farbe auf 5 Bit pro Kanal (`>> 3`)
///
/// ```
/// # use rgb::RGB8;
/// # use lpd_core::to_five_bit;
/// let color = to_five_bit(RGB8 { r: 255, g: 128, b: 7 });
/// assert_eq!(color, RGB8 { r: 31, g: 16, b: 0 });
/// ```
pub fn to_five_bit(color: RGB8) -> RGB8 {
    RGB8 {
        r: color.r >> 3,
        g: color.g >> 3,
        b: color.b >> 3,
    }
}

/// Setzt alle Zellen auf dieselbe Farbe
pub fn fill(cells: &mut [Cell], color: RGB8) {
    for cell in cells.iter_mut() {
        cell.set_rgb(color);
    }
}

/// Schiebt jede Farbe eine Zelle weiter, die letzte wandert an den Anfang
///
/// Nach `cells.len()` Aufrufen steht wieder das Ausgangsmuster da.
pub fn rotate_colors(cells: &mut [Cell]) {
    let Some(last) = cells.last().map(Cell::color) else {
        return;
    };
    for index in (1..cells.len()).rev() {
        let previous = cells[index - 1].color();
        cells[index].set_rgb(previous);
    }
    cells[0].set_rgb(last);
}

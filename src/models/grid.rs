use crate::services::MappingStore;

/// Side length of the pad grid
pub const GRID_SIZE: usize = 8;

/// MIDI note of every pad, top row first.
///
/// Matches the controller's physical layout: the upper half counts down
/// from 99 in columns of four, the lower half from 67. Note 87 does not
/// appear; its slot in the top row is 100.
pub const PAD_LAYOUT: [[u8; GRID_SIZE]; GRID_SIZE] = [
    [99, 95, 91, 100, 83, 79, 75, 71],
    [98, 94, 90, 86, 82, 78, 74, 70],
    [97, 93, 89, 85, 81, 77, 73, 69],
    [96, 92, 88, 84, 80, 76, 72, 68],
    [67, 63, 59, 55, 51, 47, 43, 39],
    [66, 62, 58, 54, 50, 46, 42, 38],
    [65, 61, 57, 53, 49, 45, 41, 37],
    [64, 60, 56, 52, 48, 44, 40, 36],
];

/// The fixed 8x8 pad grid
pub struct Grid;

impl Grid {
    /// All pad notes in display order (row by row, left to right)
    pub fn pads() -> impl Iterator<Item = u8> {
        PAD_LAYOUT.into_iter().flatten()
    }

    /// Whether `pad` is one of the 64 grid notes
    pub fn contains(pad: u8) -> bool {
        Self::position(pad).is_some()
    }

    /// (row, column) of `pad`, row 0 at the top
    pub fn position(pad: u8) -> Option<(usize, usize)> {
        PAD_LAYOUT.iter().enumerate().find_map(|(row, notes)| {
            notes
                .iter()
                .position(|&note| note == pad)
                .map(|col| (row, col))
        })
    }

    /// Text view of the grid; pads with a clip are marked with `*`.
    pub fn render(store: &MappingStore) -> String {
        let mut out = String::new();
        for row in PAD_LAYOUT {
            let cells: Vec<String> = row
                .iter()
                .map(|&pad| {
                    let mark = if store.get(pad).is_some() { '*' } else { ' ' };
                    format!("{pad:>3}{mark}")
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }
        out
    }
}

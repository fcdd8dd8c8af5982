//! European wheel layout.
//!
//! The 37 pockets in physical order, starting at zero and reading clockwise.
//! Everything else in the crate addresses the wheel through positions in this
//! table, never through the pocket numbers themselves.

/// Number of pockets on a single-zero wheel.
pub const POCKETS: usize = 37;

/// Pocket numbers in wheel order.
pub const WHEEL_LAYOUT: [u8; POCKETS] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6,
    27, 13, 36, 11, 30, 8, 23, 10, 5, 24,
    16, 33, 1, 20, 14, 31, 9, 22, 18, 29,
    7, 28, 12, 35, 3, 26,
];

/// Zero-based position of `number` on the wheel, or `None` if it is not a pocket.
pub fn position_of(number: i64) -> Option<usize> {
    let number = u8::try_from(number).ok()?;
    WHEEL_LAYOUT.iter().position(|&pocket| pocket == number)
}

/// Pocket at a (possibly negative or overflowing) wheel position.
pub fn pocket_at(position: i64) -> u8 {
    WHEEL_LAYOUT[position.rem_euclid(POCKETS as i64) as usize]
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// One pocket of the visual wheel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayCell {
    pub number: u8,
    pub highlighted: bool,
}

/// Every pocket in wheel order, flagged when it belongs to `sector`.
pub fn overlay(sector: &[u8]) -> Vec<OverlayCell> {
    WHEEL_LAYOUT
        .iter()
        .map(|&number| OverlayCell {
            number,
            highlighted: sector.contains(&number),
        })
        .collect()
}

/// Render the overlay as a text grid, `columns` pockets per row.
/// Sector pockets are bracketed.
pub fn render_overlay(sector: &[u8], columns: usize) -> String {
    let cells = overlay(sector);
    cells
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|c| {
                    if c.highlighted {
                        format!("[{:>2}]", c.number)
                    } else {
                        format!(" {:>2} ", c.number)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

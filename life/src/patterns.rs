// patterns.rs - Well-known starting patterns and a plaintext reader

use crate::error::PatternError;
use crate::grid::{Cell, Grid};

/// A named shape, coordinates relative to its top-left corner (x right, y down).
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0), (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

impl Pattern {
    pub fn cells_at(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |&c| Cell::from(c).offset(origin))
    }

    /// Clears the grid, then places the pattern at `origin`.
    pub fn apply(&self, grid: &mut Grid, origin: Cell) {
        grid.clear();
        self.stamp(grid, origin);
    }

    /// Adds the pattern at `origin` on top of whatever is alive.
    pub fn stamp(&self, grid: &mut Grid, origin: Cell) {
        grid.extend(self.cells_at(origin));
        grid.reset_generation();
    }
}

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find(name: &str) -> Result<&'static Pattern, PatternError> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PatternError::Unknown(name.to_string()))
}

/// Reads a plaintext picture: `O`, `#` or `*` alive, `.` or space dead.
/// Lines starting with `!` are comments and do not advance `y`.
pub fn parse_plaintext(text: &str) -> Result<Vec<Cell>, PatternError> {
    let mut cells = Vec::new();
    let rows = text.lines().filter(|line| !line.starts_with('!'));

    for (y, line) in rows.enumerate() {
        for (x, ch) in line.chars().enumerate() {
            match ch {
                'O' | '#' | '*' => cells.push(Cell::new(x as i32, y as i32)),
                '.' | ' ' => {}
                _ => {
                    return Err(PatternError::BadChar {
                        line: y + 1,
                        column: x + 1,
                        ch,
                    });
                }
            }
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Ok("Glider"));
        assert_eq!(find(" r-PENTOMINO ").map(|p| p.name), Ok("R-pentomino"));
        assert_eq!(
            find("spaceship").map(|p| p.name),
            Err(PatternError::Unknown("spaceship".to_string()))
        );
    }

    #[test]
    fn apply_clears_but_stamp_keeps() {
        let blinker = find("Blinker").expect("built in");
        let mut grid = Grid::from_cells([(100, 100)]);

        blinker.stamp(&mut grid, Cell::new(0, 0));
        assert_eq!(grid.len(), 4);

        blinker.apply(&mut grid, Cell::new(-1, 5));
        assert_eq!(grid.len(), 3);
        assert!(grid.is_alive(-1, 5));
        assert!(grid.is_alive(1, 5));
        assert!(!grid.is_alive(100, 100));
    }

    #[test]
    fn patterns_have_unique_cells() {
        for pattern in PATTERNS {
            let grid = Grid::from_cells(pattern.cells.iter().copied());
            assert_eq!(grid.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn plaintext_matches_display() {
        let text = "! glider\n.#.\n..#\n###\n";
        let cells = parse_plaintext(text).expect("valid");
        let grid = Grid::from_cells(cells);
        assert_eq!(grid.to_string(), ".#.\n..#\n###\n");
    }

    #[test]
    fn plaintext_rejects_garbage() {
        assert_eq!(
            parse_plaintext("O.\n.x"),
            Err(PatternError::BadChar { line: 2, column: 2, ch: 'x' })
        );
    }
}

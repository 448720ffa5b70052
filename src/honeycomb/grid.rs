use tracing::warn;

use crate::error::ConfigError;

/// How a single grid position is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// No geometry.
    Empty,
    /// Hexagonal wall open at both ends.
    OpenFrame,
    /// Hexagonal wall with a thin floor.
    ClosedFrame,
    /// Closed frame holding a rounded hexagonal disc.
    FrameWithInfill,
}

impl CellStyle {
    /// Maps a numeric style code to its style.
    ///
    /// Codes are `0` empty, `1` open frame, `2` closed frame and `3` frame
    /// with infill.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::OpenFrame),
            2 => Some(Self::ClosedFrame),
            3 => Some(Self::FrameWithInfill),
            _ => None,
        }
    }

    /// Numeric code of this style.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::OpenFrame => 1,
            Self::ClosedFrame => 2,
            Self::FrameWithInfill => 3,
        }
    }

    /// Returns `true` if the style produces geometry.
    #[must_use]
    pub fn is_solid(self) -> bool {
        self != Self::Empty
    }
}

/// Treatment of unrecognized style codes while parsing a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StylePolicy {
    /// Render the cell as an open frame.
    #[default]
    Fallback,
    /// Fail with [`ConfigError::UnknownStyle`].
    Reject,
}

/// A jagged matrix of cell styles.
///
/// Row `y`, column `x` maps to lattice position `(x, y)`; rows may differ
/// in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<CellStyle>>,
}

impl Grid {
    /// Parses numeric style codes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStyle`] for an unrecognized code when
    /// `policy` is [`StylePolicy::Reject`].
    pub fn parse(rows: &[Vec<i32>], policy: StylePolicy) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (row, codes) in rows.iter().enumerate() {
            let mut styles = Vec::with_capacity(codes.len());
            for (column, &code) in codes.iter().enumerate() {
                let style = match (CellStyle::from_code(code), policy) {
                    (Some(style), _) => style,
                    (None, StylePolicy::Fallback) => {
                        warn!(code, row, column, "unknown cell style, using open frame");
                        CellStyle::OpenFrame
                    }
                    (None, StylePolicy::Reject) => {
                        return Err(ConfigError::UnknownStyle { code, row, column });
                    }
                };
                styles.push(style);
            }
            parsed.push(styles);
        }
        Ok(Self { rows: parsed })
    }

    /// Builds a grid from already-typed styles.
    #[must_use]
    pub fn from_styles(rows: Vec<Vec<CellStyle>>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellStyle>] {
        &self.rows
    }

    /// Iterates over the cells that produce geometry as `(x, y, style)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellStyle)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, style)| style.is_solid())
                .map(move |(x, &style)| (x, y, style))
        })
    }

    /// Number of cells that produce geometry.
    #[must_use]
    pub fn solid_cell_count(&self) -> usize {
        self.cells().count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..4 {
            assert_eq!(CellStyle::from_code(code).unwrap().code(), code);
        }
        assert_eq!(CellStyle::from_code(4), None);
        assert_eq!(CellStyle::from_code(-1), None);
    }

    #[test]
    fn unknown_code_falls_back_to_open_frame() {
        let grid = Grid::parse(&[vec![7, 0]], StylePolicy::Fallback).unwrap();
        assert_eq!(grid.rows()[0], vec![CellStyle::OpenFrame, CellStyle::Empty]);
    }

    #[test]
    fn unknown_code_rejected_with_position() {
        let err = Grid::parse(&[vec![1], vec![2, -3]], StylePolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownStyle {
                code: -3,
                row: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn cells_skip_empty_positions() {
        let grid = Grid::parse(&[vec![1, 0, 3], vec![], vec![0, 2]], StylePolicy::Reject).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, CellStyle::OpenFrame),
                (2, 0, CellStyle::FrameWithInfill),
                (1, 2, CellStyle::ClosedFrame),
            ]
        );
        assert_eq!(grid.solid_cell_count(), 3);
    }

    #[test]
    fn all_empty_grid_has_no_cells() {
        let grid = Grid::parse(&[vec![0, 0], vec![0]], StylePolicy::Fallback).unwrap();
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn typed_styles_match_parsed_codes() {
        use CellStyle::{ClosedFrame, Empty, FrameWithInfill, OpenFrame};
        let typed = Grid::from_styles(vec![
            vec![OpenFrame, Empty, FrameWithInfill],
            vec![ClosedFrame],
        ]);
        let parsed = Grid::parse(&[vec![1, 0, 3], vec![2]], StylePolicy::Reject).unwrap();
        assert_eq!(typed, parsed);
        assert_eq!(typed.solid_cell_count(), 3);
    }
}

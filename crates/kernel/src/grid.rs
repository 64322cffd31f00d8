use glam::Vec3;
use mazewalk_common::{CellCoord, Facing};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::path::Path;

/// What occupies a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Decode the numeric map encoding: 0 empty, 1 wall, 2 start, 3 end.
    pub fn from_code(code: u8) -> Option<CellKind> {
        match code {
            0 => Some(CellKind::Empty),
            1 => Some(CellKind::Wall),
            2 => Some(CellKind::Start),
            3 => Some(CellKind::End),
            _ => None,
        }
    }

    /// Glyph used when printing a map.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }

    pub fn is_passable(self) -> bool {
        self != CellKind::Wall
    }
}

/// Errors from building or loading a grid map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("map has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {glyph:?} on line {line}")]
    UnknownCell { line: usize, glyph: char },
    #[error("second start cell at {second} (first at {first})")]
    MultipleStarts { first: CellCoord, second: CellCoord },
}

/// Rectangular maze grid, row-major, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl GridMap {
    /// The compiled-in 10x10 maze. Start at (9, 1), exit at (0, 3).
    pub fn builtin() -> Self {
        use CellKind::{Empty as O, End as X, Start as S, Wall as W};

        #[rustfmt::skip]
        const BUILTIN: [[CellKind; 10]; 10] = [
            [W, W, W, X, W, W, W, W, W, W],
            [W, W, W, O, W, W, W, W, W, W],
            [W, W, W, O, W, W, W, W, W, W],
            [W, W, W, O, O, O, O, W, W, W],
            [W, W, W, W, W, W, O, W, W, W],
            [W, O, O, O, O, W, O, O, O, W],
            [W, W, O, W, O, W, O, W, W, W],
            [W, O, O, W, O, W, O, O, O, W],
            [W, O, W, W, O, O, O, W, W, W],
            [W, S, W, W, W, W, W, W, W, W],
        ];

        Self {
            width: BUILTIN[0].len(),
            height: BUILTIN.len(),
            cells: BUILTIN.iter().flatten().copied().collect(),
        }
    }

    /// Build a map from rows of cells.
    ///
    /// Rejects empty input, rows of differing length and more than one start cell.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, MapError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        let mut start: Option<CellCoord> = None;
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            for (col, kind) in line.into_iter().enumerate() {
                if kind == CellKind::Start {
                    let here = CellCoord::new(row, col);
                    if let Some(first) = start {
                        return Err(MapError::MultipleStarts {
                            first,
                            second: here,
                        });
                    }
                    start = Some(here);
                }
                cells.push(kind);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a text map: one row per line, cells written as digits `0`..`3`.
    ///
    /// Spaces and commas between cells are ignored, as are blank lines and
    /// lines starting with `#`.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut row = Vec::new();
            for glyph in line.chars() {
                if glyph.is_whitespace() || glyph == ',' {
                    continue;
                }
                let kind = glyph
                    .to_digit(10)
                    .and_then(|d| CellKind::from_code(d as u8))
                    .ok_or(MapError::UnknownCell {
                        line: idx + 1,
                        glyph,
                    })?;
                row.push(kind);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Read and parse a text map from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Cell kind at `cell`, or `None` outside the grid.
    pub fn get(&self, cell: CellCoord) -> Option<CellKind> {
        if self.contains(cell) {
            Some(self.cells[cell.row * self.width + cell.col])
        } else {
            None
        }
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, cell: CellCoord) -> bool {
        self.get(cell).is_some_and(CellKind::is_passable)
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, kind)| (CellCoord::new(i / self.width, i % self.width), *kind))
    }

    /// First start cell in row-major order.
    pub fn start(&self) -> Option<CellCoord> {
        self.cells()
            .find(|(_, kind)| *kind == CellKind::Start)
            .map(|(cell, _)| cell)
    }

    pub fn exits(&self) -> Vec<CellCoord> {
        self.cells()
            .filter(|(_, kind)| *kind == CellKind::End)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// All cells reachable from `origin` by 4-neighbour steps over passable cells.
    /// The origin itself is always included when it lies inside the grid.
    pub fn reachable_from(&self, origin: CellCoord) -> BTreeSet<CellCoord> {
        let mut seen = BTreeSet::new();
        if !self.contains(origin) {
            return seen;
        }
        let mut queue = VecDeque::from([origin]);
        seen.insert(origin);
        while let Some(cell) = queue.pop_front() {
            for facing in Facing::ALL {
                let Some(next) = cell.step(facing) else {
                    continue;
                };
                if self.is_passable(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Exit cells reachable from `origin`.
    pub fn reachable_exits(&self, origin: CellCoord) -> Vec<CellCoord> {
        let reachable = self.reachable_from(origin);
        self.exits()
            .into_iter()
            .filter(|cell| reachable.contains(cell))
            .collect()
    }

    /// World-space center of a cell on the ground plane (Z-up).
    ///
    /// Columns grow along +X; row 0 sits at the far +Y edge.
    pub fn cell_center(&self, cell: CellCoord, block_length: f32) -> Vec3 {
        let half = block_length / 2.0;
        Vec3::new(
            cell.col as f32 * block_length + half,
            self.height as f32 * block_length - cell.row as f32 * block_length - half,
            0.0,
        )
    }

    /// World-space minimum corner of a cell's block.
    pub fn cell_origin(&self, cell: CellCoord, block_length: f32) -> Vec3 {
        Vec3::new(
            cell.col as f32 * block_length,
            self.height as f32 * block_length - cell.row as f32 * block_length - block_length,
            0.0,
        )
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|kind| kind.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

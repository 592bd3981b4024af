//! A rectangular map of cells used by the integration tests.

use traverse::{Enumerable, Explorable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Road,
    Wall,
}

/// Cells are connected to their (up to four) axis-aligned neighbors unless one of them is a wall
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn roads(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Road; width * height],
        }
    }

    /// Parses rows of `.` (road) and `#` (wall)
    pub fn parse(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = vec![Cell::Road; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    cells[y * width + x] = Cell::Wall;
                }
            }
        }
        Grid { width, height, cells }
    }

    fn cell(&self, (x, y): (usize, usize)) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }
}

impl Explorable for Grid {
    type Element = (usize, usize);
    type Neighbors<'a> = std::vec::IntoIter<(usize, usize)>;

    fn neighbors(&self, &(x, y): &(usize, usize)) -> Self::Neighbors<'_> {
        let candidates = [
            x.checked_sub(1).map(|x| (x, y)),
            Some((x + 1, y)),
            y.checked_sub(1).map(|y| (x, y)),
            Some((x, y + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&position| self.cell(position) == Some(Cell::Road))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn contains(&self, &position: &(usize, usize)) -> bool {
        self.cell(position) == Some(Cell::Road)
    }
}

impl Enumerable for Grid {
    fn elements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&position| self.contains(&position))
    }
}

pub fn manhattan((ax, ay): (usize, usize), (bx, by): (usize, usize)) -> usize {
    ax.abs_diff(bx) + ay.abs_diff(by)
}

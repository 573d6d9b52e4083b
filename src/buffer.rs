//! Character and depth buffers

use crate::BLANK;

/// Fixed-size 2D grid stored row-major (`index = x + y * width`)
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flattened index, or `None` when outside the grid
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns false if the cell is out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }
}

/// One frame: shaded glyphs plus the inverse depth that produced each of them
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub chars: Grid<char>,
    pub depth: Grid<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            chars: Grid::new(width, height, BLANK),
            depth: Grid::new(width, height, 0.0),
        }
    }

    pub fn width(&self) -> usize {
        self.chars.width()
    }

    pub fn height(&self) -> usize {
        self.chars.height()
    }

    /// Blank every glyph and drop every depth back to the sentinel
    pub fn reset(&mut self) {
        self.chars.fill(BLANK);
        self.depth.fill(0.0);
    }

    /// Depth-tested write. Only a strictly closer sample replaces the cell, so the
    /// first writer keeps ties. Returns whether the cell was written.
    pub fn plot(&mut self, x: i32, y: i32, inv_depth: f32, glyph: char) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let Some(i) = self.depth.index(x as usize, y as usize) else {
            return false;
        };

        if inv_depth > self.depth.cells[i] {
            self.depth.cells[i] = inv_depth;
            self.chars.cells[i] = glyph;
            true
        } else {
            false
        }
    }

    /// Render the glyphs as text, one line per row
    pub fn to_ascii(&self) -> String {
        let mut result = String::with_capacity((self.width() + 1) * self.height());
        for row in self.chars.rows() {
            result.extend(row.iter());
            result.push('\n');
        }
        result
    }
}

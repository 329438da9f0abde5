use macroquad::prelude::{Rect, Vec2, vec2};

// Board constants
pub const GRID: i32 = 20;
pub const CELL_PX: f32 = 24.0;
pub const BOARD_PX: f32 = GRID as f32 * CELL_PX; // 480px logical board

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn on_grid(self) -> bool {
        (0..GRID).contains(&self.x) && (0..GRID).contains(&self.y)
    }

    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    /// Orthogonal neighbours share an edge: exactly one axis differs by one.
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Maps grid cells into screen pixels. The logical 480px board is scaled
/// uniformly to fit the window and centred, letterboxing the spare axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardLayout {
    pub tile: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl BoardLayout {
    pub fn fit(screen_w: f32, screen_h: f32, margin_top: f32) -> Self {
        let avail_h = (screen_h - margin_top).max(0.0);
        let tile = (screen_w / GRID as f32).min(avail_h / GRID as f32).max(1.0);
        let size = tile * GRID as f32;
        Self {
            tile,
            off_x: (screen_w - size) * 0.5,
            off_y: margin_top + (avail_h - size).max(0.0) * 0.5,
        }
    }

    /// Ratio between the laid-out tile and the logical `CELL_PX`, used to
    /// scale pixel constants such as eye offsets.
    pub fn scale(&self) -> f32 {
        self.tile / CELL_PX
    }

    pub fn size(&self) -> f32 {
        self.tile * GRID as f32
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.off_x + cell.x as f32 * self.tile,
            self.off_y + cell.y as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }

    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        vec2(
            self.off_x + (cell.x as f32 + 0.5) * self.tile,
            self.off_y + (cell.y as f32 + 0.5) * self.tile,
        )
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self { tile: CELL_PX, off_x: 0.0, off_y: 0.0 }
    }
}

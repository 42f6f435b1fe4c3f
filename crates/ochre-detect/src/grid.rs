/// Label for a pixel that failed classification.
pub const BACKGROUND: i32 = -1;
/// Label for a pixel that passed classification but has not yet been
/// assigned to a component.
pub const CANDIDATE: i32 = -2;

/// Per-pixel label storage for one frame, indexed by `x + y * width`.
///
/// The buffer is owned and reused across frames: it reallocates only when
/// the frame dimensions change and is otherwise just refilled. Component
/// ids are non-negative; the sentinels above mark unassigned pixels.
#[derive(Debug, Default)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    cells: Vec<i32>,
}

impl LabelGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the grid for a frame of the given dimensions.
    ///
    /// Reallocates only on a dimension change; every cell is reset to
    /// `BACKGROUND` either way. Nothing survives from the previous frame.
    pub fn reset(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.cells.resize(width as usize * height as usize, BACKGROUND);
        }
        self.cells.fill(BACKGROUND);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> i32 {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, label: i32) {
        let i = self.index(x, y);
        self.cells[i] = label;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x as usize + y as usize * self.width as usize
    }
}

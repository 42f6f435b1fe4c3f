/// Streaming position statistics for one connected component.
///
/// Uses Welford's online algorithm, applied independently to x and y: a
/// single pass with no raw sum-of-squares, so the variance stays
/// numerically stable for arbitrarily many pixels. Variances are
/// population variances (`m2 / n`, no Bessel correction); a single-pixel
/// blob has variance exactly 0 by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blob {
    n: u32,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
}

impl Blob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one pixel into the running statistics. Called exactly once per
    /// pixel by the labeler.
    pub fn add_pixel(&mut self, x: u32, y: u32) {
        self.n += 1;
        let n = self.n as f64;

        let x = x as f64;
        let delta = x - self.mean_x;
        self.mean_x += delta / n;
        self.m2_x += delta * (x - self.mean_x);

        let y = y as f64;
        let delta = y - self.mean_y;
        self.mean_y += delta / n;
        self.m2_y += delta * (y - self.mean_y);
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn mean_x(&self) -> f64 {
        self.mean_x
    }

    pub fn mean_y(&self) -> f64 {
        self.mean_y
    }

    /// Population variance of the x coordinates. Zero for an empty blob.
    pub fn var_x(&self) -> f64 {
        if self.n == 0 { 0.0 } else { self.m2_x / self.n as f64 }
    }

    /// Population variance of the y coordinates. Zero for an empty blob.
    pub fn var_y(&self) -> f64 {
        if self.n == 0 { 0.0 } else { self.m2_y / self.n as f64 }
    }
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("need at least 2 sample points, got {0}")]
    TooFewPoints(usize),

    #[error("x has {x} samples but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("x values must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },

    #[error("x = {x} is outside the interpolation range [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },
}

/// Piecewise-linear interpolant over strictly increasing sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpolationError::TooFewPoints(xs.len()));
        }
        // written as !(a < b) so NaN samples are rejected too
        if let Some(index) = xs.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(InterpolationError::NotStrictlyIncreasing { index: index + 1 });
        }
        Ok(Self { xs, ys })
    }

    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Evaluates inside the sampled range; both end points are included.
    pub fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        if !(x >= self.min_x() && x <= self.max_x()) {
            return Err(InterpolationError::OutOfDomain {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(self.eval_segment(self.segment_index(x), x))
    }

    /// Evaluates anywhere, continuing the first or last segment's slope past
    /// the sampled range.
    pub fn eval_extrapolate(&self, x: f64) -> f64 {
        self.eval_segment(self.segment_index(x), x)
    }

    /// Index `i` of the segment `[xs[i], xs[i + 1]]` used for `x`, clamped to
    /// the outermost segments.
    fn segment_index(&self, x: f64) -> usize {
        let upper = self.xs.partition_point(|&xi| xi < x);
        upper.clamp(1, self.xs.len() - 1) - 1
    }

    fn eval_segment(&self, i: usize, x: f64) -> f64 {
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let slope = (y1 - y0) / (x1 - x0);
        y0 + slope * (x - x0)
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

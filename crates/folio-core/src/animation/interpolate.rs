#![forbid(unsafe_code)]

//! Clamped piecewise-linear interpolation.
//!
//! Maps an input through an ordered list of breakpoints to output values,
//! interpolating linearly between neighbours and holding the end values
//! outside the input range. NaN inputs hold the first output.

/// Errors from constructing an [`Interpolator`].
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolatorError {
    /// Fewer than two breakpoints.
    TooFewPoints(usize),
    /// Input and output lists differ in length.
    LengthMismatch { inputs: usize, outputs: usize },
    /// Input breakpoints must be finite and strictly increasing.
    NotIncreasing { index: usize },
    /// Output values must be finite.
    NonFiniteOutput { index: usize },
}

impl core::fmt::Display for InterpolatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewPoints(n) => write!(f, "need at least 2 breakpoints, got {n}"),
            Self::LengthMismatch { inputs, outputs } => {
                write!(f, "{inputs} inputs but {outputs} outputs")
            }
            Self::NotIncreasing { index } => {
                write!(f, "input breakpoint {index} is not finite and increasing")
            }
            Self::NonFiniteOutput { index } => write!(f, "output {index} is not finite"),
        }
    }
}

impl std::error::Error for InterpolatorError {}

/// A clamped piecewise-linear function.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl Interpolator {
    /// Build from parallel breakpoint lists.
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> Result<Self, InterpolatorError> {
        if inputs.len() != outputs.len() {
            return Err(InterpolatorError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(InterpolatorError::TooFewPoints(inputs.len()));
        }
        for (index, pair) in inputs.windows(2).enumerate() {
            if !(pair[0].is_finite() && pair[1].is_finite() && pair[0] < pair[1]) {
                return Err(InterpolatorError::NotIncreasing { index: index + 1 });
            }
        }
        if let Some(index) = outputs.iter().position(|v| !v.is_finite()) {
            return Err(InterpolatorError::NonFiniteOutput { index });
        }
        Ok(Self { inputs, outputs })
    }

    /// Symmetric peak: `[-reach, 0, reach] -> [edge, peak, edge]`.
    pub fn peak(reach: f64, edge: f64, peak: f64) -> Result<Self, InterpolatorError> {
        Self::new(vec![-reach, 0.0, reach], vec![edge, peak, edge])
    }

    /// Evaluate at `x`.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        let last = self.inputs.len() - 1;
        if x.is_nan() || x <= self.inputs[0] {
            return self.outputs[0];
        }
        if x >= self.inputs[last] {
            return self.outputs[last];
        }
        // Index of the first breakpoint strictly greater than x; always in 1..=last here.
        let hi = self.inputs.partition_point(|&b| b <= x);
        let lo = hi - 1;
        let (x0, x1) = (self.inputs[lo], self.inputs[hi]);
        let (y0, y1) = (self.outputs[lo], self.outputs[hi]);
        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }

    #[must_use]
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    #[must_use]
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn peak_profile_breakpoints() {
        let f = Interpolator::peak(150.0, 40.0, 80.0).unwrap();
        assert!(close(f.map(-150.0), 40.0));
        assert!(close(f.map(0.0), 80.0));
        assert!(close(f.map(150.0), 40.0));
        assert!(close(f.map(-75.0), 60.0));
        assert!(close(f.map(75.0), 60.0));
        assert!(close(f.map(30.0), 72.0));
    }

    #[test]
    fn clamps_outside_range() {
        let f = Interpolator::peak(150.0, 40.0, 80.0).unwrap();
        assert!(close(f.map(-1000.0), 40.0));
        assert!(close(f.map(1000.0), 40.0));
        assert!(close(f.map(f64::INFINITY), 40.0));
        assert!(close(f.map(f64::NEG_INFINITY), 40.0));
        assert!(close(f.map(f64::NAN), 40.0));
    }

    #[test]
    fn rejects_bad_breakpoints() {
        assert_eq!(
            Interpolator::new(vec![0.0], vec![1.0]),
            Err(InterpolatorError::TooFewPoints(1))
        );
        assert_eq!(
            Interpolator::new(vec![0.0, 1.0], vec![1.0]),
            Err(InterpolatorError::LengthMismatch {
                inputs: 2,
                outputs: 1
            })
        );
        assert_eq!(
            Interpolator::new(vec![0.0, 0.0], vec![1.0, 2.0]),
            Err(InterpolatorError::NotIncreasing { index: 1 })
        );
        assert_eq!(
            Interpolator::new(vec![0.0, 1.0], vec![1.0, f64::NAN]),
            Err(InterpolatorError::NonFiniteOutput { index: 1 })
        );
        assert!(Interpolator::peak(0.0, 40.0, 80.0).is_err());
    }

    #[test]
    fn exact_interior_breakpoint() {
        let f = Interpolator::new(vec![0.0, 10.0, 20.0], vec![0.0, 100.0, 0.0]).unwrap();
        assert!(close(f.map(10.0), 100.0));
        assert!(close(f.map(5.0), 50.0));
        assert!(close(f.map(15.0), 50.0));
    }
}

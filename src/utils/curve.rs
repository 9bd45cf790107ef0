use crate::errors::SimulationError;

/// Time-indexed series of samples, e.g. thrust (N) or fuel mass (kg)
/// against seconds after ignition.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    samples: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(samples: Vec<(f64, f64)>) -> Result<Self, SimulationError> {
        if samples.is_empty() {
            return Err(SimulationError::EmptyCurve);
        }
        for &(time, _) in &samples {
            if !time.is_finite() {
                return Err(SimulationError::NonFiniteTime(time));
            }
        }
        for pair in samples.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(SimulationError::NonIncreasingTimes {
                    prev: pair[0].0,
                    next: pair[1].0,
                });
            }
        }
        if samples[0].0 < 0.0 {
            return Err(SimulationError::NegativeTime(samples[0].0));
        }

        Ok(Curve { samples })
    }

    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start_time(&self) -> f64 {
        self.samples[0].0
    }

    pub fn end_time(&self) -> f64 {
        self.samples[self.samples.len() - 1].0
    }

    pub fn first_value(&self) -> f64 {
        self.samples[0].1
    }

    pub fn last_value(&self) -> f64 {
        self.samples[self.samples.len() - 1].1
    }

    /// Value at an arbitrary time, linearly interpolated between samples.
    /// Times outside the sampled span clamp to the first or last value.
    pub fn value_at(&self, time: f64) -> f64 {
        if time <= self.start_time() {
            return self.first_value();
        }
        if time >= self.end_time() {
            return self.last_value();
        }

        let next = self.samples.partition_point(|&(t, _)| t <= time);
        let (t0, v0) = self.samples[next - 1];
        let (t1, v1) = self.samples[next];
        v0 + (time - t0) / (t1 - t0) * (v1 - v0)
    }

    /// Integral over the full sampled span by the trapezoidal rule.
    pub fn trapezoidal_integral(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|pair| {
                let (t0, v0) = pair[0];
                let (t1, v1) = pair[1];
                (v0 + v1) / 2.0 * (t1 - t0)
            })
            .sum()
    }

    pub fn is_non_increasing(&self) -> bool {
        self.samples.windows(2).all(|pair| pair[1].1 <= pair[0].1)
    }
}

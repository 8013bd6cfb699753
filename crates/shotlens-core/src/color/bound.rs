use std::fmt;

use crate::consts::MAX_TOLERANCE;

use super::space::ColorMode;

/// One end of a color range: one value for gray, three for RGB/HSV.
///
/// Values are clamped per channel when built from user input, so a bound
/// never holds an out-of-range component. `lower <= upper` is not checked;
/// an inverted pair simply matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorBound {
    values: [u8; 3],
    len: usize,
}

impl ColorBound {
    /// Build a bound for `mode`, clamping every component into its channel range.
    ///
    /// Extra components beyond the mode's channel count are dropped and
    /// missing ones are zero, so the result always has `mode.channels()` entries.
    pub fn clamped(mode: ColorMode, raw: &[i32]) -> Self {
        let len = mode.channels();
        let mut values = [0u8; 3];
        for (i, slot) in values.iter_mut().enumerate().take(len) {
            let v = raw.get(i).copied().unwrap_or(0);
            *slot = v.clamp(0, mode.channel_max(i) as i32) as u8;
        }
        Self { values, len }
    }

    /// Wrap already-valid channel values without clamping. Length is kept as given
    /// (up to three), so a mismatch against a mode is detected at classification time.
    pub fn from_slice(values: &[u8]) -> Self {
        let len = values.len().min(3);
        let mut data = [0u8; 3];
        data[..len].copy_from_slice(&values[..len]);
        Self { values: data, len }
    }

    /// Full channel range of `mode`: `[0, .., 0]` or `[max, .., max]`.
    pub fn full_range(mode: ColorMode) -> (Self, Self) {
        let upper: Vec<i32> = (0..mode.channels())
            .map(|i| mode.channel_max(i) as i32)
            .collect();
        (Self::clamped(mode, &[]), Self::clamped(mode, &upper))
    }

    /// Range of `tolerance` around a picked color, clamped to each channel's limits.
    ///
    /// Tolerance above the range tool's maximum is capped.
    pub fn around(mode: ColorMode, color: &[u8], tolerance: u8) -> (Self, Self) {
        let tol = tolerance.min(MAX_TOLERANCE) as i32;
        let lower: Vec<i32> = color.iter().map(|&c| c as i32 - tol).collect();
        let upper: Vec<i32> = color.iter().map(|&c| c as i32 + tol).collect();
        (Self::clamped(mode, &lower), Self::clamped(mode, &upper))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when any component of `self` is above the matching one in `upper`.
    pub fn is_inverted(&self, upper: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(upper.as_slice())
            .any(|(lo, hi)| lo > hi)
    }
}

impl fmt::Display for ColorBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

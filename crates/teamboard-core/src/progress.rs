//! Progress percentages: clamping, rounding and tone.

use serde::{Deserialize, Serialize};

/// Upper bound of a progress percentage.
pub const MAX_PROGRESS: u32 = 100;

/// Clamp a stored progress value to the displayable range.
///
/// Stored values may exceed 100; anything that derives a bar width or label
/// from progress must go through this first.
pub fn clamp_progress(value: u32) -> u32 {
    value.min(MAX_PROGRESS)
}

/// Integer division rounded half-up: `round(num / den)`.
///
/// Returns 0 when `den` is 0.
pub fn round_half_up(num: u64, den: u64) -> u32 {
    if den == 0 {
        return 0;
    }
    ((2 * num + den) / (2 * den)) as u32
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub fn percent_of(part: usize, whole: usize) -> u32 {
    round_half_up(part as u64 * 100, whole as u64)
}

/// Rounded mean of a sequence of progress values, 0 for an empty sequence.
pub fn rounded_mean<I>(values: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    round_half_up(sum, count)
}

/// Visual tone shared by status badges and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
    Accent,
}

impl Tone {
    /// Tone of a progress bar holding `value` percent.
    ///
    /// Thresholds are evaluated on the raw value, so 150 is `Completed`.
    pub fn for_progress(value: u32) -> Self {
        match value {
            v if v >= 100 => Self::Completed,
            v if v >= 60 => Self::InProgress,
            v if v >= 30 => Self::OnHold,
            _ => Self::NotStarted,
        }
    }
}

/// Running pace bracket mapped to a cadence range.
///
/// Values follow the run2rhythm pace chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceOption {
    pub km_mins_lower: u32,
    pub km_mins_upper: u32,
    pub bpm_lower: u32,
    pub bpm_upper: u32,
}

impl PaceOption {
    /// Minimum tempo used for track selection when this pace is chosen
    pub fn min_tempo(&self) -> f64 {
        f64::from(self.bpm_lower)
    }

    pub fn label(&self) -> String {
        format!(
            "{} - {} mins per km: {} BPM+",
            self.km_mins_lower, self.km_mins_upper, self.bpm_lower
        )
    }
}

pub static PACE_OPTIONS: [PaceOption; 3] = [
    PaceOption {
        km_mins_upper: 10,
        km_mins_lower: 8,
        bpm_upper: 156,
        bpm_lower: 150,
    },
    PaceOption {
        km_mins_upper: 8,
        km_mins_lower: 6,
        bpm_upper: 163,
        bpm_lower: 156,
    },
    PaceOption {
        km_mins_upper: 6,
        km_mins_lower: 4,
        bpm_upper: 171,
        bpm_lower: 163,
    },
];

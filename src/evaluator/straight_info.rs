use super::face_counts::FaceCounts;

const WINDOW: usize = 5;

/// Whether the faces form five consecutive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Slide a five-face window over the canonical face order (start offsets
    /// 0..=8) and look for one where every face appears exactly once.
    /// Aces play high only, so A-2-3-4-5 does not count.
    pub fn detect(counts: &FaceCounts) -> Self {
        let faces = counts.as_array();
        let is_straight = faces.windows(WINDOW).any(|w| w.iter().all(|&count| count == 1));
        StraightInfo { is_straight }
    }
}

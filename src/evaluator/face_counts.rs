use crate::cards::{Card, Face};

/// Number of cards per face, indexed by `Face::index`. All thirteen faces are
/// present and zero-filled.
///
/// Example: C A, D A, H A, S K, C K counts Ace = 3, King = 2, everything else 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceCounts([u8; 13]);

impl FaceCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        for card in cards {
            let slot = &mut counts[card.face().index()];
            *slot = slot.saturating_add(1);
        }
        Self(counts)
    }

    pub fn get(&self, face: Face) -> u8 {
        self.0[face.index()]
    }

    /// Raw counts in canonical face order.
    pub fn as_array(&self) -> &[u8; 13] {
        &self.0
    }

    /// `(face, count)` pairs in canonical face order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, u8)> + '_ {
        Face::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Faces that appear exactly `n` times, low to high.
    pub fn faces_with(&self, n: u8) -> Vec<Face> {
        self.iter().filter(|&(_, count)| count == n).map(|(f, _)| f).collect()
    }

    pub fn any_with(&self, n: u8) -> bool {
        self.0.iter().any(|&count| count == n)
    }

    /// Number of distinct faces present.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }
}

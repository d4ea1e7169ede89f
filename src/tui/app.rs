use crate::deck::Deck;
use crate::evaluator::HandType;
use crate::hand::PokerHand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    DealHand,
    Shuffle,
    NewDeck,
    ToggleHelp,
    ScrollUp,
    ScrollDown,
}

/// A hand dealt during the session, with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtHand {
    pub hand: PokerHand,
    pub hand_type: HandType,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub deck: Deck,
    // Oldest first; the table renders newest first.
    pub dealt: Vec<DealtHand>,
    pub shuffles: usize,
    rng: ChaCha8Rng,
    help_open: bool,
    scroll: usize,
    status: Option<String>,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppState {
    /// Fresh deck. With a seed every shuffle sequence is reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            deck: Deck::standard(),
            dealt: Vec::new(),
            shuffles: 0,
            rng,
            help_open: false,
            scroll: 0,
            status: Some("Fresh deck. Press Space to deal, s to shuffle.".to_string()),
            error: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_dealt(&self) -> Option<&DealtHand> {
        self.dealt.last()
    }

    /// Apply an input. Returns true when the action changed the deck or the
    /// dealt hands.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if self.help_open && action != InputAction::ToggleHelp {
            return false;
        }
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                false
            }
            InputAction::ScrollDown => {
                let max = self.dealt.len().saturating_sub(1);
                self.scroll = (self.scroll + 1).min(max);
                false
            }
            InputAction::DealHand => self.deal_hand(),
            InputAction::Shuffle => self.shuffle(),
            InputAction::NewDeck => {
                self.new_deck();
                true
            }
        }
    }

    pub fn deal_hand(&mut self) -> bool {
        match PokerHand::deal_from(&mut self.deck) {
            Ok(hand) => {
                let hand_type = hand.evaluate();
                self.dealt.push(DealtHand { hand, hand_type });
                self.scroll = 0;
                self.error = None;
                self.status = Some(format!("Dealt {hand}: {hand_type}"));
                true
            }
            Err(err) => {
                self.error = Some(format!("{err} ({} cards left, press n)", self.deck.len()));
                false
            }
        }
    }

    pub fn shuffle(&mut self) -> bool {
        if self.deck.len() < 2 {
            self.error = Some("Nothing to shuffle".to_string());
            return false;
        }
        self.deck.shuffle_with(&mut self.rng);
        self.shuffles += 1;
        self.error = None;
        self.status = Some(format!("Shuffled {} cards", self.deck.len()));
        true
    }

    pub fn new_deck(&mut self) {
        self.deck = Deck::standard();
        self.dealt.clear();
        self.shuffles = 0;
        self.scroll = 0;
        self.error = None;
        self.status = Some("Fresh deck".to_string());
    }
}

//! Notifications pushed from the engine to whatever hosts it.
//!
//! Events are delivered synchronously, inside the engine call that caused
//! them, in the order the engine produces them.

use crate::life::LifeBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new round began. Carries only the length so the word stays hidden.
    WordInitialized { length: usize },
    /// A correct guess revealed one or more positions.
    LettersRevealed { masked_word: String },
    /// A wrong guess cost life.
    LifeChanged { fraction: f64, band: LifeBand },
    /// The round is over; the full word is revealed.
    RoundEnded {
        outcome: RoundOutcome,
        revealed_word: String,
    },
}

/// Receiver of [`GameEvent`]s.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Discards every event.
impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Records every event in arrival order.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

//! Round events and the sinks that receive them.
//!
//! Events are emitted in resolution order: `RoundStart` first, then every
//! draw, stay and card outcome as it happens (nested Flip Three draws
//! included), then one `Score` per player, then `RoundEnd`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameError, PlayerId};

/// Something that happened during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    /// Emitted before the initial deal.
    RoundStart {
        round: u32,
        players: Vec<String>,
        /// Seed of the round's shuffle, when known.
        seed: Option<u64>,
    },
    /// A card was drawn for `player`. `None` when the deck was empty.
    Draw { player: PlayerId, card: Option<Card> },
    /// `player` chose to stay.
    Stay { player: PlayerId },
    /// A Second Chance absorbed a duplicate `value`.
    SecondChanceUsed { player: PlayerId, value: u8 },
    /// An extra Second Chance was discarded.
    SecondChanceDiscarded { player: PlayerId },
    /// `player` busted on duplicate `value`.
    Busted { player: PlayerId, value: u8 },
    /// `player` drew a Freeze.
    Frozen { player: PlayerId },
    /// `player` collected seven unique numbers; the round ends.
    FlipSeven { player: PlayerId },
    /// Points banked by `player` this round, and the new total.
    Score { player: PlayerId, score: u32, total: u32 },
    /// Cumulative totals after scoring, in seat order.
    RoundEnd { round: u32, totals: Vec<(String, u32)> },
}

impl RoundEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            RoundEvent::Draw { player, .. }
            | RoundEvent::Stay { player }
            | RoundEvent::SecondChanceUsed { player, .. }
            | RoundEvent::SecondChanceDiscarded { player }
            | RoundEvent::Busted { player, .. }
            | RoundEvent::Frozen { player }
            | RoundEvent::FlipSeven { player }
            | RoundEvent::Score { player, .. } => Some(*player),
            RoundEvent::RoundStart { .. } | RoundEvent::RoundEnd { .. } => None,
        }
    }
}

/// Receives round events.
///
/// A sink error aborts the round; the engine never retries.
pub trait EventSink {
    fn emit(&mut self, event: &RoundEvent) -> Result<(), GameError>;
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &RoundEvent) -> Result<(), GameError> {
        Ok(())
    }
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Vec<RoundEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Events concerning one player, oldest first.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &RoundEvent> {
        self.events.iter().filter(move |e| e.player() == Some(player))
    }

    /// Cards drawn so far (empty-deck draws excluded), in draw order.
    pub fn drawn_cards(&self) -> impl Iterator<Item = (PlayerId, Card)> + '_ {
        self.events.iter().filter_map(|e| match e {
            RoundEvent::Draw { player, card: Some(card) } => Some((*player, *card)),
            _ => None,
        })
    }

    /// Take the events out, leaving the sink empty.
    pub fn take(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: &RoundEvent) -> Result<(), GameError> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Forward every event to two sinks, first `A` then `B`.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &RoundEvent) -> Result<(), GameError> {
        self.0.emit(event)?;
        self.1.emit(event)
    }
}

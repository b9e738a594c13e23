//! Round resolution.
//!
//! A `RoundEngine` owns one shuffled deck and borrows the players for the
//! length of a round. `play` runs the round to a terminal condition:
//!
//! 1. Reset every hand, emit `RoundStart`.
//! 2. Initial deal: one draw-resolution per player, in seat order.
//! 3. Turn loop: passes over playing hands in seat order, asking each for
//!    `Stay` or `Draw`.
//! 4. Stop when no hand is playing, or as soon as a hand collects seven
//!    unique numbers (this ends the round for everyone).
//! 5. Bank every hand's score, emit `Score` per player then `RoundEnd`.
//!
//! ## Flip Three
//!
//! A Flip Three owes three more draws to the same player. Owed draws are
//! kept as a counter on an explicit loop rather than by recursion, so a
//! chain of Flip Threes cannot grow the call stack. Cards come off the deck
//! in the same order either way. All owed draws are taken even after the
//! hand busts or freezes: the cards still land on the dead hand and are
//! consumed from the deck. The chain only stops early when a hand completes
//! seven numbers or the deck runs out.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::decision::{Decision, DecisionSource};
use super::event::{EventSink, RoundEvent};
use crate::cards::{Card, Deck};
use crate::core::config::FLIP_THREE_DRAWS;
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::hand::{AddNumber, Player};

/// Result of resolving one draw (and any Flip Three chain it started).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The round goes on.
    Continue,
    /// `player` collected seven unique numbers; the round is over.
    FlipSeven(PlayerId),
}

/// What a round produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    /// Points banked this round, per seat.
    pub scores: PlayerMap<u32>,
    /// Cumulative totals after this round, per seat.
    pub totals: PlayerMap<u32>,
    /// Seat that ended the round with seven unique numbers, if any.
    pub flip_seven: Option<PlayerId>,
    /// Cards never drawn.
    pub cards_left: usize,
}

/// Resolves a single round over a borrowed set of players.
pub struct RoundEngine<'a> {
    round: u32,
    seed: Option<u64>,
    deck: Deck,
    players: &'a mut PlayerMap<Player>,
}

impl<'a> RoundEngine<'a> {
    /// Create an engine for round number `round` (1-based) with a deck that
    /// is already shuffled.
    pub fn new(round: u32, deck: Deck, players: &'a mut PlayerMap<Player>) -> Self {
        Self {
            round,
            seed: None,
            deck,
            players,
        }
    }

    /// Record the seed the deck was shuffled with (reported in `RoundStart`).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The remaining draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The players taking part.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &*self.players
    }

    /// Play the round to its end and bank the scores.
    ///
    /// Drawing from an empty deck is a no-op, so the round only ends once
    /// every hand stays, busts or freezes. A `DecisionSource` that answers
    /// `Draw` forever on an exhausted deck never terminates the round.
    pub fn play<D, S>(mut self, decisions: &mut D, sink: &mut S) -> Result<RoundSummary, GameError>
    where
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        self.start(sink)?;

        let mut flip_seven = None;
        let seats: Vec<PlayerId> = self.players.player_ids().collect();

        for &player in &seats {
            if let Resolution::FlipSeven(p) = self.resolve_draw(player, sink)? {
                flip_seven = Some(p);
                break;
            }
        }

        'passes: while flip_seven.is_none() && self.any_playing() {
            for &player in &seats {
                if !self.players[player].hand.is_playing() {
                    continue;
                }

                let decision = decisions.decide(player, &self.players[player])?;
                trace!("{} decides to {}", self.players[player].name, decision);

                match decision {
                    Decision::Stay => {
                        self.players[player].hand.stay();
                        sink.emit(&RoundEvent::Stay { player })?;
                    }
                    Decision::Draw => {
                        if let Resolution::FlipSeven(p) = self.resolve_draw(player, sink)? {
                            flip_seven = Some(p);
                            break 'passes;
                        }
                    }
                }
            }
        }

        self.finish(flip_seven, sink)
    }

    /// Reset all hands and announce the round.
    fn start<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), GameError> {
        for (_, player) in self.players.iter_mut() {
            player.hand.reset();
        }

        sink.emit(&RoundEvent::RoundStart {
            round: self.round,
            players: self.players.values().map(|p| p.name.clone()).collect(),
            seed: self.seed,
        })
    }

    fn any_playing(&self) -> bool {
        self.players.values().any(|p| p.hand.is_playing())
    }

    /// Draw one card for `player` and resolve it, including any Flip Three
    /// chain it starts.
    ///
    /// Callers only invoke this for a playing hand, but nested Flip Three
    /// draws keep resolving after the hand busts or freezes.
    pub fn resolve_draw<S: EventSink + ?Sized>(
        &mut self,
        player: PlayerId,
        sink: &mut S,
    ) -> Result<Resolution, GameError> {
        let mut owed = 1usize;

        while owed > 0 {
            owed -= 1;

            let card = self.deck.draw();
            sink.emit(&RoundEvent::Draw { player, card })?;

            let Some(card) = card else {
                debug!("{}: deck is empty", self.players[player].name);
                break;
            };
            debug!("{} draws {}", self.players[player].name, card);

            if card == Card::FlipThree {
                owed += FLIP_THREE_DRAWS;
            } else if let Resolution::FlipSeven(p) = self.apply_card(player, card, sink)? {
                return Ok(Resolution::FlipSeven(p));
            }
        }

        Ok(Resolution::Continue)
    }

    /// Apply a non-Flip-Three card to a hand.
    fn apply_card<S: EventSink + ?Sized>(
        &mut self,
        player: PlayerId,
        card: Card,
        sink: &mut S,
    ) -> Result<Resolution, GameError> {
        let Player { name, hand, .. } = &mut self.players[player];

        match card {
            Card::Number(value) => match hand.try_add_number(value) {
                // The completing hand is not marked stayed, so it scores 0.
                AddNumber::Accepted if hand.is_complete() => {
                    info!("{} flips seven", name);
                    sink.emit(&RoundEvent::FlipSeven { player })?;
                    return Ok(Resolution::FlipSeven(player));
                }
                AddNumber::Accepted => {}
                AddNumber::Duplicate if hand.consume_second_chance() => {
                    debug!("{} spends a second chance on {}", name, value);
                    sink.emit(&RoundEvent::SecondChanceUsed { player, value })?;
                }
                AddNumber::Duplicate => {
                    hand.bust();
                    debug!("{} busts on {}", name, value);
                    sink.emit(&RoundEvent::Busted { player, value })?;
                }
            },
            Card::Freeze => {
                hand.freeze();
                sink.emit(&RoundEvent::Frozen { player })?;
            }
            Card::SecondChance => {
                if !hand.grant_second_chance() {
                    sink.emit(&RoundEvent::SecondChanceDiscarded { player })?;
                }
            }
            Card::Bonus(value) => hand.add_bonus(value),
            Card::Multiplier => hand.grant_multiplier(),
            // Expanded into owed draws by `resolve_draw`.
            Card::FlipThree => {}
        }

        Ok(Resolution::Continue)
    }

    /// Bank every hand and close the round.
    fn finish<S: EventSink + ?Sized>(
        self,
        flip_seven: Option<PlayerId>,
        sink: &mut S,
    ) -> Result<RoundSummary, GameError> {
        let mut scores = PlayerMap::with_value(self.players.player_count(), 0);

        for (id, player) in self.players.iter_mut() {
            let score = player.bank_round();
            scores[id] = score;
            sink.emit(&RoundEvent::Score {
                player: id,
                score,
                total: player.total_score,
            })?;
        }

        let totals = self.players.map(|_, p| p.total_score);
        sink.emit(&RoundEvent::RoundEnd {
            round: self.round,
            totals: self.players.values().map(|p| (p.name.clone(), p.total_score)).collect(),
        })?;

        info!(
            "round {} over: scores {:?}, {} cards left",
            self.round,
            scores.values().collect::<Vec<_>>(),
            self.deck.len()
        );

        Ok(RoundSummary {
            round: self.round,
            scores,
            totals,
            flip_seven,
            cards_left: self.deck.len(),
        })
    }
}

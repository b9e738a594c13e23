//! Interactive terminal front-end (feature `cli`).
//!
//! `TerminalPrompt` asks each player for a decision on stdin and re-prompts
//! until the input parses. `ConsoleSink` narrates the round on stdout.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::core::{GameError, PlayerId};
use crate::hand::{Player, PlayerHand};
use crate::round::{Decision, DecisionSource, EventSink, RoundEvent};

/// Render a hand as `[2 5 11] +4 x2 SC`.
pub fn describe_hand(hand: &PlayerHand) -> String {
    let numbers: Vec<String> = hand.numbers().iter().map(u8::to_string).collect();
    let mut out = format!("[{}]", numbers.join(" "));
    for bonus in hand.bonuses() {
        out.push_str(&format!(" +{}", bonus));
    }
    if hand.has_multiplier() {
        out.push_str(" x2");
    }
    if hand.has_second_chance() {
        out.push_str(" SC");
    }
    out
}

/// Reads decisions from the terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl DecisionSource for TerminalPrompt {
    fn decide(&mut self, _player: PlayerId, view: &Player) -> Result<Decision, GameError> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(format!(
                "{} {} -> (d)raw or (s)tay?",
                view.name,
                describe_hand(&view.hand)
            ))
            .validate_with(|input: &String| -> Result<(), String> {
                input.parse::<Decision>().map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(|e| GameError::Prompt(e.to_string()))?;

        answer.parse()
    }
}

/// Prints a running commentary of each round.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    names: Vec<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn name(&self, player: PlayerId) -> &str {
        self.names
            .get(player.index())
            .map(String::as_str)
            .unwrap_or("?")
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &RoundEvent) -> Result<(), GameError> {
        match event {
            RoundEvent::RoundStart { round, players, .. } => {
                self.names = players.clone();
                println!("\n===== Round {} =====", round);
            }
            RoundEvent::Draw { player, card: Some(card) } => {
                println!("{} draws {}", self.name(*player), card);
            }
            RoundEvent::Draw { player, card: None } => {
                println!("{} draws nothing, the deck is empty", self.name(*player));
            }
            RoundEvent::Stay { player } => println!("{} stays", self.name(*player)),
            RoundEvent::SecondChanceUsed { player, value } => {
                println!("{} uses a second chance on {}", self.name(*player), value);
            }
            RoundEvent::SecondChanceDiscarded { player } => {
                println!("{} already holds a second chance", self.name(*player));
            }
            RoundEvent::Busted { player, value } => {
                println!("{} busts on a second {}!", self.name(*player), value);
            }
            RoundEvent::Frozen { player } => println!("{} is frozen!", self.name(*player)),
            RoundEvent::FlipSeven { player } => println!("{} flips SEVEN!", self.name(*player)),
            RoundEvent::Score { player, score, total } => {
                println!("{} scores {} (total {})", self.name(*player), score, total);
            }
            RoundEvent::RoundEnd { .. } => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_hand() {
        let mut hand = PlayerHand::new();
        assert_eq!(describe_hand(&hand), "[]");

        hand.try_add_number(11);
        hand.try_add_number(2);
        hand.add_bonus(4);
        hand.grant_multiplier();
        hand.grant_second_chance();
        assert_eq!(describe_hand(&hand), "[2 11] +4 x2 SC");
    }

    #[test]
    fn test_console_sink_tracks_names() {
        let mut sink = ConsoleSink::new();
        sink.emit(&RoundEvent::RoundStart { round: 1, players: vec!["Ana".into()], seed: None })
            .unwrap();
        assert_eq!(sink.name(PlayerId::new(0)), "Ana");
        assert_eq!(sink.name(PlayerId::new(4)), "?");
    }
}

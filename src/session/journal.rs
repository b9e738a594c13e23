//! JSON game journal.
//!
//! Collects the events of every round and rewrites a single JSON document
//! at the end of each round:
//!
//! ```json
//! {
//!   "rounds": [
//!     {
//!       "round": 1,
//!       "players": ["Ana", "Bo"],
//!       "seed": 1234,
//!       "events": [
//!         {"type": "draw", "player": 0, "card": {"type": "number", "value": 5}, "name": "Ana"}
//!       ],
//!       "scores": {"Ana": 5, "Bo": 0}
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::round::{EventSink, RoundEvent};

/// A journaled event, tagged with the name of the player it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(flatten)]
    pub event: RoundEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One round as recorded in the journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub players: Vec<String>,
    pub seed: Option<u64>,
    /// Everything between `RoundStart` and `RoundEnd`.
    pub events: Vec<JournalEntry>,
    /// Cumulative totals after the round, by player name.
    pub scores: BTreeMap<String, u32>,
}

/// The whole journal document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub rounds: Vec<RoundRecord>,
}

/// Event sink that persists the game as JSON.
#[derive(Debug)]
pub struct JsonJournal {
    path: PathBuf,
    journal: Journal,
    current: Option<RoundRecord>,
}

impl JsonJournal {
    /// Journal to an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            journal: Journal::default(),
            current: None,
        }
    }

    /// Journal to `dir/game-<unix millis>.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self::new(dir.as_ref().join(format!("game-{}.json", stamp)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Read a journal written by `JsonJournal`.
    pub fn load(path: impl AsRef<Path>) -> Result<Journal, GameError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    fn write(&self) -> Result<(), GameError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &self.journal)?;
        writer.flush()?;

        debug!("journal written to {}", self.path.display());
        Ok(())
    }
}

impl EventSink for JsonJournal {
    fn emit(&mut self, event: &RoundEvent) -> Result<(), GameError> {
        match event {
            RoundEvent::RoundStart { round, players, seed } => {
                self.current = Some(RoundRecord {
                    round: *round,
                    players: players.clone(),
                    seed: *seed,
                    events: Vec::new(),
                    scores: BTreeMap::new(),
                });
                Ok(())
            }
            RoundEvent::RoundEnd { totals, .. } => {
                let Some(mut record) = self.current.take() else {
                    warn!("round end without a round start, not journaled");
                    return Ok(());
                };
                record.scores = totals.iter().cloned().collect();
                self.journal.rounds.push(record);
                self.write()
            }
            other => {
                match self.current.as_mut() {
                    Some(record) => {
                        let name = other
                            .player()
                            .and_then(|p| record.players.get(p.index()))
                            .cloned();
                        record.events.push(JournalEntry { event: other.clone(), name });
                    }
                    None => warn!("event outside a round, not journaled: {:?}", other),
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::PlayerId;

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("flip-seven-{}-{}-{}", name, std::process::id(), nanos))
    }

    fn one_round(journal: &mut JsonJournal, round: u32) {
        let p0 = PlayerId::new(0);
        let events = [
            RoundEvent::RoundStart { round, players: vec!["Ana".into(), "Bo".into()], seed: Some(9) },
            RoundEvent::Draw { player: p0, card: Some(Card::Number(5)) },
            RoundEvent::Stay { player: p0 },
            RoundEvent::RoundEnd { round, totals: vec![("Ana".into(), 5 * round), ("Bo".into(), 0)] },
        ];
        for event in &events {
            journal.emit(event).unwrap();
        }
    }

    #[test]
    fn test_journal_written_each_round() {
        let dir = scratch_dir("rounds");
        let mut journal = JsonJournal::in_dir(&dir);

        one_round(&mut journal, 1);
        let on_disk = JsonJournal::load(journal.path()).unwrap();
        assert_eq!(on_disk.rounds.len(), 1);
        assert_eq!(on_disk.rounds[0].events.len(), 2);
        assert_eq!(on_disk.rounds[0].scores["Ana"], 5);
        assert_eq!(on_disk.rounds[0].seed, Some(9));
        assert_eq!(on_disk.rounds[0].events[0].name.as_deref(), Some("Ana"));
        assert_eq!(
            on_disk.rounds[0].events[0].event,
            RoundEvent::Draw { player: PlayerId::new(0), card: Some(Card::Number(5)) }
        );

        one_round(&mut journal, 2);
        let on_disk = JsonJournal::load(journal.path()).unwrap();
        assert_eq!(on_disk, *journal.journal());
        assert_eq!(on_disk.rounds[1].scores["Ana"], 10);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_entries_carry_player_names() {
        let mut journal = JsonJournal::new(scratch_dir("names").join("game.json"));
        journal
            .emit(&RoundEvent::RoundStart { round: 1, players: vec!["Ana".into(), "Bo".into()], seed: None })
            .unwrap();
        journal.emit(&RoundEvent::Frozen { player: PlayerId::new(1) }).unwrap();

        let entry = &journal.current.as_ref().unwrap().events[0];
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json, serde_json::json!({"type": "frozen", "player": 1, "name": "Bo"}));
        assert_eq!(serde_json::from_value::<JournalEntry>(json).unwrap(), *entry);
    }

    #[test]
    fn test_in_dir_names_files_by_millisecond() {
        let journal = JsonJournal::in_dir("logs");
        let stem = journal.path().file_stem().unwrap().to_str().unwrap();
        let millis: u128 = stem.strip_prefix("game-").unwrap().parse().unwrap();
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis();

        assert!(now - millis < 60_000);
        assert!(millis > 1_000_000_000_000);
    }

    #[test]
    fn test_events_outside_round_are_ignored() {
        let dir = scratch_dir("stray");
        let mut journal = JsonJournal::new(dir.join("game.json"));

        journal.emit(&RoundEvent::Stay { player: PlayerId::new(0) }).unwrap();
        journal
            .emit(&RoundEvent::RoundEnd { round: 1, totals: vec![] })
            .unwrap();

        assert!(journal.journal().rounds.is_empty());
        assert!(!journal.path().exists());
    }
}

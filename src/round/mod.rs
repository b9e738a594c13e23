//! Round resolution: the engine, turn decisions, and round events.
//!
//! ## Key Types
//!
//! - `RoundEngine`: initial deal, turn loop, card effects, scoring
//! - `DecisionSource`: asks the player on turn to `Stay` or `Draw`
//! - `EventSink`: receives `RoundEvent`s in resolution order
//!
//! ## Example
//!
//! ```
//! use flip_seven::cards::{Card, Deck};
//! use flip_seven::core::{PlayerId, PlayerMap};
//! use flip_seven::hand::Player;
//! use flip_seven::round::{Decision, MemorySink, RoundEngine};
//!
//! let mut players = PlayerMap::from_vec(vec![Player::new("Ana"), Player::new("Bo")]);
//! let deck = Deck::from_draw_order([Card::Number(8), Card::Bonus(4)]);
//! let mut stay = |_: PlayerId, _: &Player| Decision::Stay;
//! let mut sink = MemorySink::new();
//!
//! let summary = RoundEngine::new(1, deck, &mut players)
//!     .play(&mut stay, &mut sink)
//!     .unwrap();
//!
//! assert_eq!(summary.scores[PlayerId::new(0)], 8);
//! assert_eq!(summary.scores[PlayerId::new(1)], 4);
//! ```

mod decision;
mod engine;
mod event;

pub use decision::{Decision, DecisionSource};
pub use engine::{Resolution, RoundEngine, RoundSummary};
pub use event::{EventSink, MemorySink, NullSink, RoundEvent};

//! A console blackjack game against an automated dealer.
//!
//! The crate provides a [`Game`] type that runs one round: it builds the deck,
//! deals, alternates the house policy with the player's draw/stand decisions,
//! then reveals the hole card and scores both hands. Everything a human sees
//! goes through a [`Presenter`]; [`ConsoleTable`] is the terminal one.
//!
//! Card draws go through an [`IndexSource`], so a round can be replayed
//! exactly from a seed or a scripted index list.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use hole21::{ConsoleTable, Game, GameOptions, SeededSource};
//!
//! let stdin = io::stdin();
//! let mut table = ConsoleTable::new(stdin.lock(), io::stdout());
//! let mut game = Game::new(&mut table, GameOptions::default(), SeededSource::new(42));
//! game.start()?;
//! game.play()?;
//! game.end()?;
//! # Ok::<(), hole21::RoundError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod presenter;
pub mod result;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use console::{ConsoleTable, Replay};
pub use error::{CardError, PileError, RoundError};
pub use game::{Game, Phase};
pub use hand::{BLACKJACK, calculate_score, is_bust, is_soft};
pub use options::GameOptions;
pub use pile::{CardPile, IndexSource, ScriptedIndices, SeededSource};
pub use presenter::{Notice, Presenter, TableView};
pub use result::{Outcome, RoundSummary, Winner};

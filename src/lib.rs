// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Decide whether a team can still finish first in a league.
//!
//! Under the `1-0` and `2-1-0` scoring systems the question is answered
//! exactly by a maximum flow computation on a network of the remaining
//! games, and the minimal cut names the rivals that cause an elimination.
//! Under `3-1-0` the problem is NP-complete and only a fast check on point
//! totals is available.
//!
//! ```
//! use league_elimination::{check_all, LeagueSnapshot, ScoringRule, Team};
//!
//! let league = LeagueSnapshot::new(vec![
//!     Team::new("Ajax", 10),
//!     Team::new("Benfica", 8).with_games("Celtic", 1),
//!     Team::new("Celtic", 0).with_games("Benfica", 1),
//! ]).unwrap();
//!
//! let report: Vec<String> = check_all(&league, ScoringRule::WinLoss)
//!     .unwrap()
//!     .iter()
//!     .map(|d| d.to_string())
//!     .collect();
//! assert_eq!(report, vec![
//!     "Ajax: IN CONTENTION",
//!     "Benfica: ELIMINATED by Ajax",
//!     "Celtic: ELIMINATED by Ajax, Benfica",
//! ]);
//! ```

// # Data

pub mod error;
pub use self::error::{Error, FixtureProblem, Result};

pub mod scoring;
pub use self::scoring::ScoringRule;

pub mod standings;
pub use self::standings::{GameResult, LeagueSnapshot, Record, Team, TeamId};

#[cfg(feature = "json")]
pub mod loader;

// # Algorithms

pub mod network;
pub use self::network::FlowNetwork;

pub mod maxflow;

pub mod elimination;
pub use self::elimination::{check_all, decide, is_eliminated, Certificate, Decision};

pub mod heuristic;
pub use self::heuristic::is_eliminated_heuristic;

/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Error type of the crate.

use crate::scoring::ScoringRule;

use std::io;
use thiserror::Error;

/// What is wrong with the fixture list of a team.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureProblem {
    #[error("negative number of games ({games}) left against {opponent}")]
    Negative { opponent: String, games: i64 },

    #[error("{games} games left against {opponent}, but {opponent} lists {reverse}")]
    Asymmetric { opponent: String, games: i64, reverse: i64 },

    #[error("games left against itself")]
    SelfFixture,

    #[error("unknown opponent {0}")]
    UnknownOpponent(String),

    #[error("no game left against {0}")]
    NoGameLeft(String),

    #[error("season length {found} differs from {expected}")]
    SeasonLength { expected: u64, found: u64 },

    #[error("{points} points do not match the record worth {record} points under 3-1-0")]
    PointsMismatch { points: u64, record: u64 },

    #[error("point or game totals are too large")]
    Overflow,
}

/// Error when building or querying a league snapshot.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid fixture data for {team}: {problem}")]
    InvalidFixtureData { team: String, problem: FixtureProblem },

    #[error("unknown scoring rule '{0}' (expected 1-0, 2-1-0 or 3-1-0)")]
    UnknownScoringRule(String),

    #[error("scoring rule {0} has no exact flow formulation")]
    InexactScoringRule(ScoringRule),

    #[error("duplicate team name {0}")]
    DuplicateTeam(String),

    #[error("unknown team {0}")]
    UnknownTeam(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
}

impl Error {
    pub(crate) fn fixture<S: Into<String>>(team: S, problem: FixtureProblem) -> Self {
        Error::InvalidFixtureData {
            team: team.into(),
            problem,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

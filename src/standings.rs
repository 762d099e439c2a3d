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

//! League standings.
//!
//! A [`LeagueSnapshot`] is the state of a league at one point of the
//! season: the current points of every team and the games still to be
//! played. The snapshot is validated once on construction and is immutable
//! afterwards.
//!
//! # Example
//!
//! ```
//! use league_elimination::{LeagueSnapshot, ScoringRule, Team};
//!
//! let league = LeagueSnapshot::new(vec![
//!     Team::new("A", 10),
//!     Team::new("B", 8).with_games("C", 1),
//!     Team::new("C", 0).with_games("B", 1),
//! ]).unwrap();
//!
//! let b = league.id("B").unwrap();
//! assert_eq!(league.remaining(b), 1);
//! assert_eq!(league.ceiling(b, ScoringRule::WinLoss), 9);
//! assert_eq!(league.ceiling(b, ScoringRule::ThreeOneZero), 11);
//!
//! // fixtures must be symmetric
//! assert!(LeagueSnapshot::new(vec![
//!     Team::new("A", 0).with_games("B", 2),
//!     Team::new("B", 0).with_games("A", 1),
//! ]).is_err());
//! ```

use crate::error::{Error, FixtureProblem, Result};
use crate::scoring::ScoringRule;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Games won, drawn and lost so far.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Record {
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
}

impl Record {
    /// Number of games played.
    pub fn played(&self) -> u64 {
        self.wins + self.draws + self.losses
    }
}

/// A team as supplied by a data source.
///
/// Game counts are signed so that negative input can be detected; a team
/// that is part of a [`LeagueSnapshot`] is known to have valid counts.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Team {
    pub name: String,
    /// Current points, used for every rule if there is no `record`. With a
    /// record these are its `3-1-0` points.
    pub points: u64,
    pub record: Option<Record>,
    /// Opponent name -> number of games left against it.
    pub remaining: BTreeMap<String, i64>,
}

impl Team {
    /// Create a team without a record and without games left.
    pub fn new<S: Into<String>>(name: S, points: u64) -> Self {
        Team {
            name: name.into(),
            points,
            record: None,
            remaining: BTreeMap::new(),
        }
    }

    /// Attach a record, from which points are derived per scoring rule.
    ///
    /// The team's points are set to the record's `3-1-0` points.
    pub fn with_record(mut self, record: Record) -> Self {
        self.points = record.wins.saturating_mul(3).saturating_add(record.draws);
        self.record = Some(record);
        self
    }

    /// Set the number of games left against `opponent`.
    pub fn with_games<S: Into<String>>(mut self, opponent: S, games: i64) -> Self {
        self.remaining.insert(opponent.into(), games);
        self
    }
}

/// Handle of a team within a snapshot.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct TeamId(usize);

impl TeamId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The outcome of a single game, seen from the first team.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

/// Validated, immutable league standings.
#[derive(Clone, Debug)]
pub struct LeagueSnapshot {
    teams: Vec<Team>,
    ids: HashMap<String, TeamId>,
    /// Row-major `n x n` matrix of games left between two teams.
    games: Vec<u64>,
    totals: Vec<u64>,
}

impl LeagueSnapshot {
    /// Validate `teams` and create a snapshot.
    ///
    /// Fails with [`Error::DuplicateTeam`] if two teams share a name and with
    /// [`Error::InvalidFixtureData`] if some count is negative, refers to
    /// an unknown team or to the team itself, or is not matched by the
    /// opponent's count. A team with a record must have the record's `3-1-0`
    /// points. If every team carries a record, all teams must play the same
    /// number of games over the season. Point totals reachable by the end of
    /// the season must fit into `u64`.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let n = teams.len();
        let mut ids = HashMap::with_capacity(n);
        for (i, t) in teams.iter().enumerate() {
            if ids.insert(t.name.clone(), TeamId(i)).is_some() {
                return Err(Error::DuplicateTeam(t.name.clone()));
            }
        }

        let mut games = vec![0; n * n];
        for (i, t) in teams.iter().enumerate() {
            for (opp, &k) in &t.remaining {
                let j = match ids.get(opp) {
                    Some(&TeamId(j)) => j,
                    None => return Err(Error::fixture(&t.name, FixtureProblem::UnknownOpponent(opp.clone()))),
                };
                if i == j && k != 0 {
                    return Err(Error::fixture(&t.name, FixtureProblem::SelfFixture));
                }
                if k < 0 {
                    return Err(Error::fixture(
                        &t.name,
                        FixtureProblem::Negative {
                            opponent: opp.clone(),
                            games: k,
                        },
                    ));
                }
                let reverse = teams[j].remaining.get(&t.name).copied().unwrap_or(0);
                if reverse != k {
                    return Err(Error::fixture(
                        &t.name,
                        FixtureProblem::Asymmetric {
                            opponent: opp.clone(),
                            games: k,
                            reverse,
                        },
                    ));
                }
                games[i * n + j] = k as u64;
            }
        }

        let mut totals = Vec::with_capacity(n);
        // points all remaining games hand out under the richest rule
        let mut handed_out = 0u64;
        for (i, t) in teams.iter().enumerate() {
            if let Some(r) = t.record {
                match r.wins.checked_mul(3).and_then(|p| p.checked_add(r.draws)) {
                    Some(p) if p != t.points => {
                        return Err(Error::fixture(
                            &t.name,
                            FixtureProblem::PointsMismatch {
                                points: t.points,
                                record: p,
                            },
                        ))
                    }
                    Some(_) => {}
                    None => return Err(Error::fixture(&t.name, FixtureProblem::Overflow)),
                }
            }
            let total = games[i * n..(i + 1) * n]
                .iter()
                .try_fold(0u64, |sum, &k| sum.checked_add(k))
                .filter(|&k| in_range(t, k).is_some());
            handed_out = match total.and_then(|k| handed_out.checked_add(k.checked_mul(3)?)) {
                Some(h) => h,
                None => return Err(Error::fixture(&t.name, FixtureProblem::Overflow)),
            };
            totals.extend(total);
        }

        if n > 0 && teams.iter().all(|t| t.record.is_some()) {
            let season = |i: usize| teams[i].record.map_or(0, |r| r.played()) + totals[i];
            let expected = season(0);
            if let Some(i) = (1..n).find(|&i| season(i) != expected) {
                return Err(Error::fixture(
                    &teams[i].name,
                    FixtureProblem::SeasonLength {
                        expected,
                        found: season(i),
                    },
                ));
            }
        }

        Ok(LeagueSnapshot {
            teams,
            ids,
            games,
            totals,
        })
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// All team handles in snapshot order.
    pub fn ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        (0..self.teams.len()).map(TeamId)
    }

    /// All teams other than `target`, in snapshot order.
    pub fn rivals(&self, target: TeamId) -> impl Iterator<Item = TeamId> + '_ {
        self.ids().filter(move |&id| id != target)
    }

    /// The handle of the team called `name`.
    pub fn id(&self, name: &str) -> Result<TeamId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownTeam(name.to_string()))
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub fn name(&self, id: TeamId) -> &str {
        &self.teams[id.0].name
    }

    /// Games left between `a` and `b`.
    pub fn games(&self, a: TeamId, b: TeamId) -> u64 {
        self.games[a.0 * self.teams.len() + b.0]
    }

    /// Total number of games left for `id`.
    pub fn remaining(&self, id: TeamId) -> u64 {
        self.totals[id.0]
    }

    /// Current points of `id` under `rule`.
    pub fn points(&self, id: TeamId, rule: ScoringRule) -> u64 {
        let t = &self.teams[id.0];
        t.record.map_or(t.points, |r| rule.points(&r))
    }

    /// Most points `id` can reach under `rule`: current points plus a win in
    /// every remaining game.
    pub fn ceiling(&self, id: TeamId, rule: ScoringRule) -> u64 {
        self.points(id, rule) + rule.win() * self.remaining(id)
    }

    /// Return the standings after one game between `a` and `b` has been
    /// played with `result` (seen from `a`).
    ///
    /// Teams with a record get their record updated, all others receive the
    /// points `rule` awards for the result.
    pub fn play(&self, a: TeamId, b: TeamId, result: GameResult, rule: ScoringRule) -> Result<LeagueSnapshot> {
        if a == b || self.games(a, b) == 0 {
            return Err(Error::fixture(self.name(a), FixtureProblem::NoGameLeft(self.name(b).to_string())));
        }

        let (ra, rb) = match result {
            GameResult::Win => (GameResult::Win, GameResult::Loss),
            GameResult::Draw => (GameResult::Draw, GameResult::Draw),
            GameResult::Loss => (GameResult::Loss, GameResult::Win),
        };

        let mut teams = self.teams.clone();
        let (na, nb) = (self.name(a).to_string(), self.name(b).to_string());
        apply(&mut teams[a.0], &nb, ra, rule);
        apply(&mut teams[b.0], &na, rb, rule);
        LeagueSnapshot::new(teams)
    }
}

fn apply(team: &mut Team, opponent: &str, result: GameResult, rule: ScoringRule) {
    if let Some(k) = team.remaining.get_mut(opponent) {
        *k -= 1;
    }
    let gained = match result {
        GameResult::Win => rule.win(),
        GameResult::Draw => rule.draw().unwrap_or(0),
        GameResult::Loss => rule.loss(),
    };
    match team.record.as_mut() {
        Some(r) => {
            match result {
                GameResult::Win => r.wins += 1,
                GameResult::Draw => r.draws += 1,
                GameResult::Loss => r.losses += 1,
            }
            team.points = ScoringRule::ThreeOneZero.points(r);
        }
        None => team.points += gained,
    }
}

/// The ceiling of `team` under `3-1-0` with `remaining` games left, if it
/// and the team's season length fit into `u64`.
///
/// No rule awards more than `3-1-0`, so every other ceiling fits as well.
fn in_range(team: &Team, remaining: u64) -> Option<u64> {
    if let Some(r) = team.record {
        r.wins.checked_add(r.draws)?.checked_add(r.losses)?.checked_add(remaining)?;
    }
    team.points.checked_add(remaining.checked_mul(3)?)
}

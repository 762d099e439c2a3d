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

//! Elimination decisions.
//!
//! A team is eliminated if it cannot finish first (ties included) whatever
//! the results of the remaining games. Under `1-0` and `2-1-0` this is
//! decided exactly by a max-flow computation, and the minimal cut names a
//! set `R` of rivals that explains the elimination: with `M` the target's
//! ceiling and `w` the points per game,
//!
//! ```text
//!   sum_{i in R} p_i + w * g(R) > |R| * M,
//! ```
//!
//! where `g(R)` counts the games left among the teams of `R`. On average
//! the teams of `R` must end above `M`.
//!
//! # Example
//!
//! ```
//! use league_elimination::{elimination, LeagueSnapshot, ScoringRule, Team};
//!
//! let league = LeagueSnapshot::new(vec![
//!     Team::new("X", 10).with_games("A", 1),
//!     Team::new("A", 10).with_games("X", 1).with_games("B", 3),
//!     Team::new("B", 10).with_games("A", 3),
//! ]).unwrap();
//!
//! // X reaches 11, but A and B share three more points
//! let d = elimination::is_eliminated(&league, "X", ScoringRule::WinLoss).unwrap();
//! assert!(d.eliminated);
//! assert_eq!(d.blocking, vec!["A", "B"]);
//! assert_eq!(d.to_string(), "X: ELIMINATED by A, B");
//!
//! let d = elimination::is_eliminated(&league, "A", ScoringRule::WinLoss).unwrap();
//! assert!(!d.eliminated);
//! assert!(d.blocking.is_empty());
//! ```

use crate::error::{Error, Result};
use crate::heuristic;
use crate::maxflow::EdmondsKarp;
use crate::network;
use crate::scoring::ScoringRule;
use crate::standings::{LeagueSnapshot, TeamId};

use log::debug;
use std::fmt;

/// How an elimination decision was reached.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Certificate {
    /// The target is still in contention (or the check found nothing).
    InContention,
    /// Some rivals already have more points than the target can reach.
    PointsLead,
    /// The remaining rival games cannot be distributed: the maximum flow
    /// stays below the points these games hand out.
    MinCut { flow: u64, required: u64 },
    /// The closed-form `3-1-0` comparison of ceilings.
    Heuristic,
}

/// The elimination decision for one team under one scoring rule.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Decision {
    pub team: String,
    pub rule: ScoringRule,
    pub eliminated: bool,
    /// The rivals responsible for the elimination, in snapshot order.
    ///
    /// Empty if the team is not eliminated or if only the `3-1-0`
    /// comparison of ceilings found the elimination.
    pub blocking: Vec<String>,
    pub certificate: Certificate,
}

impl Decision {
    fn contention(team: &str, rule: ScoringRule) -> Self {
        Decision {
            team: team.to_string(),
            rule,
            eliminated: false,
            blocking: vec![],
            certificate: Certificate::InContention,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.eliminated {
            write!(f, "{}: IN CONTENTION", self.team)
        } else if self.blocking.is_empty() {
            write!(f, "{}: ELIMINATED", self.team)
        } else {
            write!(f, "{}: ELIMINATED by {}", self.team, self.blocking.join(", "))
        }
    }
}

/// Decide exactly whether `target` is eliminated under `rule`.
///
/// Only `1-0` and `2-1-0` have an exact formulation, `3-1-0` fails with
/// [`Error::InexactScoringRule`] (see [`decide`]).
pub fn is_eliminated(snapshot: &LeagueSnapshot, target: &str, rule: ScoringRule) -> Result<Decision> {
    if !rule.is_exact() {
        return Err(Error::InexactScoringRule(rule));
    }
    let x = snapshot.id(target)?;
    if snapshot.len() < 2 {
        return Ok(Decision::contention(target, rule));
    }

    let ceiling = snapshot.ceiling(x, rule);
    let names = |ids: &[TeamId]| ids.iter().map(|&i| snapshot.name(i).to_string()).collect::<Vec<_>>();

    let ahead: Vec<TeamId> = snapshot
        .rivals(x)
        .filter(|&i| snapshot.points(i, rule) > ceiling)
        .collect();
    if !ahead.is_empty() {
        debug!(
            "{} ({}): ceiling {} below {} rival(s) already",
            target,
            rule,
            ceiling,
            ahead.len()
        );
        return Ok(Decision {
            team: target.to_string(),
            rule,
            eliminated: true,
            blocking: names(&ahead),
            certificate: Certificate::PointsLead,
        });
    }

    let net = network::build(snapshot, x, rule)?;
    let mut maxflow = EdmondsKarp::new(&net);
    maxflow.solve(|e| net.upper(e));
    let flow = maxflow.value();
    let required = net.required();
    debug!(
        "{} ({}): ceiling {}, flow {} of {}",
        target, rule, ceiling, flow, required
    );

    if flow >= required {
        return Ok(Decision::contention(target, rule));
    }

    let mut blocking: Vec<TeamId> = maxflow.mincut_teams().collect();
    blocking.sort();
    Ok(Decision {
        team: target.to_string(),
        rule,
        eliminated: true,
        blocking: names(&blocking),
        certificate: Certificate::MinCut { flow, required },
    })
}

/// Decide whether `target` is eliminated under any rule.
///
/// `1-0` and `2-1-0` are decided exactly by [`is_eliminated`]. `3-1-0` uses
/// the checks of [`heuristic::is_eliminated_heuristic`]: rivals already
/// ahead on points are named as blocking teams, otherwise the comparison of
/// ceilings decides. A negative answer then does not prove the team can
/// still finish first.
pub fn decide(snapshot: &LeagueSnapshot, target: &str, rule: ScoringRule) -> Result<Decision> {
    if rule.is_exact() {
        return is_eliminated(snapshot, target, rule);
    }

    let ahead = heuristic::points_leaders(snapshot, target)?;
    if !ahead.is_empty() {
        debug!("{} ({}): {} rival(s) already ahead", target, rule, ahead.len());
        return Ok(Decision {
            team: target.to_string(),
            rule,
            eliminated: true,
            blocking: ahead.iter().map(|&i| snapshot.name(i).to_string()).collect(),
            certificate: Certificate::PointsLead,
        });
    }

    if !heuristic::below_all_ceilings(snapshot, target)? {
        return Ok(Decision::contention(target, rule));
    }
    Ok(Decision {
        team: target.to_string(),
        rule,
        eliminated: true,
        blocking: vec![],
        certificate: Certificate::Heuristic,
    })
}

/// Decide elimination of every team, in snapshot order.
pub fn check_all(snapshot: &LeagueSnapshot, rule: ScoringRule) -> Result<Vec<Decision>> {
    snapshot
        .ids()
        .map(|i| decide(snapshot, snapshot.name(i), rule))
        .collect()
}

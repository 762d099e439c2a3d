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

//! Elimination check for the `3-1-0` scoring system.
//!
//! Under `3-1-0` a draw hands out one point less than a decisive game, so
//! the points produced by the remaining games are not fixed and the flow
//! formulation breaks down; the decision problem is NP-complete. This
//! module provides a closed-form check on the point totals instead.
//!
//! With `P` the target's points, `k` its games left and `P_i*` the
//! ceiling `p_i + 3 k_i` of rival `i`, the target is reported eliminated if
//!
//! ```text
//!   P + 3k < min_i P_i*
//! ```
//!
//! or if some rival already has more than `P + 3k` points. The latter
//! condition alone proves elimination. A `false` answer never proves that
//! the target can still finish first, it only says the check found nothing.
//!
//! ```
//! use league_elimination::heuristic::is_eliminated_heuristic;
//! use league_elimination::{LeagueSnapshot, Team};
//!
//! let league = LeagueSnapshot::new(vec![
//!     Team::new("X", 50).with_games("Y", 5),
//!     Team::new("Y", 58).with_games("X", 5),
//!     Team::new("A", 60).with_games("B", 4),
//!     Team::new("B", 61).with_games("A", 4),
//! ]).unwrap();
//!
//! // X reaches 65, the lowest rival ceiling is A's 72
//! assert!(is_eliminated_heuristic(&league, "X").unwrap());
//! assert!(!is_eliminated_heuristic(&league, "A").unwrap());
//! ```

use crate::error::Result;
use crate::scoring::ScoringRule;
use crate::standings::{LeagueSnapshot, TeamId};

use log::debug;

const RULE: ScoringRule = ScoringRule::ThreeOneZero;

/// The rivals that already have more points than `target` can reach, in
/// snapshot order.
pub fn points_leaders(snapshot: &LeagueSnapshot, target: &str) -> Result<Vec<TeamId>> {
    let x = snapshot.id(target)?;
    let ceiling = snapshot.ceiling(x, RULE);
    Ok(snapshot
        .rivals(x)
        .filter(|&i| snapshot.points(i, RULE) > ceiling)
        .collect())
}

/// Whether some rival already has more points than `target` can reach.
///
/// This condition proves elimination under every scoring rule with the
/// same win value.
pub fn is_trivially_eliminated(snapshot: &LeagueSnapshot, target: &str) -> Result<bool> {
    Ok(!points_leaders(snapshot, target)?.is_empty())
}

/// Compare the ceiling of `target` with the lowest rival ceiling.
pub(crate) fn below_all_ceilings(snapshot: &LeagueSnapshot, target: &str) -> Result<bool> {
    let x = snapshot.id(target)?;
    let ceiling = snapshot.ceiling(x, RULE);
    let lowest = match snapshot.rivals(x).map(|i| snapshot.ceiling(i, RULE)).min() {
        Some(c) => c,
        None => return Ok(false),
    };
    debug!("{}: ceiling {}, lowest rival ceiling {}", target, ceiling, lowest);
    Ok(ceiling < lowest)
}

/// Check elimination of `target` under `3-1-0` on point totals only.
///
/// Returns `false` if there are no rivals. Ties between the target's
/// ceiling and a rival's ceiling count as in contention.
pub fn is_eliminated_heuristic(snapshot: &LeagueSnapshot, target: &str) -> Result<bool> {
    if is_trivially_eliminated(snapshot, target)? {
        debug!("{}: some rival already above its ceiling", target);
        return Ok(true);
    }
    below_all_ceilings(snapshot, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::Team;

    #[test]
    fn equal_ceilings_stay_in_contention() {
        let s = LeagueSnapshot::new(vec![
            Team::new("X", 60).with_games("A", 1),
            Team::new("A", 60).with_games("X", 1),
        ])
        .unwrap();
        assert!(!is_eliminated_heuristic(&s, "X").unwrap());
        assert!(!is_eliminated_heuristic(&s, "A").unwrap());
    }

    #[test]
    fn no_rivals() {
        let s = LeagueSnapshot::new(vec![Team::new("X", 0)]).unwrap();
        assert!(!is_eliminated_heuristic(&s, "X").unwrap());
    }

    #[test]
    fn points_lead_without_games() {
        // the rival is out of games, its ceiling equals its points
        let s = LeagueSnapshot::new(vec![
            Team::new("X", 10).with_games("B", 1),
            Team::new("A", 14),
            Team::new("B", 0).with_games("X", 1),
        ])
        .unwrap();
        assert!(is_trivially_eliminated(&s, "X").unwrap());
        assert!(is_eliminated_heuristic(&s, "X").unwrap());
        assert!(!is_trivially_eliminated(&s, "A").unwrap());
    }

    #[test]
    fn leaders_in_snapshot_order() {
        let s = LeagueSnapshot::new(vec![
            Team::new("A", 20),
            Team::new("X", 10).with_games("C", 2),
            Team::new("B", 17),
            Team::new("C", 16).with_games("X", 2),
        ])
        .unwrap();
        let names = |ids: Vec<TeamId>| ids.into_iter().map(|i| s.name(i).to_string()).collect::<Vec<_>>();
        // X reaches 16, C only ties
        assert_eq!(names(points_leaders(&s, "X").unwrap()), vec!["A", "B"]);
        assert!(points_leaders(&s, "A").unwrap().is_empty());
    }
}

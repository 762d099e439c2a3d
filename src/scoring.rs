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

//! Scoring systems.
//!
//! A scoring system `EST(a,b,c)` awards `a` points for a win, `b` for a
//! draw and `c` for a loss.
//!
//! ```
//! use league_elimination::ScoringRule;
//!
//! let rule: ScoringRule = "2-1-0".parse().unwrap();
//! assert_eq!(rule, ScoringRule::TwoOneZero);
//! assert_eq!(rule.win(), 2);
//! assert!(rule.is_exact());
//! assert!("4-2-0".parse::<ScoringRule>().is_err());
//! ```

use crate::error::Error;
use crate::standings::Record;

use std::fmt;
use std::str::FromStr;

/// The scoring systems supported by the decision engine.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum ScoringRule {
    /// One point per win, no draws.
    WinLoss,
    /// Two points per win, one per draw.
    TwoOneZero,
    /// Three points per win, one per draw.
    ThreeOneZero,
}

impl ScoringRule {
    /// All rules, in the order reports list them.
    pub const ALL: [ScoringRule; 3] = [ScoringRule::WinLoss, ScoringRule::TwoOneZero, ScoringRule::ThreeOneZero];

    /// Points for a win.
    pub fn win(self) -> u64 {
        match self {
            ScoringRule::WinLoss => 1,
            ScoringRule::TwoOneZero => 2,
            ScoringRule::ThreeOneZero => 3,
        }
    }

    /// Points for a draw, `None` if the rule has no draws.
    pub fn draw(self) -> Option<u64> {
        match self {
            ScoringRule::WinLoss => None,
            ScoringRule::TwoOneZero | ScoringRule::ThreeOneZero => Some(1),
        }
    }

    /// Points for a loss.
    pub fn loss(self) -> u64 {
        0
    }

    /// Whether elimination under this rule is decided exactly by max flow.
    ///
    /// Under `1-0` and `2-1-0` every game hands out the same number of
    /// points whatever its result. Under `3-1-0` a draw loses a point,
    /// which makes the decision problem NP-complete.
    pub fn is_exact(self) -> bool {
        self != ScoringRule::ThreeOneZero
    }

    /// The points a record is worth under this rule.
    pub fn points(self, record: &Record) -> u64 {
        match self {
            ScoringRule::WinLoss => record.wins,
            _ => self.win() * record.wins + self.draw().unwrap_or(0) * record.draws,
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ScoringRule::WinLoss => "1-0",
            ScoringRule::TwoOneZero => "2-1-0",
            ScoringRule::ThreeOneZero => "3-1-0",
        };
        f.write_str(s)
    }
}

impl FromStr for ScoringRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-0" | "win-loss" => Ok(ScoringRule::WinLoss),
            "2-1-0" => Ok(ScoringRule::TwoOneZero),
            "3-1-0" => Ok(ScoringRule::ThreeOneZero),
            other => Err(Error::UnknownScoringRule(other.to_string())),
        }
    }
}

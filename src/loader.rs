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

//! Reading league files in JSON format.
//!
//! A league file lists the teams with their results so far and the games
//! they have left:
//!
//! ```json
//! { "teams": [
//!     { "name": "A", "wins": 3, "draws": 1, "losses": 0, "remaining": { "B": 2 } },
//!     { "name": "B", "points": 4, "remaining": { "A": 2 } }
//! ] }
//! ```
//!
//! If any of `wins`, `draws` and `losses` is given the team carries a
//! [`Record`] (missing counts are zero) and its points are derived from it
//! for each scoring rule; a given `points` must then equal the record's
//! `3-1-0` points `3 * wins + draws`, which is also its default. Without a
//! record `points` is used for every rule and defaults to zero.
//!
//! ```
//! use league_elimination::{loader, ScoringRule};
//!
//! let league = loader::from_str(r#"{ "teams": [
//!     { "name": "A", "wins": 3, "draws": 1, "losses": 0, "remaining": { "B": 2 } },
//!     { "name": "B", "wins": 0, "draws": 1, "losses": 3, "remaining": { "A": 2 } }
//! ] }"#).unwrap();
//!
//! let a = league.id("A").unwrap();
//! assert_eq!(league.points(a, ScoringRule::WinLoss), 3);
//! assert_eq!(league.points(a, ScoringRule::ThreeOneZero), 10);
//! assert_eq!(league.remaining(a), 2);
//! ```

use crate::error::{Error, Result};
use crate::standings::{LeagueSnapshot, Record, Team};

use log::debug;
use serde_derive::Deserialize;

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// One team entry of a league file.
#[derive(Deserialize, Clone, Debug)]
pub struct TeamEntry {
    pub name: String,
    #[serde(default)]
    pub wins: Option<u64>,
    #[serde(default)]
    pub draws: Option<u64>,
    #[serde(default)]
    pub losses: Option<u64>,
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default)]
    pub remaining: BTreeMap<String, i64>,
}

/// The contents of a league file.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LeagueFile {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

impl From<TeamEntry> for Team {
    fn from(entry: TeamEntry) -> Team {
        let mut team = Team::new(entry.name, 0);
        team.remaining = entry.remaining;
        if entry.wins.is_some() || entry.draws.is_some() || entry.losses.is_some() {
            team = team.with_record(Record {
                wins: entry.wins.unwrap_or(0),
                draws: entry.draws.unwrap_or(0),
                losses: entry.losses.unwrap_or(0),
            });
        }
        // checked against the record when the snapshot is built
        if let Some(points) = entry.points {
            team.points = points;
        }
        team
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format {
            line: err.line(),
            msg: err.to_string(),
        }
    }
}

impl LeagueFile {
    /// Validate the file contents and turn them into a snapshot.
    pub fn into_snapshot(self) -> Result<LeagueSnapshot> {
        LeagueSnapshot::new(self.teams.into_iter().map(Team::from).collect())
    }
}

/// Read a league from a reader.
pub fn from_reader<R: Read>(reader: R) -> Result<LeagueSnapshot> {
    let file: LeagueFile = serde_json::from_reader(BufReader::new(reader))?;
    debug!("read league with {} teams", file.teams.len());
    file.into_snapshot()
}

/// Read a league from a string.
pub fn from_str(s: &str) -> Result<LeagueSnapshot> {
    let file: LeagueFile = serde_json::from_str(s)?;
    file.into_snapshot()
}

/// Read a league from the file `path`.
pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<LeagueSnapshot> {
    debug!("reading league file {}", path.as_ref().display());
    from_reader(fs::File::open(path)?)
}

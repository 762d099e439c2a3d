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

use time::OffsetDateTime;

use rustop::opts;

use league_elimination::{check_all, loader, LeagueSnapshot, ScoringRule};

use std::error::Error;
use std::process;

fn report(league: &LeagueSnapshot, rule: ScoringRule) -> Result<(), Box<dyn Error>> {
    println!();
    println!("=== Elimination Analysis ({} scoring system) ===", rule);

    let tstart = OffsetDateTime::now_utc();
    let decisions = check_all(league, rule)?;
    let tend = OffsetDateTime::now_utc();

    for d in &decisions {
        println!("{}", d);
    }
    if !rule.is_exact() {
        println!("(3-1-0 uses a heuristic, IN CONTENTION is not a guarantee)");
    }
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Decide which teams of a league can still finish first.";
        opt rule:Option<String>, desc:"Scoring system: 1-0, 2-1-0 or 3-1-0 (default: all).";
        param file:String, desc:"League file name";
    }
    .parse_or_exit();

    let league = loader::read_from_file(&args.file)?;
    println!("League: {} ({} teams)", args.file, league.len());

    match args.rule {
        Some(rule) => report(&league, rule.parse()?)?,
        None => {
            for &rule in &ScoringRule::ALL {
                report(&league, rule)?;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

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

use league_elimination::heuristic::is_trivially_eliminated;
use league_elimination::{is_eliminated, Certificate, Error, GameResult, LeagueSnapshot, ScoringRule, Team, TeamId};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const NUM_LEAGUES: usize = 300;
const EXACT: [ScoringRule; 2] = [ScoringRule::WinLoss, ScoringRule::TwoOneZero];

fn random_league(rng: &mut ChaCha8Rng) -> LeagueSnapshot {
    loop {
        let n = rng.gen_range(3..=5);
        let names: Vec<String> = (0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect();
        let mut teams: Vec<Team> = names.iter().map(|name| Team::new(name.as_str(), rng.gen_range(0..=12))).collect();
        let mut total = 0;
        for i in 0..n {
            for j in i + 1..n {
                let g = [0, 0, 1, 1, 2][rng.gen_range(0..5)];
                if g > 0 {
                    teams[i].remaining.insert(names[j].clone(), g);
                    teams[j].remaining.insert(names[i].clone(), g);
                    total += g;
                }
            }
        }
        if total <= 10 {
            return LeagueSnapshot::new(teams).unwrap();
        }
    }
}

fn outcomes(rule: ScoringRule) -> &'static [(u64, u64)] {
    match rule {
        ScoringRule::WinLoss => &[(1, 0), (0, 1)],
        ScoringRule::TwoOneZero => &[(2, 0), (1, 1), (0, 2)],
        ScoringRule::ThreeOneZero => &[(3, 0), (1, 1), (0, 3)],
    }
}

fn assign(games: &[(usize, usize)], pts: &mut Vec<u64>, ceiling: u64, rule: ScoringRule) -> bool {
    let (&(i, j), rest) = match games.split_first() {
        Some(x) => x,
        None => return true,
    };
    for &(a, b) in outcomes(rule) {
        if pts[i] + a <= ceiling && pts[j] + b <= ceiling {
            pts[i] += a;
            pts[j] += b;
            let ok = assign(rest, pts, ceiling, rule);
            pts[i] -= a;
            pts[j] -= b;
            if ok {
                return true;
            }
        }
    }
    false
}

/// Whether `x` can finish first, by trying all results of the rival games.
fn can_finish_first(s: &LeagueSnapshot, x: TeamId, rule: ScoringRule) -> bool {
    let ceiling = s.ceiling(x, rule);
    let mut pts: Vec<u64> = s.ids().map(|i| s.points(i, rule)).collect();
    if s.rivals(x).any(|i| pts[i.index()] > ceiling) {
        return false;
    }
    let rivals: Vec<TeamId> = s.rivals(x).collect();
    let mut games = vec![];
    for (k, &i) in rivals.iter().enumerate() {
        for &j in &rivals[k + 1..] {
            for _ in 0..s.games(i, j) {
                games.push((i.index(), j.index()));
            }
        }
    }
    assign(&games, &mut pts, ceiling, rule)
}

#[test]
fn exact_decision_matches_enumeration() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut eliminated = 0;
    for _ in 0..NUM_LEAGUES {
        let s = random_league(&mut rng);
        for &rule in &EXACT {
            for x in s.ids() {
                let d = is_eliminated(&s, s.name(x), rule).unwrap();
                assert_eq!(d.eliminated, !can_finish_first(&s, x, rule), "{:?} {}", s, d);
                if d.eliminated {
                    eliminated += 1;
                }
            }
        }
    }
    // make sure both answers occur
    assert!(eliminated > 0);
}

#[test]
fn blocking_teams_certify_elimination() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..NUM_LEAGUES {
        let s = random_league(&mut rng);
        for &rule in &EXACT {
            for x in s.ids() {
                let d = is_eliminated(&s, s.name(x), rule).unwrap();
                if !d.eliminated {
                    assert!(d.blocking.is_empty());
                    continue;
                }
                assert!(!d.blocking.is_empty());
                let r: Vec<TeamId> = d.blocking.iter().map(|name| s.id(name).unwrap()).collect();
                assert!(r.iter().all(|&i| i != x));

                let ceiling = s.ceiling(x, rule);
                let points: u64 = r.iter().map(|&i| s.points(i, rule)).sum();
                let mut games = 0;
                for (k, &i) in r.iter().enumerate() {
                    for &j in &r[k + 1..] {
                        games += s.games(i, j);
                    }
                }
                assert!(points + rule.win() * games > r.len() as u64 * ceiling, "{}", d);

                // the blocking teams alone, playing only among each other,
                // still eliminate a team with the same ceiling
                let mut teams = vec![Team::new(s.name(x), ceiling)];
                for &i in &r {
                    let mut t = Team::new(s.name(i), s.points(i, rule));
                    for &j in &r {
                        if s.games(i, j) > 0 {
                            t = t.with_games(s.name(j), s.games(i, j) as i64);
                        }
                    }
                    teams.push(t);
                }
                let sub = LeagueSnapshot::new(teams).unwrap();
                assert!(is_eliminated(&sub, s.name(x), rule).unwrap().eliminated);
            }
        }
    }
}

#[test]
fn elimination_is_monotone() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..NUM_LEAGUES {
        let mut s = random_league(&mut rng);
        let rule = EXACT[rng.gen_range(0..2)];
        let mut out: Vec<bool> = vec![false; s.len()];
        loop {
            for x in s.ids() {
                let d = is_eliminated(&s, s.name(x), rule).unwrap();
                assert!(d.eliminated || !out[x.index()], "{} came back", s.name(x));
                out[x.index()] = d.eliminated;
            }

            let left: Vec<(TeamId, TeamId)> = s
                .ids()
                .flat_map(|i| s.ids().map(move |j| (i, j)))
                .filter(|&(i, j)| i < j && s.games(i, j) > 0)
                .collect();
            if left.is_empty() {
                break;
            }
            let (a, b) = left[rng.gen_range(0..left.len())];
            let result = match rule {
                ScoringRule::WinLoss => [GameResult::Win, GameResult::Loss][rng.gen_range(0..2)],
                _ => [GameResult::Win, GameResult::Draw, GameResult::Loss][rng.gen_range(0..3)],
            };
            s = s.play(a, b, result, rule).unwrap();
        }
        // at the end of the season exactly the leaders are in contention
        let best = s.ids().map(|i| s.points(i, rule)).max().unwrap();
        for x in s.ids() {
            assert_eq!(out[x.index()], s.points(x, rule) < best);
        }
    }
}

#[test]
fn points_lead_is_sound_for_three_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut found = 0;
    for _ in 0..NUM_LEAGUES {
        let s = random_league(&mut rng);
        for x in s.ids() {
            if is_trivially_eliminated(&s, s.name(x)).unwrap() {
                found += 1;
                assert!(!can_finish_first(&s, x, ScoringRule::ThreeOneZero));
            }
        }
    }
    assert!(found > 0);
}

#[test]
fn asymmetric_fixtures_are_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let s = random_league(&mut rng);
        let mut teams: Vec<Team> = s.ids().map(|i| s.team(i).clone()).collect();
        let i = rng.gen_range(0..teams.len());
        let j = (i + 1) % teams.len();
        let opponent = teams[j].name.clone();
        *teams[i].remaining.entry(opponent).or_insert(0) += 1;
        match LeagueSnapshot::new(teams) {
            Err(Error::InvalidFixtureData { .. }) => {}
            r => panic!("asymmetric fixtures accepted: {:?}", r.map(|s| s.len())),
        }
    }
}

#[test]
fn concurrent_queries_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let s = random_league(&mut rng);
    let sequential: Vec<_> = s
        .ids()
        .map(|x| is_eliminated(&s, s.name(x), ScoringRule::TwoOneZero).unwrap())
        .collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = s
            .ids()
            .map(|x| {
                let s = &s;
                scope.spawn(move || is_eliminated(s, s.name(x), ScoringRule::TwoOneZero).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
    for d in &sequential {
        if d.eliminated {
            assert!(matches!(
                d.certificate,
                Certificate::PointsLead | Certificate::MinCut { .. }
            ));
        }
    }
}

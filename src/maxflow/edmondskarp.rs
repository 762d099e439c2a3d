/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! # Example
//!
//! In the classic example of the 1996 American League East, Detroit has
//! 49 wins and 27 games left, 20 of them outside the division. Counting
//! those as won, Detroit reaches at most 76 wins, but New York,
//! Baltimore, Boston and Toronto play too many games among each other.
//!
//! ```
//! use league_elimination::maxflow::edmondskarp;
//! use league_elimination::network::{self, NodeKind};
//! use league_elimination::{LeagueSnapshot, ScoringRule, Team};
//!
//! let league = LeagueSnapshot::new(vec![
//!     Team::new("New York", 75).with_games("Baltimore", 3).with_games("Boston", 8)
//!         .with_games("Toronto", 7).with_games("Detroit", 3),
//!     Team::new("Baltimore", 71).with_games("New York", 3).with_games("Boston", 2)
//!         .with_games("Toronto", 7).with_games("Detroit", 4),
//!     Team::new("Boston", 69).with_games("New York", 8).with_games("Baltimore", 2),
//!     Team::new("Toronto", 63).with_games("New York", 7).with_games("Baltimore", 7),
//!     Team::new("Detroit", 49 + 20).with_games("New York", 3).with_games("Baltimore", 4),
//! ]).unwrap();
//!
//! let detroit = league.id("Detroit").unwrap();
//! let net = network::build(&league, detroit, ScoringRule::WinLoss).unwrap();
//! let (value, flow, mincut) = edmondskarp(&net, |e| net.upper(e));
//!
//! assert!(value < net.required());
//! assert!(flow.iter().all(|&(e, f)| f <= net.upper(e)));
//!
//! let mut blocking: Vec<&str> = mincut
//!     .into_iter()
//!     .filter_map(|u| match net.kind(u) {
//!         NodeKind::Team(i) => Some(league.name(i)),
//!         _ => None,
//!     })
//!     .collect();
//! blocking.sort();
//! assert_eq!(blocking, vec!["Baltimore", "Boston", "New York", "Toronto"]);
//! ```

use crate::network::{Edge, FlowNetwork, Node, NodeKind};
use crate::standings::TeamId;

use log::trace;
use num_traits::NumAssign;
use std::cmp::min;
use std::collections::VecDeque;

/// Predecessor entry of a node not reached by the last search.
const UNREACHED: (usize, usize) = (usize::MAX, usize::MAX);

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'a, F> {
    net: &'a FlowNetwork,
    neighs: Vec<Vec<(usize, usize)>>,
    pred: Vec<(usize, usize)>,
    flow: Vec<F>,
    queue: VecDeque<usize>,
    /// Half-edges of the last augmenting path, from the sink backwards.
    path: Vec<usize>,
    value: F,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new Edmonds-Karp algorithm instance for a network.
    pub fn new(net: &'a FlowNetwork) -> Self {
        EdmondsKarp {
            net,
            neighs: net
                .nodes()
                .map(|u| {
                    net.outedges(u)
                        .map(|(e, v)| (e.index() << 1, v.index()))
                        .chain(net.inedges(u).map(|(e, v)| ((e.index() << 1) | 1, v.index())))
                        .collect()
                })
                .collect(),
            pred: vec![UNREACHED; net.num_nodes()],
            flow: vec![F::zero(); net.num_edges() * 2],
            queue: VecDeque::with_capacity(net.num_nodes()),
            path: vec![],
            value: F::zero(),
        }
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow value on edge `e`
    pub fn flow(&self, e: Edge) -> F {
        self.flow[e.index() << 1]
    }

    /// Return the remaining capacity of edge `e`.
    pub fn residual(&self, e: Edge) -> F {
        self.flow[(e.index() << 1) | 1]
    }

    /// Compute a maximum flow from the network's source to its sink.
    ///
    /// `upper` returns the capacity of each edge.
    pub fn solve<Us>(&mut self, upper: Us)
    where
        Us: Fn(Edge) -> F,
    {
        // even entries hold the flow, odd entries the residual capacity
        for (e, flw) in self.flow.iter_mut().enumerate() {
            *flw = if (e & 1) == 0 {
                F::zero()
            } else {
                upper(self.net.id2edge(e >> 1))
            };
        }
        self.value = F::zero();

        while self.search() {
            let df = self.augment();
            debug_assert!(!df.is_zero());
            trace!("augmenting along path of {} edges", self.path.len());
            self.value += df;
        }
    }

    /// Breadth-first search for a shortest augmenting path.
    ///
    /// Marks every reached node with its predecessor and stores the path
    /// if the sink is reached. Returns whether it was.
    fn search(&mut self) -> bool {
        let src = self.net.source().index();
        let snk = self.net.sink().index();

        self.pred.fill(UNREACHED);
        self.pred[src] = (0, src);
        self.queue.clear();
        self.queue.push_back(src);

        let mut found = false;
        'bfs: while let Some(u) = self.queue.pop_front() {
            for &(e, v) in &self.neighs[u] {
                if self.pred[v] == UNREACHED && !self.flow[e ^ 1].is_zero() {
                    self.pred[v] = (e, u);
                    if v == snk {
                        found = true;
                        break 'bfs;
                    }
                    self.queue.push_back(v);
                }
            }
        }
        if !found {
            return false;
        }

        self.path.clear();
        let mut v = snk;
        while v != src {
            let (e, u) = self.pred[v];
            self.path.push(e);
            v = u;
        }
        true
    }

    /// Push the bottleneck amount along the stored path and return it.
    fn augment(&mut self) -> F {
        let flow = &mut self.flow;
        let df = match self.path.iter().map(|&e| flow[e ^ 1]).min() {
            Some(df) => df,
            None => return F::zero(),
        };
        for &e in &self.path {
            flow[e] += df;
            flow[e ^ 1] -= df;
        }
        df
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the nodes on the source side of the cut, i.e. the nodes
    /// reachable from the source in the final residual network.
    pub fn mincut(&self) -> Vec<Node> {
        self.net
            .nodes()
            .filter(|&u| self.pred[u.index()] != UNREACHED)
            .collect()
    }

    /// Return the rival teams on the source side of the last minimal cut.
    pub fn mincut_teams(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.mincut().into_iter().filter_map(move |u| match self.net.kind(u) {
            NodeKind::Team(i) => Some(i),
            _ => None,
        })
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source to the sink of
/// `net` with the given `upper` bounds on the edges.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn edmondskarp<F, Us>(net: &FlowNetwork, upper: Us) -> (F, Vec<(Edge, F)>, Vec<Node>)
where
    F: NumAssign + Ord + Copy,
    Us: Fn(Edge) -> F,
{
    let mut maxflow = EdmondsKarp::new(net);
    maxflow.solve(upper);
    (
        maxflow.value(),
        net.edges().map(|e| (e, maxflow.flow(e))).collect(),
        maxflow.mincut(),
    )
}

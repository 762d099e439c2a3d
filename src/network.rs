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

//! The elimination flow network.
//!
//! For a target team `x` with ceiling `M` (its points plus a win in every
//! remaining game) the network has
//!
//! - a source `s` and a sink `t`,
//! - a node for every rival `i` with an edge `i -> t` of capacity
//!   `max(M - p_i, 0)`, the points `i` may still gain without passing `x`,
//! - a node for every pair `{i, j}` of rivals with `g_ij > 0` games left,
//!   with an edge `s -> {i,j}` of capacity `w * g_ij` and edges
//!   `{i,j} -> i`, `{i,j} -> j` of the same capacity.
//!
//! Here `w` is the number of points a game hands out. Under `1-0` every
//! game yields one point, under `2-1-0` two points split as 2+0, 1+1 or
//! 0+2; in both cases every split of `w * g_ij` between `i` and `j` is
//! realised by some results of the `g_ij` games. Hence, if no rival is
//! already above `M`, `x` can finish first iff the maximum flow saturates
//! all source edges.
//!
//! ```
//! use league_elimination::{network, LeagueSnapshot, ScoringRule, Team};
//!
//! let league = LeagueSnapshot::new(vec![
//!     Team::new("X", 5).with_games("A", 1),
//!     Team::new("A", 4).with_games("X", 1).with_games("B", 2),
//!     Team::new("B", 3).with_games("A", 2),
//! ]).unwrap();
//!
//! let net = network::build(&league, league.id("X").unwrap(), ScoringRule::TwoOneZero).unwrap();
//! assert_eq!(net.ceiling(), 7);
//! assert_eq!(net.required(), 4);
//! // source, sink, two rivals and one pair
//! assert_eq!(net.num_nodes(), 5);
//! assert_eq!(net.num_edges(), 5);
//! ```

use crate::error::{Error, Result};
use crate::scoring::ScoringRule;
use crate::standings::{LeagueSnapshot, TeamId};

/// A node of a flow network.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Node(u32);

impl Node {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An edge of a flow network.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Edge(u32);

impl Edge {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node stands for.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Source,
    Sink,
    /// The remaining games between two rivals.
    Pair(TeamId, TeamId),
    /// A rival of the target.
    Team(TeamId),
}

struct EdgeData {
    nodes: [Node; 2],
    upper: u64,
}

struct NodeData {
    kind: NodeKind,
    outs: Vec<Edge>,
    ins: Vec<Edge>,
}

/// A capacitated digraph with distinguished source and sink.
///
/// Nodes and edges live in arenas and are referred to by integer handles.
/// The network is never modified after [`build`] returns it.
pub struct FlowNetwork {
    nodes: Vec<NodeData>,
    edges: Vec<EdgeData>,
    ceiling: u64,
    required: u64,
}

impl FlowNetwork {
    fn new(ceiling: u64) -> Self {
        let mut net = FlowNetwork {
            nodes: vec![],
            edges: vec![],
            ceiling,
            required: 0,
        };
        net.add_node(NodeKind::Source);
        net.add_node(NodeKind::Sink);
        net
    }

    fn add_node(&mut self, kind: NodeKind) -> Node {
        self.nodes.push(NodeData {
            kind,
            outs: vec![],
            ins: vec![],
        });
        Node(self.nodes.len() as u32 - 1)
    }

    fn add_edge(&mut self, u: Node, v: Node, upper: u64) -> Edge {
        let e = Edge(self.edges.len() as u32);
        self.edges.push(EdgeData { nodes: [u, v], upper });
        self.nodes[u.index()].outs.push(e);
        self.nodes[v.index()].ins.push(e);
        e
    }

    pub fn source(&self) -> Node {
        Node(0)
    }

    pub fn sink(&self) -> Node {
        Node(1)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.nodes.len() as u32).map(Node)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> {
        (0..self.edges.len() as u32).map(Edge)
    }

    pub fn id2edge(&self, id: usize) -> Edge {
        debug_assert!(id < self.edges.len());
        Edge(id as u32)
    }

    pub fn kind(&self, u: Node) -> NodeKind {
        self.nodes[u.index()].kind
    }

    /// The tail of an edge.
    pub fn src(&self, e: Edge) -> Node {
        self.edges[e.index()].nodes[0]
    }

    /// The head of an edge.
    pub fn snk(&self, e: Edge) -> Node {
        self.edges[e.index()].nodes[1]
    }

    /// The capacity of an edge.
    pub fn upper(&self, e: Edge) -> u64 {
        self.edges[e.index()].upper
    }

    /// Outgoing edges of `u` with their heads, in insertion order.
    pub fn outedges(&self, u: Node) -> impl Iterator<Item = (Edge, Node)> + '_ {
        self.nodes[u.index()].outs.iter().map(move |&e| (e, self.snk(e)))
    }

    /// Incoming edges of `u` with their tails, in insertion order.
    pub fn inedges(&self, u: Node) -> impl Iterator<Item = (Edge, Node)> + '_ {
        self.nodes[u.index()].ins.iter().map(move |&e| (e, self.src(e)))
    }

    /// The target's maximum possible points.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Total capacity leaving the source, i.e. the points the remaining
    /// rival-vs-rival games hand out.
    pub fn required(&self) -> u64 {
        self.required
    }
}

/// Build the elimination network for `target` under `rule`.
///
/// Fails with [`Error::InexactScoringRule`] for `3-1-0`.
pub fn build(snapshot: &LeagueSnapshot, target: TeamId, rule: ScoringRule) -> Result<FlowNetwork> {
    if !rule.is_exact() {
        return Err(Error::InexactScoringRule(rule));
    }
    if target.index() >= snapshot.len() {
        return Err(Error::UnknownTeam(target.to_string()));
    }

    let ceiling = snapshot.ceiling(target, rule);
    let mut net = FlowNetwork::new(ceiling);
    let s = net.source();
    let t = net.sink();

    let rivals: Vec<TeamId> = snapshot.rivals(target).collect();
    let teamnodes: Vec<Node> = rivals
        .iter()
        .map(|&i| {
            let u = net.add_node(NodeKind::Team(i));
            net.add_edge(u, t, ceiling.saturating_sub(snapshot.points(i, rule)));
            u
        })
        .collect();

    for (k, &i) in rivals.iter().enumerate() {
        for (l, &j) in rivals.iter().enumerate().skip(k + 1) {
            let g = snapshot.games(i, j);
            if g == 0 {
                continue;
            }
            let cap = rule.win() * g;
            let p = net.add_node(NodeKind::Pair(i, j));
            net.add_edge(s, p, cap);
            net.add_edge(p, teamnodes[k], cap);
            net.add_edge(p, teamnodes[l], cap);
            net.required += cap;
        }
    }

    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::Team;

    fn league() -> LeagueSnapshot {
        LeagueSnapshot::new(vec![
            Team::new("X", 6).with_games("A", 2),
            Team::new("A", 7).with_games("X", 2).with_games("B", 1).with_games("C", 3),
            Team::new("B", 12).with_games("A", 1),
            Team::new("C", 2).with_games("A", 3),
        ])
        .unwrap()
    }

    #[test]
    fn capacities() {
        let s = league();
        let x = s.id("X").unwrap();
        let net = build(&s, x, ScoringRule::WinLoss).unwrap();
        assert_eq!(net.ceiling(), 8);
        assert_eq!(net.required(), 4);

        // rival -> sink edges, B is already above the ceiling
        let sinkcaps: Vec<(NodeKind, u64)> = net
            .inedges(net.sink())
            .map(|(e, u)| (net.kind(u), net.upper(e)))
            .collect();
        let id = |n| s.id(n).unwrap();
        assert_eq!(
            sinkcaps,
            vec![
                (NodeKind::Team(id("A")), 1),
                (NodeKind::Team(id("B")), 0),
                (NodeKind::Team(id("C")), 6),
            ]
        );

        let pairs: Vec<(NodeKind, u64)> = net
            .outedges(net.source())
            .map(|(e, u)| (net.kind(u), net.upper(e)))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (NodeKind::Pair(id("A"), id("B")), 1),
                (NodeKind::Pair(id("A"), id("C")), 3),
            ]
        );
    }

    #[test]
    fn two_point_capacities_are_doubled() {
        let s = league();
        let net = build(&s, s.id("X").unwrap(), ScoringRule::TwoOneZero).unwrap();
        assert_eq!(net.ceiling(), 10);
        assert_eq!(net.required(), 8);
        assert!(net
            .outedges(net.source())
            .all(|(e, u)| net.outedges(u).all(|(f, _)| net.upper(f) == net.upper(e))));
    }

    #[test]
    fn three_point_rule_is_rejected() {
        let s = league();
        match build(&s, s.id("X").unwrap(), ScoringRule::ThreeOneZero) {
            Err(Error::InexactScoringRule(ScoringRule::ThreeOneZero)) => {}
            _ => panic!("3-1-0 must not be built"),
        }
    }
}

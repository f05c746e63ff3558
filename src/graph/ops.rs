use std::collections::{BTreeSet, HashSet};

use clap::ValueEnum;
use tracing::trace;

use crate::core::package::Package;
use crate::graph::DependencyGraph;

/// Computes the set of packages reachable from a start package by following
/// one or more edges.
///
/// The start package belongs to its own closure only when some path of
/// length >= 1 leads back to it.
pub trait ClosureStrategy {
    fn closure(&self, graph: &DependencyGraph, start: &Package) -> BTreeSet<Package>;
}

/// Depth-first search by recursion over the ascending adjacency sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDfs;

/// Depth-first search with an explicit stack. Same visited discipline as
/// [`RecursiveDfs`] without the call-depth limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDfs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    Recursive,
    #[default]
    Iterative,
}

impl StrategyKind {
    pub fn strategy(self) -> &'static dyn ClosureStrategy {
        match self {
            StrategyKind::Recursive => &RecursiveDfs,
            StrategyKind::Iterative => &IterativeDfs,
        }
    }
}

impl ClosureStrategy for RecursiveDfs {
    fn closure(&self, graph: &DependencyGraph, start: &Package) -> BTreeSet<Package> {
        let mut visited: HashSet<&Package> = HashSet::from([start]);
        let mut found = BTreeSet::new();
        visit(graph, start, start, &mut visited, &mut found);
        found
    }
}

fn visit<'a>(
    graph: &'a DependencyGraph,
    start: &Package,
    node: &'a Package,
    visited: &mut HashSet<&'a Package>,
    found: &mut BTreeSet<Package>,
) {
    for dep in graph.neighbors(node) {
        if dep == start {
            found.insert(dep.clone());
            continue;
        }
        if !visited.insert(dep) {
            continue;
        }
        trace!(from = %node, to = %dep, "expanding dependency");
        found.insert(dep.clone());
        visit(graph, start, dep, visited, found);
    }
}

impl ClosureStrategy for IterativeDfs {
    fn closure(&self, graph: &DependencyGraph, start: &Package) -> BTreeSet<Package> {
        let mut visited: HashSet<&Package> = HashSet::from([start]);
        let mut found = BTreeSet::new();
        let mut stack: Vec<&Package> = vec![start];

        while let Some(node) = stack.pop() {
            // reversed so the smallest neighbor is expanded first
            for dep in graph.neighbors(node).rev() {
                if dep == start {
                    found.insert(dep.clone());
                    continue;
                }
                if !visited.insert(dep) {
                    continue;
                }
                trace!(from = %node, to = %dep, "expanding dependency");
                found.insert(dep.clone());
                stack.push(dep);
            }
        }
        found
    }
}

/// Direct and indirect dependencies of `package`, ascending by name.
/// Unknown packages yield an empty result.
pub fn transitive_dependencies(
    graph: &DependencyGraph,
    package: &Package,
    strategy: &dyn ClosureStrategy,
) -> Vec<Package> {
    strategy.closure(graph, package).into_iter().collect()
}

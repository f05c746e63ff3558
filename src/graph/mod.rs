use std::collections::{BTreeSet, HashMap};

use crate::core::package::Package;

pub mod builder;
pub mod ops;
pub mod parse;
pub mod render;

/// Adjacency mapping from a package to the packages it directly depends on.
///
/// Packages that only ever appear as dependencies have no entry. Adjacency
/// sets iterate in ascending name order.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    edges: HashMap<Package, BTreeSet<Package>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `source` directly depends on `dependency`. Adding an
    /// existing edge is a no-op. No validation happens here.
    pub fn add_edge(&mut self, source: Package, dependency: Package) {
        self.edges.entry(source).or_default().insert(dependency);
    }

    pub fn direct_dependencies(&self, package: &Package) -> Vec<Package> {
        self.neighbors(package).cloned().collect()
    }

    pub fn transitive_dependencies(&self, package: &Package) -> Vec<Package> {
        ops::transitive_dependencies(self, package, &ops::IterativeDfs)
    }

    pub(crate) fn neighbors<'a>(
        &'a self,
        package: &Package,
    ) -> impl DoubleEndedIterator<Item = &'a Package> + 'a {
        self.edges.get(package).into_iter().flatten()
    }

    /// Distinct packages seen either as a source or as a dependency.
    pub fn package_count(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|(source, deps)| std::iter::once(source).chain(deps))
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Extend<parse::Edge> for DependencyGraph {
    fn extend<T: IntoIterator<Item = parse::Edge>>(&mut self, iter: T) {
        for edge in iter {
            self.add_edge(edge.source, edge.dependency);
        }
    }
}

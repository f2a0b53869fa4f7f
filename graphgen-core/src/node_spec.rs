//! Node specifications accepted by the generators.
//!
//! Most generators accept either a node count or an explicit ordered list of
//! node identifiers. [`NodeSpec`] captures both forms and
//! [`NodeSpec::resolve`] normalizes them into a [`ResolvedNodes`] value that
//! carries the identifiers alongside a rendering of the caller's original
//! argument (used in graph names).

use std::{collections::HashSet, fmt, hash::Hash, ops::Range};

use crate::error::{GeneratorError, Result};

/// Identifier type usable as a graph node.
///
/// Integer types provide canonical identifiers so that [`NodeSpec::Count`]
/// can be resolved into `0..n`. Label-like types (characters, strings,
/// tuples, coordinate vectors) keep the default [`NodeId::from_index`] and can
/// only be supplied through [`NodeSpec::Explicit`].
///
/// # Examples
/// ```
/// use graphgen_core::NodeId;
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// struct City(&'static str);
///
/// impl NodeId for City {}
///
/// assert_eq!(City::from_index(0), None);
/// assert_eq!(u8::from_index(7), Some(7));
/// assert_eq!(u8::from_index(300), None);
/// ```
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {
    /// Returns the canonical identifier at position `index`, if the type has
    /// one.
    fn from_index(index: usize) -> Option<Self> {
        let _ = index;
        None
    }
}

macro_rules! impl_indexed_node_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NodeId for $ty {
                fn from_index(index: usize) -> Option<Self> {
                    <$ty>::try_from(index).ok()
                }
            }
        )+
    };
}

impl_indexed_node_id!(usize, u8, u16, u32, u64, u128, isize, i8, i16, i32, i64, i128);

impl NodeId for char {}
impl NodeId for String {}
impl NodeId for &str {}
impl<A: NodeId, B: NodeId> NodeId for (A, B) {}
impl<T: NodeId> NodeId for Vec<T> {}

/// Converts `index` into a node identifier or reports that the type has none.
pub(crate) fn index_node<N: NodeId>(index: usize) -> Result<N> {
    N::from_index(index).ok_or(GeneratorError::NoIndexIdentifiers { index })
}

/// Either a node count or an explicit ordered collection of identifiers.
///
/// # Examples
/// ```
/// use graphgen_core::NodeSpec;
///
/// let counted: NodeSpec<usize> = 3.into();
/// assert_eq!(counted.to_string(), "3");
///
/// let explicit = NodeSpec::from(vec!['a', 'b']);
/// assert_eq!(explicit.to_string(), "['a', 'b']");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSpec<N> {
    /// `n` nodes labelled `0..n`.
    Count(usize),
    /// The given identifiers, in order.
    Explicit(Vec<N>),
}

impl<N> NodeSpec<N> {
    /// Returns `true` for [`NodeSpec::Count`].
    #[must_use]
    pub const fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    /// Number of nodes the specification describes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Count(n) => *n,
            Self::Explicit(nodes) => nodes.len(),
        }
    }

    /// Returns `true` when the specification describes no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N: NodeId> NodeSpec<N> {
    /// Materializes the specification into ordered identifiers.
    ///
    /// Order is preserved and duplicates are not removed; the empty-graph
    /// factory rejects them before touching a graph.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NoIndexIdentifiers`] when a count is given
    /// for a node type without canonical identifiers.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::NodeSpec;
    ///
    /// let resolved = NodeSpec::<u32>::Count(3).resolve().expect("u32 is indexable");
    /// assert_eq!(resolved.nodes(), &[0, 1, 2]);
    /// assert_eq!(resolved.label(), "3");
    /// ```
    pub fn resolve(self) -> Result<ResolvedNodes<N>> {
        let label = self.to_string();
        let nodes = match self {
            Self::Count(n) => (0..n).map(index_node::<N>).collect::<Result<Vec<_>>>()?,
            Self::Explicit(nodes) => nodes,
        };
        Ok(ResolvedNodes { label, nodes })
    }
}

impl<N: fmt::Debug> fmt::Display for NodeSpec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Explicit(nodes) => fmt::Display::fmt(&ListLabel(nodes), f),
        }
    }
}

/// Renders a slice as `[a, b, c]` using each item's `Debug` form.
pub(crate) struct ListLabel<'a, T>(pub(crate) &'a [T]);

impl<T: fmt::Debug> fmt::Display for ListLabel<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item:?}")?;
        }
        f.write_str("]")
    }
}

impl From<usize> for NodeSpec<usize> {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

impl From<Range<usize>> for NodeSpec<usize> {
    fn from(range: Range<usize>) -> Self {
        Self::Explicit(range.collect())
    }
}

impl From<&str> for NodeSpec<char> {
    fn from(labels: &str) -> Self {
        Self::Explicit(labels.chars().collect())
    }
}

impl<N> From<Vec<N>> for NodeSpec<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self::Explicit(nodes)
    }
}

impl<N, const K: usize> From<[N; K]> for NodeSpec<N> {
    fn from(nodes: [N; K]) -> Self {
        Self::Explicit(nodes.into())
    }
}

impl<N: Clone> From<&[N]> for NodeSpec<N> {
    fn from(nodes: &[N]) -> Self {
        Self::Explicit(nodes.to_vec())
    }
}

/// A resolved [`NodeSpec`]: the caller-facing label and the ordered nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNodes<N> {
    label: String,
    nodes: Vec<N>,
}

impl<N> ResolvedNodes<N> {
    /// Rendering of the original argument, e.g. `4` or `['a', 'b']`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Identifiers in specification order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Consumes the value and returns the identifiers.
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Number of resolved identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no identifiers were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Rejects identifier sequences that repeat a node.
pub(crate) fn ensure_unique<'a, N, I>(nodes: I) -> Result<()>
where
    N: NodeId + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node) {
            return Err(GeneratorError::DuplicateNode {
                node: format!("{node:?}"),
            });
        }
    }
    Ok(())
}

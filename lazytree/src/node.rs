//! The lazy tree node value type.

use std::fmt;
use std::rc::Rc;

use crate::contract::LazyNode;

/// Child generator, collected into generation order.
type ChildMap<R> = Rc<dyn Fn(&R) -> Vec<R>>;
/// Presentation transform applied when a node is visited.
type ViewFn<R, V> = Rc<dyn Fn(&R) -> V>;
/// Leaf predicate, already composed with the view it was attached under.
type LeafFn<R> = Rc<dyn Fn(&R) -> bool>;

/// An immutable node of a lazily generated tree.
///
/// A node is fully determined by its root value, its child generator, its
/// view, and its leaf predicate. Children are derived on each call to
/// [`LazyNode::children`]; nothing is generated at construction time and
/// nothing is cached.
///
/// Transforms ([`map`](Self::map), [`prune`](Self::prune),
/// [`with_identity_view`](Self::with_identity_view)) return a new node that
/// overrides exactly one component and shares the rest by reference count.
/// The original node is never touched.
///
/// # Leaf predicates and view changes
///
/// A leaf predicate is evaluated on the view that was in force when it was
/// attached. Because `map` and `with_identity_view` may change the view type,
/// the predicate travels with its original view: the cut stays exactly where
/// it was, and pruning can only ever add leaves.
pub struct LazyTree<R, V = R> {
    root: R,
    child_map: ChildMap<R>,
    view: ViewFn<R, V>,
    is_leaf: LeafFn<R>,
}

impl<R: Clone + 'static> LazyTree<R> {
    /// Create a node with the identity view and no leaves.
    ///
    /// `child_map` is not called here; it first runs when the node (or one
    /// of its descendants) is expanded.
    #[must_use]
    pub fn new<C, I>(root: R, child_map: C) -> Self
    where
        C: Fn(&R) -> I + 'static,
        I: IntoIterator<Item = R>,
    {
        Self {
            root,
            child_map: collect_children(child_map),
            view: Rc::new(R::clone),
            is_leaf: Rc::new(|_: &R| false),
        }
    }
}

impl<R: 'static, V: 'static> LazyTree<R, V> {
    /// Create a node from all four components.
    ///
    /// None of `child_map`, `view` or `is_leaf` is called here. A malformed
    /// component only surfaces when a traversal visits or expands the node.
    #[must_use]
    pub fn from_parts<C, I, F, P>(root: R, child_map: C, view: F, is_leaf: P) -> Self
    where
        C: Fn(&R) -> I + 'static,
        I: IntoIterator<Item = R>,
        F: Fn(&R) -> V + 'static,
        P: Fn(&V) -> bool + 'static,
    {
        let view: ViewFn<R, V> = Rc::new(view);
        let leaf_view = Rc::clone(&view);
        Self {
            root,
            child_map: collect_children(child_map),
            view,
            is_leaf: Rc::new(move |root: &R| is_leaf(&leaf_view(root))),
        }
    }

    /// The raw domain value at this position.
    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    /// A node whose view is `f` applied after the current view.
    ///
    /// `map(f).map(g)` views as `g(f(view))`.
    ///
    /// Existing cuts are not re-aimed at the new view: a predicate attached
    /// by `prune` or `from_parts` keeps testing the view it was attached to,
    /// even when `f` returns the same type.
    #[must_use]
    pub fn map<W, G>(&self, f: G) -> LazyTree<R, W>
    where
        R: Clone,
        W: 'static,
        G: Fn(V) -> W + 'static,
    {
        let inner = Rc::clone(&self.view);
        LazyTree {
            root: self.root.clone(),
            child_map: Rc::clone(&self.child_map),
            view: Rc::new(move |root: &R| f(inner(root))),
            is_leaf: Rc::clone(&self.is_leaf),
        }
    }

    /// A node that is additionally a leaf wherever `extra` holds on the view.
    ///
    /// The result is a leaf if the existing predicate or `extra` holds.
    #[must_use]
    pub fn prune<P>(&self, extra: P) -> Self
    where
        R: Clone,
        P: Fn(&V) -> bool + 'static,
    {
        let existing = Rc::clone(&self.is_leaf);
        let view = Rc::clone(&self.view);
        Self {
            root: self.root.clone(),
            child_map: Rc::clone(&self.child_map),
            view: Rc::clone(&self.view),
            is_leaf: Rc::new(move |root: &R| existing(root) || extra(&view(root))),
        }
    }

    /// A node viewing its raw root value, discarding any `map` chain.
    ///
    /// Leaf predicates are kept.
    #[must_use]
    pub fn with_identity_view(&self) -> LazyTree<R, R>
    where
        R: Clone,
    {
        LazyTree {
            root: self.root.clone(),
            child_map: Rc::clone(&self.child_map),
            view: Rc::new(R::clone),
            is_leaf: Rc::clone(&self.is_leaf),
        }
    }

    /// A sibling node at `root` sharing every function with `self`.
    fn derive(&self, root: R) -> Self {
        Self {
            root,
            child_map: Rc::clone(&self.child_map),
            view: Rc::clone(&self.view),
            is_leaf: Rc::clone(&self.is_leaf),
        }
    }
}

impl<R: Clone + 'static, V: 'static> LazyNode for LazyTree<R, V> {
    type View = V;

    /// # Panics
    ///
    /// Propagates any panic raised by the leaf predicate, the view it is
    /// evaluated on, or the child generator.
    fn children(&self) -> Vec<Self> {
        if self.is_leaf() {
            return Vec::new();
        }
        (self.child_map)(&self.root)
            .into_iter()
            .map(|root| self.derive(root))
            .collect()
    }

    fn view(&self) -> V {
        (self.view)(&self.root)
    }

    fn is_leaf(&self) -> bool {
        (self.is_leaf)(&self.root)
    }
}

impl<R: Clone, V> Clone for LazyTree<R, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            child_map: Rc::clone(&self.child_map),
            view: Rc::clone(&self.view),
            is_leaf: Rc::clone(&self.is_leaf),
        }
    }
}

impl<R: fmt::Debug, V> fmt::Debug for LazyTree<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyTree")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

fn collect_children<R, C, I>(child_map: C) -> ChildMap<R>
where
    R: 'static,
    C: Fn(&R) -> I + 'static,
    I: IntoIterator<Item = R>,
{
    Rc::new(move |root: &R| child_map(root).into_iter().collect())
}

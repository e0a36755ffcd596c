use std::any::Any;
use std::fmt;
use std::hash::{
    Hash,
    Hasher
};
use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError
};

use serde::{
    Deserialize,
    Serialize
};
use tracing::trace;

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::math::tabulated::tabulatedfunction::{
    check_between,
    check_deletable,
    check_insertable,
    check_points,
    fmt_points,
    positional_eq,
    uniform_grid,
    TabulatedFunction,
    TabulatedStorage
};

// ─────────────────────────────────────────────────────────────────────────────
// Arena nodes
// ─────────────────────────────────────────────────────────────────────────────
//
// Nodes live in a `Vec` and refer to each other by slot index. Slot 0 is the
// sentinel: it carries no sample, `nodes[HEAD].next` is the first point and
// `nodes[HEAD].prev` the last one. Freed slots are recycled through `free`.

const HEAD: usize = 0;

#[derive(Debug, Clone, Copy)]
struct FunctionNode {
    point: FunctionPoint,
    prev: usize,
    next: usize
}

/// Last node reached by index, so that neighbouring lookups cost one hop.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cursor {
    node: usize,
    index: Option<usize>
}

impl Cursor {
    const UNSET: Cursor = Cursor { node: HEAD, index: None };
}

/// Tabulated function stored in a circular doubly linked list with a sentinel.
///
/// Index lookups go through a one-slot cursor cache: asking for the cached
/// index or one of its neighbours follows a single link, anything else walks
/// from the nearer end of the list.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Vec<FunctionPoint>", into = "Vec<FunctionPoint>")]
pub struct LinkedTabulatedFunction {
    nodes: Vec<FunctionNode>,
    free: Vec<usize>,
    points_count: usize,
    cursor: Mutex<Cursor>
}

impl LinkedTabulatedFunction {
    /// `points_count` samples evenly spaced over `[left_x, right_x]`, all with `y = 0`.
    pub fn new(left_x: f64, right_x: f64, points_count: usize) -> Result<LinkedTabulatedFunction, FunctionError> {
        Self::from_values(left_x, right_x, &vec![0.0; points_count])
    }

    /// One sample per value, evenly spaced over `[left_x, right_x]`.
    pub fn from_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<LinkedTabulatedFunction, FunctionError> {
        let points = uniform_grid(left_x, right_x, values)?;
        Ok(Self::from_checked_points(points))
    }

    /// Copies `points`, which must be at least two and strictly increasing in `x`.
    pub fn from_points(points: &[FunctionPoint]) -> Result<LinkedTabulatedFunction, FunctionError> {
        check_points(points)?;
        Ok(Self::from_checked_points(points.iter().copied()))
    }

    pub fn iter(&self) -> LinkedPoints<'_> {
        LinkedPoints {
            function: self,
            node: self.nodes[HEAD].next,
            remaining: self.points_count
        }
    }

    fn empty() -> LinkedTabulatedFunction {
        let head = FunctionNode {
            point: FunctionPoint::default(),
            prev: HEAD,
            next: HEAD
        };
        LinkedTabulatedFunction {
            nodes: vec![head],
            free: Vec::new(),
            points_count: 0,
            cursor: Mutex::new(Cursor::UNSET)
        }
    }

    fn from_checked_points<I>(points: I) -> LinkedTabulatedFunction where
        I: IntoIterator<Item = FunctionPoint> {
        let mut function = Self::empty();
        for point in points {
            function.add_node_to_tail(point);
        }
        function
    }

    fn cursor(&self) -> MutexGuard<'_, Cursor> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        self.cursor.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    fn allocate(&mut self, point: FunctionPoint) -> usize {
        let node = FunctionNode { point, prev: HEAD, next: HEAD };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn link_before(&mut self, slot: usize, next: usize) {
        let prev = self.nodes[next].prev;
        self.nodes[slot].prev = prev;
        self.nodes[slot].next = next;
        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
    }

    fn add_node_to_tail(&mut self, point: FunctionPoint) -> usize {
        let slot = self.allocate(point);
        self.link_before(slot, HEAD);
        self.points_count += 1;
        let index = self.points_count - 1;
        *self.cursor_mut() = Cursor { node: slot, index: Some(index) };
        slot
    }

    fn add_node_by_index(&mut self, index: usize, point: FunctionPoint) -> Result<usize, FunctionError> {
        if index == self.points_count {
            return Ok(self.add_node_to_tail(point));
        }
        let next = self.node_index(index)?;
        let slot = self.allocate(point);
        self.link_before(slot, next);
        self.points_count += 1;
        *self.cursor_mut() = Cursor { node: slot, index: Some(index) };
        Ok(slot)
    }

    fn delete_node_by_index(&mut self, index: usize) -> Result<FunctionPoint, FunctionError> {
        FunctionError::check_index(index, self.points_count)?;
        check_deletable(self.points_count)?;
        let cached = *self.cursor_mut();
        let slot = self.find_node(index, cached);
        let FunctionNode { point, prev, next } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        self.points_count -= 1;

        let cursor = self.cursor_mut();
        match cursor.index {
            Some(cached) if cached == index => *cursor = Cursor::UNSET,
            Some(cached) if cached > index => cursor.index = Some(cached - 1),
            _ => {}
        }
        Ok(point)
    }

    /// Arena slot of the point at `index`, moving the cursor there.
    fn node_index(&self, index: usize) -> Result<usize, FunctionError> {
        FunctionError::check_index(index, self.points_count)?;
        let mut cursor = self.cursor();
        let slot = self.find_node(index, *cursor);
        *cursor = Cursor { node: slot, index: Some(index) };
        Ok(slot)
    }

    /// Arena slot of the point at an in-range `index`, leaving the cursor as is.
    fn find_node(&self, index: usize, cursor: Cursor) -> usize {
        match cursor.index {
            Some(cached) if cached == index => cursor.node,
            Some(cached) if cached + 1 == index => self.nodes[cursor.node].next,
            Some(cached) if cached == index + 1 => self.nodes[cursor.node].prev,
            _ => self.walk_from_nearer_end(index)
        }
    }

    fn walk_from_nearer_end(&self, index: usize) -> usize {
        if index < self.points_count / 2 {
            let mut slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
            slot
        } else {
            let mut slot = self.nodes[HEAD].prev;
            for _ in index..(self.points_count - 1) {
                slot = self.nodes[slot].prev;
            }
            slot
        }
    }

    /// Samples adjacent to the node in `slot`, if any.
    fn neighbours(&self, slot: usize) -> (Option<FunctionPoint>, Option<FunctionPoint>) {
        let node = &self.nodes[slot];
        let prev = (node.prev != HEAD).then(|| self.nodes[node.prev].point);
        let next = (node.next != HEAD).then(|| self.nodes[node.next].point);
        (prev, next)
    }
}

impl Function for LinkedTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.nodes[self.nodes[HEAD].next].point.x()
    }

    fn right_domain_border(&self) -> f64 {
        self.nodes[self.nodes[HEAD].prev].point.x()
    }

    fn value(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        let mut slot = self.nodes[HEAD].next;
        if self.nodes[slot].point.same_x(x) {
            return self.nodes[slot].point.y();
        }
        while self.nodes[slot].next != HEAD {
            let lhs_pt = &self.nodes[slot].point;
            let rhs_pt = &self.nodes[self.nodes[slot].next].point;
            if rhs_pt.same_x(x) {
                return rhs_pt.y();
            }
            if x > lhs_pt.x() && x < rhs_pt.x() {
                return FunctionPoint::interpolate(lhs_pt, rhs_pt, x);
            }
            slot = self.nodes[slot].next;
        }
        f64::NAN
    }
}

impl TabulatedFunction for LinkedTabulatedFunction {
    fn storage(&self) -> TabulatedStorage {
        TabulatedStorage::Linked
    }

    fn points_count(&self) -> usize {
        self.points_count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError> {
        let slot = self.node_index(index)?;
        Ok(self.nodes[slot].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError> {
        let slot = self.node_index(index)?;
        let (prev, next) = self.neighbours(slot);
        check_between(index, point.x(), prev, next)?;
        trace!(index, %point, "linked: set point");
        self.nodes[slot].point = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64, FunctionError> {
        self.point(index).map(|pt| pt.x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError> {
        let slot = self.node_index(index)?;
        let (prev, next) = self.neighbours(slot);
        check_between(index, x, prev, next)?;
        self.nodes[slot].point.set_x(x);
        Ok(())
    }

    fn point_y(&self, index: usize) -> Result<f64, FunctionError> {
        self.point(index).map(|pt| pt.y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError> {
        let slot = self.node_index(index)?;
        self.nodes[slot].point.set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError> {
        let point = self.delete_node_by_index(index)?;
        trace!(index, %point, "linked: delete point");
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), FunctionError> {
        check_insertable(point.x())?;
        if self.iter().any(|pt| pt.same_x(point.x())) {
            return Err(FunctionError::DuplicateX(point.x()));
        }
        let insert_index = self.iter()
            .position(|pt| !(pt.x() < point.x()))
            .unwrap_or(self.points_count);
        trace!(insert_index, %point, "linked: add point");
        self.add_node_by_index(insert_index, point)?;
        Ok(())
    }

    fn points(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(self.iter())
    }

    fn clone_box(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Rebuilds a compact list by walking the source once.
impl Clone for LinkedTabulatedFunction {
    fn clone(&self) -> Self {
        Self::from_checked_points(self.iter())
    }
}

/// Walks both lists node by node.
impl PartialEq for LinkedTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.points_count == other.points_count
            && self.iter().zip(other.iter()).all(|(lhs_pt, rhs_pt)| lhs_pt == rhs_pt)
    }
}

impl PartialEq<ArrayTabulatedFunction> for LinkedTabulatedFunction {
    fn eq(&self, other: &ArrayTabulatedFunction) -> bool {
        positional_eq(self, other)
    }
}

impl Hash for LinkedTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points_count.hash(state);
        for point in self.iter() {
            point.hash(state);
        }
    }
}

impl fmt::Debug for LinkedTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedTabulatedFunction")
            .field("points", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for LinkedTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(f, self.iter())
    }
}

impl TryFrom<Vec<FunctionPoint>> for LinkedTabulatedFunction {
    type Error = FunctionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        check_points(&points)?;
        Ok(Self::from_checked_points(points))
    }
}

impl From<LinkedTabulatedFunction> for Vec<FunctionPoint> {
    fn from(function: LinkedTabulatedFunction) -> Self {
        function.iter().collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Iteration
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only walk over copies of the samples. It does not touch the cursor.
pub struct LinkedPoints<'a> {
    function: &'a LinkedTabulatedFunction,
    node: usize,
    remaining: usize
}

impl<'a> Iterator for LinkedPoints<'a> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.function.nodes[self.node];
        self.node = node.next;
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinkedPoints<'_> {}

impl<'a> IntoIterator for &'a LinkedTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = LinkedPoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

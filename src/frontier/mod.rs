//! The frontier: open cells adjacent to the board, sorted by angle.
//!
//! Cells are kept in a circular doubly linked list ordered by ascending
//! polar angle `atan2(y, x)` around the origin, so a cursor cycling through
//! them sweeps around the board counterclockwise. The list is backed by a
//! slab of nodes; links are slot indices, and freed slots are recycled.
//!
//! ```
//! use rust_carc::core::Coord;
//! use rust_carc::frontier::{CycleDirection, FrontierList};
//!
//! let mut frontier = FrontierList::new();
//! frontier.insert(Coord::new(1, 0));
//! frontier.insert(Coord::new(0, 1));
//! frontier.insert(Coord::new(-1, 0));
//!
//! // -pi/2, 0, pi/2
//! let order: Vec<_> = frontier.iter().collect();
//! assert_eq!(order, vec![Coord::new(-1, 0), Coord::new(0, 1), Coord::new(1, 0)]);
//!
//! assert_eq!(frontier.cycle(CycleDirection::Forward), Some(Coord::new(-1, 0)));
//! assert_eq!(frontier.cycle(CycleDirection::Backward), Some(Coord::new(1, 0)));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Which way the selection cursor moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleDirection {
    /// Toward larger angles.
    Forward,
    /// Toward smaller angles.
    Backward,
}

#[derive(Clone, Debug)]
struct Node {
    at: Coord,
    angle: f64,
    prev: usize,
    next: usize,
}

/// Circular, angle-sorted list of distinct open coordinates.
///
/// Keeps a selection cursor for UIs that cycle through candidates. The
/// cursor survives insertions; if its node is removed it moves to the
/// removed node's successor.
///
/// Slots listed in `free` hold stale nodes until reused. `head`,
/// `selected`, and every live `prev`/`next` only ever name live slots.
#[derive(Clone, Debug, Default)]
pub struct FrontierList {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    selected: Option<usize>,
    members: FxHashSet<Coord>,
}

impl FrontierList {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `at` in angular order.
    ///
    /// The new node goes immediately before the first node with a strictly
    /// greater angle, or at the tail if none is greater; equal angles keep
    /// insertion order. Returns `false` if `at` was already present.
    pub fn insert(&mut self, at: Coord) -> bool {
        if !self.members.insert(at) {
            return false;
        }

        let angle = at.angle();
        let slot = self.alloc(Node {
            at,
            angle,
            prev: 0,
            next: 0,
        });

        let Some(head) = self.head else {
            let node = self.node_mut(slot);
            node.prev = slot;
            node.next = slot;
            self.head = Some(slot);
            return true;
        };

        // Walk one lap looking for the first strictly greater angle. If
        // none is found the node closes the circle, right before the head.
        let mut before = head;
        let mut cursor = head;
        loop {
            if self.node(cursor).angle > angle {
                before = cursor;
                break;
            }
            cursor = self.node(cursor).next;
            if cursor == head {
                break;
            }
        }

        let prev = self.node(before).prev;
        {
            let node = self.node_mut(slot);
            node.prev = prev;
            node.next = before;
        }
        self.node_mut(prev).next = slot;
        self.node_mut(before).prev = slot;

        if angle < self.node(head).angle {
            self.head = Some(slot);
        }
        true
    }

    /// Remove `at`. Returns `false` if it was not present.
    pub fn remove(&mut self, at: Coord) -> bool {
        if !self.members.remove(&at) {
            return false;
        }

        let Some(slot) = self.find_slot(at) else {
            return false;
        };
        let Node { prev, next, .. } = self.node(slot).clone();

        if next == slot {
            // Last node: back to the empty state.
            self.head = None;
            self.selected = None;
        } else {
            self.node_mut(prev).next = next;
            self.node_mut(next).prev = prev;
            if self.head == Some(slot) {
                self.head = Some(next);
            }
            if self.selected == Some(slot) {
                self.selected = Some(next);
            }
        }

        self.free.push(slot);
        true
    }

    /// Move the cursor one node and return the newly selected cell.
    ///
    /// The list is circular, so cycling never runs out; it returns `None`
    /// only when the frontier is empty. With no current selection, forward
    /// selects the head and backward selects the tail.
    pub fn cycle(&mut self, direction: CycleDirection) -> Option<Coord> {
        let head = self.head?;
        let next = match (self.selected, direction) {
            (None, CycleDirection::Forward) => head,
            (None, CycleDirection::Backward) => self.node(head).prev,
            (Some(slot), CycleDirection::Forward) => self.node(slot).next,
            (Some(slot), CycleDirection::Backward) => self.node(slot).prev,
        };
        self.selected = Some(next);
        Some(self.node(next).at)
    }

    /// Put the cursor on `at`. Returns `false` if `at` is not present.
    pub fn select(&mut self, at: Coord) -> bool {
        match self.find_slot(at) {
            Some(slot) => {
                self.selected = Some(slot);
                true
            }
            None => false,
        }
    }

    /// The cell under the cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.selected.map(|slot| self.node(slot).at)
    }

    /// The cell with the smallest angle.
    #[must_use]
    pub fn head(&self) -> Option<Coord> {
        self.head.map(|slot| self.node(slot).at)
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        self.members.contains(&at)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// One lap around the circle, starting at the head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn find_slot(&self, at: Coord) -> Option<usize> {
        let head = self.head?;
        let mut cursor = head;
        loop {
            if self.node(cursor).at == at {
                return Some(cursor);
            }
            cursor = self.node(cursor).next;
            if cursor == head {
                return None;
            }
        }
    }

    fn node(&self, slot: usize) -> &Node {
        debug_assert!(!self.free.contains(&slot), "frontier link to freed slot {slot}");
        &self.nodes[slot]
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node {
        debug_assert!(!self.free.contains(&slot), "frontier link to freed slot {slot}");
        &mut self.nodes[slot]
    }
}

/// Iterator over frontier cells in angular order.
pub struct Iter<'a> {
    list: &'a FrontierList,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.cursor?;
        let node = self.list.node(slot);
        self.cursor = Some(node.next);
        self.remaining -= 1;
        Some(node.at)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FrontierList {
    type Item = Coord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

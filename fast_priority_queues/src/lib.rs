//! Min priority queues that trade priority updates for raw speed.
//!
//! Each entry has associated *key* and *priority*.
//! Keys are opaque to the queues and may repeat; priorities must implement Ord trait.
//!
//! Dequeueing returns an entry with the smallest priority.
//! Enqueueing adds an entry to queue.
//! It is impossible to change priority of an entry already stored in a queue:
//! push the key again with the new priority and ignore the outdated entry when it pops out.
//! In algorithms like Dijkstra this is often faster than keeping a key lookup table up to date.
//!
//! All containers implement [`PriorityQueue`] and differ only in costs:
//!
//! | Queue                   | enqueue                        | dequeue_minimum | peek_minimum |
//! |-------------------------|--------------------------------|-----------------|--------------|
//! | [`UnsortedVectorQueue`] | amortized ***O(1)***           | ***O(n)***      | ***O(n)***   |
//! | [`SortedVectorQueue`]   | ***O(log n)*** search + moves  | ***O(1)***      | ***O(1)***   |
//! | [`HeapQueue`]           | ***O(log n)***                 | ***O(log n)***  | ***O(1)***   |
//!
//! Insertion into [`SortedVectorQueue`] also moves ***O(n)*** entries in the worst case.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] for directed graph
//! with weighted edges.
//!
//! When a shorter path to a node is found, the node is simply pushed again.
//! Older entries of the same node are recognized on pop by comparing
//! their distance with the best known one.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`PriorityQueue`]: trait.PriorityQueue.html
//! [`UnsortedVectorQueue`]: struct.UnsortedVectorQueue.html
//! [`SortedVectorQueue`]: struct.SortedVectorQueue.html
//! [`HeapQueue`]: struct.HeapQueue.html
//!
//! ```
//! use fast_priority_queues::{HeapQueue, PriorityQueue, SortedVectorQueue, UnsortedVectorQueue};
//!
//! // Outgoing edges of every node as (target, weight)
//! struct Graph {
//!     edges: Vec<Vec<(usize, u32)>>,
//! }
//!
//! // Returns distances from start and number of skipped outdated entries
//! fn shortest_distances<Q>(mut queue: Q, start: usize, graph: &Graph) -> (Vec<u32>, usize)
//! where
//!     Q: PriorityQueue<Key = usize, Priority = u32>,
//! {
//!     let mut distances = vec![u32::MAX; graph.edges.len()];
//!     let mut skipped = 0;
//!     distances[start] = 0;
//!     queue.enqueue(start, 0);
//!     while let Ok((node, distance)) = queue.dequeue_minimum() {
//!         // Stale entry, this node was already reached cheaper
//!         if distance > distances[node] {
//!             skipped += 1;
//!             continue;
//!         }
//!         for &(next, weight) in graph.edges[node].iter() {
//!             let candidate = distance + weight;
//!             if candidate < distances[next] {
//!                 distances[next] = candidate;
//!                 queue.enqueue(next, candidate);
//!             }
//!         }
//!     }
//!     (distances, skipped)
//! }
//!
//! let graph = Graph {
//!     edges: vec![
//!         vec![(1, 7), (2, 2), (4, 20)],
//!         vec![(3, 1), (4, 3)],
//!         vec![(1, 3), (3, 8)],
//!         vec![(4, 1)],
//!         vec![],
//!     ],
//! };
//!
//! // Nodes 1, 3 and 4 are first reached by longer paths and pushed again later.
//! let (by_heap, skipped) = shortest_distances(HeapQueue::new(), 0, &graph);
//! assert_eq!(by_heap, [0, 5, 2, 6, 7]);
//! assert_eq!(skipped, 4);
//! let by_sorted = shortest_distances(SortedVectorQueue::new(), 0, &graph);
//! let by_unsorted = shortest_distances(UnsortedVectorQueue::new(), 0, &graph);
//! assert_eq!(by_sorted, (by_heap.clone(), skipped));
//! assert_eq!(by_unsorted, (by_heap, skipped));
//! ```
//!

mod heap;
mod priority_queue;
mod sorted_vector;
mod unsorted_vector;

pub use crate::heap::HeapQueue;
pub use crate::priority_queue::{DrainMinimum, EmptyQueueError, IntoSortedIter, PriorityQueue};
pub use crate::sorted_vector::SortedVectorQueue;
pub use crate::unsorted_vector::UnsortedVectorQueue;

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

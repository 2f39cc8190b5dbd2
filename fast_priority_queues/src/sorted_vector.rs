use std::collections::VecDeque;
use std::fmt::Debug;
use std::iter::FromIterator;
use std::vec::Vec;

use crate::priority_queue::{EmptyQueueError, Entry, IntoSortedIter, PriorityQueue};

/// Min priority queue that keeps entries sorted by priority in contiguous memory.
///
/// Entries are stored in non-decreasing priority order, the minimum at the front,
/// so [`dequeue_minimum`] and [`peek_minimum`] are ***O(1)*** and never search.
/// [`enqueue`] finds its slot with ***O(log n)*** comparisons,
/// but the insertion itself moves ***O(n)*** entries in the worst case.
/// Those moves are plain memory copies which are fast for small and medium queues,
/// so do not expect the whole push to stay logarithmic on huge queues.
///
/// Entries with equal priorities leave the queue in insertion order.
///
/// [`enqueue`]: trait.PriorityQueue.html#tymethod.enqueue
/// [`dequeue_minimum`]: trait.PriorityQueue.html#tymethod.dequeue_minimum
/// [`peek_minimum`]: trait.PriorityQueue.html#tymethod.peek_minimum
///
/// # Examples
///
/// ```
/// use fast_priority_queues::{PriorityQueue, SortedVectorQueue};
///
/// let mut queue = SortedVectorQueue::new();
/// queue.enqueue("late", 10);
/// queue.enqueue("early", 1);
/// queue.enqueue("tie", 10);
///
/// // Storage is always sorted
/// let priorities: Vec<_> = queue.iter().map(|(_, &p)| p).collect();
/// assert_eq!(priorities, [1, 10, 10]);
///
/// assert_eq!(queue.dequeue_minimum_key(), Ok("early"));
/// assert_eq!(queue.dequeue_minimum_key(), Ok("late"));
/// assert_eq!(queue.dequeue_minimum_key(), Ok("tie"));
/// assert!(queue.is_empty());
/// ```
pub struct SortedVectorQueue<K, V>
where
    V: Ord,
{
    data: VecDeque<Entry<K, V>>,
}

impl<K, V: Ord> SortedVectorQueue<K, V> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Iterates over entries in non-decreasing priority order without removing them.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.data.iter().map(Entry::as_pair)
    }

    // Stable sort keeps already stored entries in front of new equal ones,
    // same order as repeated `enqueue` would give.
    fn restore_order(&mut self) {
        self.data
            .make_contiguous()
            .sort_by(|a, b| a.priority.cmp(&b.priority));
    }
}

impl<K, V: Ord> PriorityQueue for SortedVectorQueue<K, V> {
    type Key = K;
    type Priority = V;

    /// ### Time complexity
    ///
    /// ***O(log n)*** comparisons to find the slot plus ***O(n)*** moves
    /// in the worst case to open it.
    fn enqueue(&mut self, key: K, priority: V) {
        let position = self.data.partition_point(|entry| entry.priority <= priority);
        self.data.insert(position, Entry::new(key, priority));
    }

    /// ### Time complexity
    ///
    /// Always ***O(1)***.
    #[inline]
    fn dequeue_minimum(&mut self) -> Result<(K, V), EmptyQueueError> {
        self.data
            .pop_front()
            .map(Entry::into_pair)
            .ok_or(EmptyQueueError)
    }

    /// ### Time complexity
    ///
    /// Always ***O(1)***.
    #[inline]
    fn peek_minimum(&self) -> Result<(&K, &V), EmptyQueueError> {
        self.data.front().map(Entry::as_pair).ok_or(EmptyQueueError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.data.clear()
    }
}

impl<K: Clone, V: Clone + Ord> Clone for SortedVectorQueue<K, V> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<K: Debug, V: Debug + Ord> Debug for SortedVectorQueue<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<K, V: Ord> Default for SortedVectorQueue<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Ord> FromIterator<(K, V)> for SortedVectorQueue<K, V> {
    /// Sorts collected entries once, ***O(n log n)***.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let data: Vec<Entry<K, V>> = iter.into_iter().map(Entry::from).collect();
        let mut res = Self {
            data: VecDeque::from(data),
        };
        res.restore_order();
        res
    }
}

impl<K, V: Ord> Extend<(K, V)> for SortedVectorQueue<K, V> {
    /// Appends everything and sorts once instead of inserting one by one.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let old_len = self.data.len();
        self.data.extend(iter.into_iter().map(Entry::from));
        if self.data.len() != old_len {
            self.restore_order();
        }
    }
}

impl<K, V: Ord> IntoIterator for SortedVectorQueue<K, V> {
    type Item = (K, V);
    type IntoIter = IntoSortedIter<Self>;

    /// Make iterator that returns items in non-decreasing priority order.
    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter::new(self)
    }
}

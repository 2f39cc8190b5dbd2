use std::fmt::Debug;
use std::iter::FromIterator;
use std::vec::Vec;

use crate::priority_queue::{EmptyQueueError, Entry, IntoSortedIter, PriorityQueue};

/// Min priority queue that keeps entries in insertion order and searches
/// the minimum on every extraction.
///
/// [`enqueue`] is amortized ***O(1)***, [`dequeue_minimum`] and [`peek_minimum`] are ***O(n)***.
/// Good fit for small queues or for workloads with far more pushes than pops.
///
/// When several entries share the minimal priority, the one which comes first
/// in storage is returned. Extraction moves the last entry into the freed slot.
///
/// [`enqueue`]: trait.PriorityQueue.html#tymethod.enqueue
/// [`dequeue_minimum`]: trait.PriorityQueue.html#tymethod.dequeue_minimum
/// [`peek_minimum`]: trait.PriorityQueue.html#tymethod.peek_minimum
///
/// # Examples
///
/// ```
/// use fast_priority_queues::{EmptyQueueError, PriorityQueue, UnsortedVectorQueue};
///
/// let mut queue = UnsortedVectorQueue::with_capacity(3);
/// queue.enqueue('a', 5);
/// queue.enqueue('b', 1);
/// queue.enqueue('c', 3);
///
/// assert_eq!(queue.dequeue_minimum(), Ok(('b', 1)));
/// assert_eq!(queue.dequeue_minimum(), Ok(('c', 3)));
/// assert_eq!(queue.dequeue_minimum(), Ok(('a', 5)));
/// assert_eq!(queue.dequeue_minimum(), Err(EmptyQueueError));
/// ```
pub struct UnsortedVectorQueue<K, V>
where
    V: Ord,
{
    data: Vec<Entry<K, V>>,
}

impl<K, V: Ord> UnsortedVectorQueue<K, V> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
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

    /// Iterates over entries in storage order.
    ///
    /// Storage order is insertion order until the first extraction,
    /// after that it is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(Entry::as_pair)
    }

    // First occurrence wins among equal priorities.
    fn minimum_position(&self) -> Option<usize> {
        let mut entries = self.data.iter().enumerate();
        let (mut best_pos, mut best) = entries.next()?;
        for (pos, entry) in entries {
            if entry.priority < best.priority {
                best_pos = pos;
                best = entry;
            }
        }
        Some(best_pos)
    }
}

impl<K, V: Ord> PriorityQueue for UnsortedVectorQueue<K, V> {
    type Key = K;
    type Priority = V;

    /// ### Time complexity
    ///
    /// Amortized ***O(1)***, ***O(n)*** for a single call when reallocation happens.
    #[inline]
    fn enqueue(&mut self, key: K, priority: V) {
        self.data.push(Entry::new(key, priority));
    }

    /// ### Time complexity
    ///
    /// Always ***O(n)*** comparisons and ***O(1)*** moves.
    fn dequeue_minimum(&mut self) -> Result<(K, V), EmptyQueueError> {
        let position = self.minimum_position().ok_or(EmptyQueueError)?;
        Ok(self.data.swap_remove(position).into_pair())
    }

    /// ### Time complexity
    ///
    /// Always ***O(n)***.
    fn peek_minimum(&self) -> Result<(&K, &V), EmptyQueueError> {
        let position = self.minimum_position().ok_or(EmptyQueueError)?;
        Ok(self.data[position].as_pair())
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

impl<K: Clone, V: Clone + Ord> Clone for UnsortedVectorQueue<K, V> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<K: Debug, V: Debug + Ord> Debug for UnsortedVectorQueue<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

impl<K, V: Ord> Default for UnsortedVectorQueue<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Ord> FromIterator<(K, V)> for UnsortedVectorQueue<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().map(Entry::from).collect(),
        }
    }
}

impl<K, V: Ord> Extend<(K, V)> for UnsortedVectorQueue<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.data.extend(iter.into_iter().map(Entry::from));
    }
}

impl<K, V: Ord> IntoIterator for UnsortedVectorQueue<K, V> {
    type Item = (K, V);
    type IntoIter = IntoSortedIter<Self>;

    /// Make iterator that returns items in non-decreasing priority order.
    /// Whole iteration costs ***O(n^2)***.
    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority() {
        let mut items = [1, 4, 5, 2, 3];
        let mut queue = UnsortedVectorQueue::<i32, i32>::with_capacity(items.len());
        for (i, &x) in items.iter().enumerate() {
            queue.enqueue(x, x);
            assert_eq!(queue.len(), i + 1);
        }
        items.sort_unstable();
        for &x in items.iter() {
            assert_eq!(queue.dequeue_minimum(), Ok((x, x)));
        }
        assert_eq!(queue.dequeue_minimum(), Err(EmptyQueueError));
    }

    #[test]
    fn test_enqueue_keeps_insertion_order() {
        let queue: UnsortedVectorQueue<&str, i32> =
            [("x", 3), ("y", 1), ("z", 2)].into_iter().collect();
        let keys: Vec<_> = queue.iter().map(|(&k, _)| k).collect();
        assert_eq!(keys, ["x", "y", "z"]);
    }

    #[test]
    fn test_swap_with_last_on_dequeue() {
        let mut queue = UnsortedVectorQueue::new();
        queue.extend([("a", 4), ("b", 0), ("c", 7), ("d", 2)]);
        assert_eq!(queue.dequeue_minimum(), Ok(("b", 0)));
        let keys: Vec<_> = queue.iter().map(|(&k, _)| k).collect();
        assert_eq!(keys, ["a", "d", "c"]);
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        let mut queue = UnsortedVectorQueue::new();
        queue.enqueue("first", 1);
        queue.enqueue("worse", 2);
        queue.enqueue("second", 1);
        queue.enqueue("third", 1);
        assert_eq!(queue.peek_minimum(), Ok((&"first", &1)));
        assert_eq!(queue.dequeue_minimum_key(), Ok("first"));
        // "third" took the freed slot in front of "second"
        assert_eq!(queue.dequeue_minimum_key(), Ok("third"));
        assert_eq!(queue.dequeue_minimum_key(), Ok("second"));
        assert_eq!(queue.dequeue_minimum_key(), Ok("worse"));
    }

    #[test]
    fn test_peek() {
        let items = [
            ("first", 5),
            ("second", 4),
            ("third", 3),
            ("fourth", 2),
            ("fifth", 1),
        ];

        let mut queue: UnsortedVectorQueue<&str, i32> = items.iter().cloned().collect();

        while !queue.is_empty() {
            let (&key, &priority) = queue.peek_minimum().unwrap();
            let len = queue.len();
            let (key1, priority1) = queue.dequeue_minimum().unwrap();
            assert_eq!(key, key1);
            assert_eq!(priority, priority1);
            assert_eq!(queue.len(), len - 1);
        }
        assert_eq!(queue.peek_minimum(), Err(EmptyQueueError));
    }

    #[test]
    fn test_duplicate_keys() {
        let mut queue = UnsortedVectorQueue::new();
        queue.enqueue("key", 5);
        queue.enqueue("key", 3);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue_minimum(), Ok(("key", 3)));
        assert_eq!(queue.dequeue_minimum(), Ok(("key", 5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue: UnsortedVectorQueue<i32, i32> = (0..10).map(|x| (x, x)).collect();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue_minimum_key(), Err(EmptyQueueError));
    }

    #[test]
    fn test_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<UnsortedVectorQueue<usize, usize>>();
    }

    #[test]
    fn test_send() {
        fn assert_send<T: Send>() {}
        assert_send::<UnsortedVectorQueue<usize, usize>>();
    }
}

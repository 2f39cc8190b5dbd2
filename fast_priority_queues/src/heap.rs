use std::fmt::Debug;
use std::iter::FromIterator;
use std::vec::Vec;

use crate::priority_queue::{EmptyQueueError, Entry, IntoSortedIter, PriorityQueue};

/// Min priority queue backed by a binary heap embedded in a vector.
///
/// Both [`enqueue`] and [`dequeue_minimum`] cost ***O(log n)***,
/// [`peek_minimum`] is ***O(1)***.
/// This is the safest choice when the ratio of pushes to pops is unknown
/// or the queue grows big.
///
/// [`enqueue`]: trait.PriorityQueue.html#tymethod.enqueue
/// [`dequeue_minimum`]: trait.PriorityQueue.html#tymethod.dequeue_minimum
/// [`peek_minimum`]: trait.PriorityQueue.html#tymethod.peek_minimum
///
/// # Examples
///
/// ```
/// use fast_priority_queues::{EmptyQueueError, HeapQueue, PriorityQueue};
///
/// let mut queue = HeapQueue::new();
/// queue.enqueue("Third", 3);
/// queue.enqueue("First", 1);
/// queue.enqueue("Second", 2);
/// // Same key again with better priority
/// queue.enqueue("Third", 0);
///
/// assert_eq!(queue.len(), 4);
/// assert_eq!(queue.peek_minimum(), Ok((&"Third", &0)));
/// assert_eq!(queue.dequeue_minimum(), Ok(("Third", 0)));
/// assert_eq!(queue.dequeue_minimum_key(), Ok("First"));
/// assert_eq!(queue.dequeue_minimum(), Ok(("Second", 2)));
/// // Stale entry is still here
/// assert_eq!(queue.dequeue_minimum(), Ok(("Third", 3)));
/// assert_eq!(queue.dequeue_minimum(), Err(EmptyQueueError));
/// ```
pub struct HeapQueue<K, V>
where
    V: Ord,
{
    data: Vec<Entry<K, V>>,
}

impl<K, V: Ord> HeapQueue<K, V> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ```
    /// use fast_priority_queues::HeapQueue;
    /// let queue = HeapQueue::<u32, u32>::with_capacity(10);
    /// assert!(queue.capacity() >= 10);
    /// ```
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

    /// Iterates over entries in internal heap order, which is arbitrary
    /// except that the first item is a minimal one.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(Entry::as_pair)
    }

    fn heapify_up(&mut self, position: usize) {
        debug_assert!(position < self.data.len(), "Out of index in heapify_up");
        let mut position = position;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.data[position].priority < self.data[parent_pos].priority {
                self.data.swap(parent_pos, position);
                position = parent_pos;
            } else {
                break;
            }
        }
    }

    fn heapify_down(&mut self, position: usize) {
        debug_assert!(position < self.data.len(), "Out of index in heapify_down");
        let mut position = position;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 < self.data.len()
                    && self.data[child2].priority < self.data[child1].priority
                {
                    child2
                } else {
                    child1
                }
            };

            if self.data[min_child_idx].priority < self.data[position].priority {
                self.data.swap(position, min_child_idx);
                position = min_child_idx;
            } else {
                break;
            }
        }
    }
}

impl<K, V: Ord> PriorityQueue for HeapQueue<K, V> {
    type Key = K;
    type Priority = V;

    /// ### Time complexity
    ///
    /// ***O(log n)*** swaps, ***O(n)*** for a single call when reallocation happens.
    #[inline]
    fn enqueue(&mut self, key: K, priority: V) {
        self.data.push(Entry::new(key, priority));
        self.heapify_up(self.data.len() - 1);
    }

    /// ### Time complexity
    ///
    /// Always ***O(log n)***.
    fn dequeue_minimum(&mut self) -> Result<(K, V), EmptyQueueError> {
        if self.data.is_empty() {
            return Err(EmptyQueueError);
        }
        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.heapify_down(0);
        }
        Ok(result.into_pair())
    }

    /// ### Time complexity
    ///
    /// Always ***O(1)***.
    #[inline]
    fn peek_minimum(&self) -> Result<(&K, &V), EmptyQueueError> {
        self.data.first().map(Entry::as_pair).ok_or(EmptyQueueError)
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

// Default implementations

impl<K: Clone, V: Clone + Ord> Clone for HeapQueue<K, V> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<K: Debug, V: Debug + Ord> Debug for HeapQueue<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

impl<K, V: Ord> Default for HeapQueue<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Ord> FromIterator<(K, V)> for HeapQueue<K, V> {
    /// Builds heap in ***O(n)*** using bottom-up construction.
    ///
    /// ```
    /// use fast_priority_queues::{HeapQueue, PriorityQueue};
    /// let queue: HeapQueue<_, _> = (0..5).map(|x| (x, 10 - x)).collect();
    /// assert_eq!(queue.peek_minimum(), Ok((&4, &6)));
    /// ```
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let data: Vec<Entry<K, V>> = iter.into_iter().map(Entry::from).collect();
        let heapify_start = data.len() / 2;
        let mut res = Self { data };
        for pos in (0..heapify_start).rev() {
            res.heapify_down(pos);
        }
        res
    }
}

impl<K, V: Ord> Extend<(K, V)> for HeapQueue<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, priority) in iter {
            self.enqueue(key, priority);
        }
    }
}

impl<K, V: Ord> IntoIterator for HeapQueue<K, V> {
    type Item = (K, V);
    type IntoIter = IntoSortedIter<Self>;

    /// Make iterator that returns items in non-decreasing priority order.
    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter::new(self)
    }
}

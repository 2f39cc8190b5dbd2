use std::fmt::Debug;
use std::iter::FusedIterator;

/// Error returned by [`dequeue_minimum`], [`dequeue_minimum_key`] and [`peek_minimum`]
/// when the queue holds no entries.
///
/// The queue is left untouched and stays usable, so loops usually treat it
/// as a termination signal.
///
/// ```
/// use fast_priority_queues::{EmptyQueueError, HeapQueue, PriorityQueue};
///
/// let mut queue = HeapQueue::<&str, u32>::new();
/// assert_eq!(queue.dequeue_minimum(), Err(EmptyQueueError));
/// queue.enqueue("a", 2);
/// assert_eq!(queue.dequeue_minimum(), Ok(("a", 2)));
/// ```
///
/// [`dequeue_minimum`]: trait.PriorityQueue.html#tymethod.dequeue_minimum
/// [`dequeue_minimum_key`]: trait.PriorityQueue.html#method.dequeue_minimum_key
/// [`peek_minimum`]: trait.PriorityQueue.html#tymethod.peek_minimum
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Default, thiserror::Error)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;

/// Min priority queue over `(key, priority)` pairs.
///
/// Every container of this crate implements it, so algorithms can be written
/// once and run with any storage strategy.
///
/// Keys are never compared or deduplicated by the queue.
/// Pushing the same key twice stores two independent entries.
/// There is deliberately no way to change the priority of a stored entry:
/// enqueue the key again with the better priority and skip the stale entry
/// when it is dequeued later.
///
/// It is logic error if priority values change while they are in the queue.
///
/// # Examples
///
/// ```
/// use fast_priority_queues::{
///     HeapQueue, PriorityQueue, SortedVectorQueue, UnsortedVectorQueue,
/// };
///
/// fn drain_priorities<Q: PriorityQueue<Key = char, Priority = i32>>(mut queue: Q) -> Vec<i32> {
///     queue.enqueue('a', 5);
///     queue.enqueue('b', 1);
///     queue.enqueue('c', 3);
///     let mut result = Vec::new();
///     while let Ok((_, priority)) = queue.dequeue_minimum() {
///         result.push(priority);
///     }
///     result
/// }
///
/// assert_eq!(drain_priorities(HeapQueue::new()), [1, 3, 5]);
/// assert_eq!(drain_priorities(SortedVectorQueue::new()), [1, 3, 5]);
/// assert_eq!(drain_priorities(UnsortedVectorQueue::new()), [1, 3, 5]);
/// ```
pub trait PriorityQueue {
    /// Payload stored alongside priority.
    type Key;
    /// Smaller values leave the queue first.
    type Priority: Ord;

    /// Adds new entry to the queue. Duplicated keys are allowed.
    fn enqueue(&mut self, key: Self::Key, priority: Self::Priority);

    /// Removes and returns an entry with the minimal priority.
    ///
    /// When several entries share the minimal priority, the choice depends
    /// only on the variant and on the history of operations.
    fn dequeue_minimum(&mut self) -> Result<(Self::Key, Self::Priority), EmptyQueueError>;

    /// Same as [`dequeue_minimum`](#tymethod.dequeue_minimum) but drops the priority.
    #[inline]
    fn dequeue_minimum_key(&mut self) -> Result<Self::Key, EmptyQueueError> {
        self.dequeue_minimum().map(|(key, _)| key)
    }

    /// Returns references to the entry which `dequeue_minimum` would remove.
    fn peek_minimum(&self) -> Result<(&Self::Key, &Self::Priority), EmptyQueueError>;

    /// Number of stored entries. Always ***O(1)***.
    fn len(&self) -> usize;

    /// Always ***O(1)***.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries, keeping allocated memory.
    fn clear(&mut self);

    /// Returns iterator which dequeues entries in non-decreasing priority order.
    ///
    /// Entries not yet yielded when the iterator is dropped stay in the queue.
    ///
    /// ```
    /// use fast_priority_queues::{PriorityQueue, UnsortedVectorQueue};
    ///
    /// let mut queue: UnsortedVectorQueue<u8, u8> =
    ///     [(1, 30), (2, 10), (3, 20)].into_iter().collect();
    /// let first_two: Vec<_> = queue.drain_minimum().take(2).collect();
    /// assert_eq!(first_two, [(2, 10), (3, 20)]);
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    fn drain_minimum(&mut self) -> DrainMinimum<'_, Self>
    where
        Self: Sized,
    {
        DrainMinimum { queue: self }
    }
}

/// Borrowing iterator returned by [`PriorityQueue::drain_minimum`].
pub struct DrainMinimum<'a, Q: PriorityQueue> {
    queue: &'a mut Q,
}

impl<'a, Q: PriorityQueue> Iterator for DrainMinimum<'a, Q> {
    type Item = (Q::Key, Q::Priority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue_minimum().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<'a, Q: PriorityQueue> ExactSizeIterator for DrainMinimum<'a, Q> {}
impl<'a, Q: PriorityQueue> FusedIterator for DrainMinimum<'a, Q> {}

impl<'a, Q: PriorityQueue + Debug> Debug for DrainMinimum<'a, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_tuple("DrainMinimum").field(&self.queue).finish()
    }
}

/// Consuming iterator over a queue, yields entries in non-decreasing priority order.
///
/// Created by `into_iter` of every queue of this crate.
#[derive(Clone)]
pub struct IntoSortedIter<Q: PriorityQueue> {
    queue: Q,
}

impl<Q: PriorityQueue> IntoSortedIter<Q> {
    #[inline(always)]
    pub(crate) fn new(queue: Q) -> Self {
        Self { queue }
    }
}

impl<Q: PriorityQueue> Iterator for IntoSortedIter<Q> {
    type Item = (Q::Key, Q::Priority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue_minimum().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

impl<Q: PriorityQueue> ExactSizeIterator for IntoSortedIter<Q> {}
impl<Q: PriorityQueue> FusedIterator for IntoSortedIter<Q> {}

impl<Q: PriorityQueue + Debug> Debug for IntoSortedIter<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_tuple("IntoSortedIter").field(&self.queue).finish()
    }
}

/// Stored pair. Queues never expose it directly.
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) priority: V,
}

impl<K, V> Entry<K, V> {
    #[inline(always)]
    pub(crate) fn new(key: K, priority: V) -> Self {
        Self { key, priority }
    }

    #[inline(always)]
    pub(crate) fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.priority)
    }

    #[inline(always)]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.priority)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline(always)]
    fn from((key, priority): (K, V)) -> Self {
        Self { key, priority }
    }
}

impl<K: Clone, V: Clone> Clone for Entry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            priority: self.priority.clone(),
        }
    }
}

impl<K: Copy, V: Copy> Copy for Entry<K, V> {}

impl<K: Debug, V: Debug> Debug for Entry<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{{key: {:?}, priority: {:?}}}", &self.key, &self.priority)
    }
}

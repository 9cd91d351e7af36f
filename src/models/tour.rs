#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::common::{Customer, NOT_SET};
use crate::utils::{GenericError, GenericResult};

/// An ordered sequence of distinct customers represented through a successor array.
///
/// The shape of a tour is governed by its `last` customer:
///
/// - `None`: an open tour with no closing edge;
/// - `Some(first)`: a closed tour, the closing edge back to `first` is implicit and produced
///   only by [`Tour::pairs`];
/// - `Some(last)`, `last != first`: a tour with a fixed final customer and no closing edge.
///
/// Successor lookups and insertions are O(1); removal has to discover the predecessor and
/// walks the chain.
#[derive(Clone, Debug)]
pub struct Tour {
    next: Vec<Customer>,
    first: Customer,
    last: Option<Customer>,
    tail: Customer,
    count: usize,
}

impl Tour {
    /// Creates a new instance of `Tour` from a customer sequence and an optional last customer.
    ///
    /// The sequence must be non empty and free of repetitions. When `last` is given and differs
    /// from the first customer, the sequence must end with it.
    pub fn new<I>(sequence: I, last: Option<Customer>) -> GenericResult<Self>
    where
        I: IntoIterator<Item = Customer>,
    {
        let sequence: Vec<_> = sequence.into_iter().collect();

        let (&first, &tail) = sequence
            .first()
            .zip(sequence.last())
            .ok_or_else(|| GenericError::from("cannot create a tour from an empty sequence"))?;

        if let Some(last) = last {
            if last != first && tail != last {
                return Err(format!("the sequence must end with the fixed last customer {last}").into());
            }
        }

        let size = sequence.iter().max().copied().map_or(0, |max| max + 1);
        let mut next = vec![NOT_SET; size];
        let mut seen = vec![false; size];
        seen[first] = true;
        for window in sequence.windows(2) {
            let (from, to) = (window[0], window[1]);
            if seen[to] {
                return Err(format!("customer sequence contains a repetition at {to}").into());
            }
            seen[to] = true;
            next[from] = to;
        }

        Ok(Self { next, first, last, tail, count: sequence.len() })
    }

    /// Creates a new instance of `Tour` with the same customer order as the given one, but
    /// rebased under a different open/closed shape.
    pub fn new_with_shape(other: &Tour, last: Option<Customer>) -> GenericResult<Self> {
        Self::new(other.iter(), last)
    }

    /// Returns the amount of customers on the tour.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the first customer.
    pub fn first(&self) -> Customer {
        self.first
    }

    /// Returns the last customer which defines the shape of the tour.
    pub fn last(&self) -> Option<Customer> {
        self.last
    }

    /// Returns true if the tour is closed.
    pub fn is_closed(&self) -> bool {
        self.last == Some(self.first)
    }

    /// Returns true if the given customer is on the tour.
    pub fn contains(&self, customer: Customer) -> bool {
        customer == self.tail || self.next.get(customer).is_some_and(|&next| next != NOT_SET)
    }

    /// Returns the successor of the given customer, `None` for an absent customer and for the
    /// final customer of a non-closed tour.
    pub fn next_to(&self, customer: Customer) -> Option<Customer> {
        match self.next.get(customer) {
            Some(&next) if next != NOT_SET => Some(next),
            _ if customer == self.tail && self.is_closed() && self.count > 1 => Some(self.first),
            _ => None,
        }
    }

    /// Inserts a customer immediately after another one which is already on the tour.
    pub fn insert_after(&mut self, from: Customer, inserted: Customer) -> GenericResult<()> {
        if !self.contains(from) {
            return Err(format!("cannot insert after customer {from} which is not on the tour").into());
        }

        if self.contains(inserted) {
            return Err(format!("customer {inserted} is already on the tour").into());
        }

        if self.last.is_some_and(|last| last != self.first && last == inserted) {
            return Err(format!("customer {inserted} is reserved as the fixed last customer").into());
        }

        if inserted >= self.next.len() {
            self.next.resize(inserted + 1, NOT_SET);
        }

        self.next[inserted] = self.next[from];
        self.next[from] = inserted;
        if from == self.tail {
            self.tail = inserted;
        }
        self.count += 1;

        Ok(())
    }

    /// Removes a customer from the tour. The first customer and a fixed last customer
    /// cannot be removed.
    pub fn remove(&mut self, customer: Customer) -> GenericResult<()> {
        if customer == self.first {
            return Err("cannot remove the first customer".into());
        }

        if self.last.is_some_and(|last| last != self.first && last == customer) {
            return Err("cannot remove the fixed last customer".into());
        }

        let previous = self
            .iter()
            .find(|&current| self.next[current] == customer)
            .ok_or_else(|| GenericError::from(format!("customer {customer} is not on the tour")))?;

        self.next[previous] = self.next[customer];
        self.next[customer] = NOT_SET;
        if customer == self.tail {
            self.tail = previous;
        }
        self.count -= 1;

        Ok(())
    }

    /// Returns a lazy iterator over consecutive customer pairs in tour order, including the
    /// closing pair when the tour is closed.
    pub fn pairs(&self) -> impl Iterator<Item = (Customer, Customer)> + '_ {
        let closing = if self.is_closed() && self.count > 1 { Some((self.tail, self.first)) } else { None };

        self.iter()
            .filter_map(|from| self.next.get(from).filter(|&&to| to != NOT_SET).map(|&to| (from, to)))
            .chain(closing)
    }

    /// Returns a lazy iterator over customers in tour order.
    pub fn iter(&self) -> impl Iterator<Item = Customer> + '_ {
        std::iter::successors(Some(self.first), move |&current| {
            self.next.get(current).copied().filter(|&next| next != NOT_SET)
        })
    }

    /// Copies the state of another tour into this one.
    pub fn copy_from(&mut self, other: &Tour) {
        self.next.clear();
        self.next.extend_from_slice(&other.next);
        self.first = other.first;
        self.last = other.last;
        self.tail = other.tail;
        self.count = other.count;
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first
            && self.last == other.last
            && self.count == other.count
            && self.iter().eq(other.iter())
    }
}

impl Eq for Tour {}

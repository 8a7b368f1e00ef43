//! Identity generation for new entities.

use std::marker::PhantomData;

/// Hands out a fresh identity for every saved entity.
///
/// The store actor owns its generator and calls it once per `Save`, so implementations
/// need no internal synchronisation. `None` means the identity space is used up; the
/// save fails with [`StoreError::IdsExhausted`](crate::store::StoreError::IdsExhausted).
pub trait IdGenerator<Id>: Send + 'static {
    fn next_id(&mut self) -> Option<Id>;
}

impl<Id, F> IdGenerator<Id> for F
where
    F: FnMut() -> Id + Send + 'static,
{
    fn next_id(&mut self) -> Option<Id> {
        Some(self())
    }
}

/// Monotonic `u32` counter converted into the entity's id type.
///
/// Issues `u32::MAX` last, then reports exhaustion instead of wrapping.
#[derive(Debug)]
pub struct Sequence<Id> {
    next: Option<u32>,
    _id: PhantomData<fn() -> Id>,
}

impl<Id> Sequence<Id> {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: Some(first),
            _id: PhantomData,
        }
    }
}

impl<Id> Default for Sequence<Id> {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<Id> IdGenerator<Id> for Sequence<Id>
where
    Id: From<u32> + 'static,
{
    fn next_id(&mut self) -> Option<Id> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(Id::from(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_counts_up_from_its_start() {
        let mut ids = Sequence::<u64>::starting_at(7);
        assert_eq!(ids.next_id(), Some(7));
        assert_eq!(ids.next_id(), Some(8));
    }

    #[test]
    fn sequence_stops_instead_of_wrapping() {
        let mut ids = Sequence::<u32>::starting_at(u32::MAX - 1);
        assert_eq!(ids.next_id(), Some(u32::MAX - 1));
        assert_eq!(ids.next_id(), Some(u32::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn closures_are_generators() {
        let mut n = 0;
        let mut ids = move || {
            n += 10;
            format!("id-{n}")
        };
        assert_eq!(IdGenerator::<String>::next_id(&mut ids), Some("id-10".to_string()));
        assert_eq!(IdGenerator::<String>::next_id(&mut ids), Some("id-20".to_string()));
    }
}

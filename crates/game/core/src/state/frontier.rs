use std::collections::BTreeSet;

use crate::env::RngSource;

use super::Position;

/// Unoccupied positions reachable through an open door of a placed tile.
///
/// Order carries no meaning; the backing vector only exists so that a
/// uniform sample is a single index draw. The set mirrors it for membership
/// checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    spots: Vec<Position>,
    members: BTreeSet<Position>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.members.contains(position)
    }

    /// Adds `position`; returns false if it was already present.
    pub fn insert(&mut self, position: Position) -> bool {
        if !self.members.insert(position) {
            return false;
        }
        self.spots.push(position);
        true
    }

    /// Removes `position`; returns false if it was not present.
    pub fn remove(&mut self, position: &Position) -> bool {
        if !self.members.remove(position) {
            return false;
        }
        if let Some(index) = self.spots.iter().position(|spot| spot == position) {
            self.spots.swap_remove(index);
        }
        true
    }

    /// Picks a uniformly random member without removing it.
    pub fn sample<R>(&self, rng: &mut R) -> Option<Position>
    where
        R: RngSource + ?Sized,
    {
        if self.spots.is_empty() {
            return None;
        }
        Some(self.spots[rng.next_index(self.spots.len())])
    }

    /// Members in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.members.iter().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.spots.clear();
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn insert_is_deduplicated() {
        let mut frontier = Frontier::new();
        assert!(frontier.insert(Position::new(1, 0)));
        assert!(!frontier.insert(Position::new(1, 0)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn remove_keeps_vector_and_set_in_sync() {
        let mut frontier = Frontier::new();
        for x in 0..5 {
            frontier.insert(Position::new(x, 0));
        }
        assert!(frontier.remove(&Position::new(2, 0)));
        assert!(!frontier.remove(&Position::new(2, 0)));
        assert_eq!(frontier.len(), 4);
        assert!(!frontier.contains(&Position::new(2, 0)));

        let mut rng = PcgRng::new(5);
        for _ in 0..100 {
            let spot = frontier.sample(&mut rng).unwrap();
            assert_ne!(spot, Position::new(2, 0));
            assert!(frontier.contains(&spot));
        }
    }

    #[test]
    fn sampling_empty_frontier_yields_none() {
        let frontier = Frontier::new();
        let mut rng = PcgRng::new(0);
        assert_eq!(frontier.sample(&mut rng), None);
    }
}

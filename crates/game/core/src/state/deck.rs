use crate::env::{RngSource, TileId, TileRef, shuffle};

/// Multiset of tile definitions still waiting to be placed.
///
/// The deck only shrinks during a run. Duplicated definitions are separate
/// entries and are consumed one at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    tiles: Vec<TileRef>,
}

impl Deck {
    pub fn new(tiles: Vec<TileRef>) -> Self {
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileRef> + '_ {
        self.tiles.iter()
    }

    pub fn contains(&self, id: &TileId) -> bool {
        self.tiles.iter().any(|tile| &tile.id == id)
    }

    /// Returns the remaining tiles in a uniformly random order.
    ///
    /// The deck itself is left untouched.
    pub fn shuffled<R>(&self, rng: &mut R) -> Vec<TileRef>
    where
        R: RngSource + ?Sized,
    {
        let mut order = self.tiles.clone();
        shuffle(rng, &mut order);
        order
    }

    /// Removes one instance of `id`, keeping the order of the others.
    pub fn take(&mut self, id: &TileId) -> Option<TileRef> {
        let index = self.tiles.iter().position(|tile| &tile.id == id)?;
        Some(self.tiles.remove(index))
    }

    /// Display names of the remaining tiles, in deck order.
    pub fn names(&self) -> Vec<String> {
        self.tiles.iter().map(|tile| tile.name.clone()).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.tiles.clear();
    }
}

impl FromIterator<TileRef> for Deck {
    fn from_iter<I: IntoIterator<Item = TileRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FloorLayers, PcgRng, TileDefinition};
    use crate::state::DoorMask;

    fn tile(id: &str) -> TileRef {
        TileDefinition::new(id, id, DoorMask::all(), FloorLayers::ANY).into_ref()
    }

    #[test]
    fn take_removes_a_single_instance() {
        let mut deck: Deck = [tile("attic"), tile("vault"), tile("attic")]
            .into_iter()
            .collect();

        assert!(deck.take(&TileId::from("attic")).is_some());
        assert_eq!(deck.len(), 2);
        assert!(deck.contains(&TileId::from("attic")));
        assert!(deck.take(&TileId::from("library")).is_none());
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn shuffled_leaves_deck_intact() {
        let deck: Deck = ["a", "b", "c", "d"].into_iter().map(tile).collect();
        let before = deck.clone();
        let mut rng = PcgRng::new(11);

        let order = deck.shuffled(&mut rng);

        assert_eq!(deck, before);
        assert_eq!(order.len(), 4);
        for id in ["a", "b", "c", "d"] {
            assert!(order.iter().any(|tile| tile.id.as_str() == id));
        }
    }
}

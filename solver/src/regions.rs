use std::hash::Hash;
use std::ops::Index;

use crate::game::Player;
use crate::Set;

/// The winning regions of both players.
#[derive(Clone, Debug)]
pub struct WinningRegions<T> {
    pub eve: Set<T>,
    pub adam: Set<T>,
}

impl<T> WinningRegions<T> {
    /// Builds the regions given the one won by `player` and the one won by its opponent.
    pub fn from_player(player: Player, own: Set<T>, opponent: Set<T>) -> Self {
        match player {
            Player::Eve => WinningRegions { eve: own, adam: opponent },
            Player::Adam => WinningRegions { eve: opponent, adam: own },
        }
    }

    /// Splits into the region won by `player` and the one won by its opponent.
    pub fn into_player(self, player: Player) -> (Set<T>, Set<T>) {
        match player {
            Player::Eve => (self.eve, self.adam),
            Player::Adam => (self.adam, self.eve),
        }
    }
}

impl<T: Hash + Eq> WinningRegions<T> {
    pub fn winner_of(&self, v: &T) -> Option<Player> {
        if self.eve.contains(v) {
            Some(Player::Eve)
        } else if self.adam.contains(v) {
            Some(Player::Adam)
        } else {
            None
        }
    }

    /// Whether the two regions are disjoint and together cover exactly `vertices`.
    pub fn is_partition_of(&self, vertices: &Set<T>) -> bool {
        self.eve.is_disjoint(&self.adam)
            && self.eve.len() + self.adam.len() == vertices.len()
            && self.eve.iter().chain(&self.adam).all(|v| vertices.contains(v))
    }

    pub fn map<U: Hash + Eq>(&self, mut f: impl FnMut(&T) -> U) -> WinningRegions<U> {
        WinningRegions {
            eve: self.eve.iter().map(&mut f).collect(),
            adam: self.adam.iter().map(&mut f).collect(),
        }
    }
}

impl<T> Default for WinningRegions<T> {
    fn default() -> Self {
        WinningRegions { eve: Set::default(), adam: Set::default() }
    }
}

impl<T: Hash + Eq> PartialEq for WinningRegions<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eve == other.eve && self.adam == other.adam
    }
}

impl<T: Hash + Eq> Eq for WinningRegions<T> {}

impl<T> Index<Player> for WinningRegions<T> {
    type Output = Set<T>;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::Eve => &self.eve,
            Player::Adam => &self.adam,
        }
    }
}

//! Actor identification and per-actor data storage.
//!
//! ## Actor
//!
//! The two participants: the human at the keyboard and the computer opponent.
//!
//! ## ActorMap
//!
//! Per-actor data storage with one slot per actor, indexable by `Actor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The human player. Always moves first.
    Human,
    /// The computer opponent.
    Opponent,
}

impl Actor {
    /// Both actors in turn order.
    pub const ALL: [Actor; 2] = [Actor::Human, Actor::Opponent];

    /// The actor who moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Actor::Human => Actor::Opponent,
            Actor::Opponent => Actor::Human,
        }
    }

    /// Slot index (0 for Human, 1 for Opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Actor::Human => 0,
            Actor::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Human => write!(f, "Human"),
            Actor::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-actor data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use prime_race::core::{Actor, ActorMap};
///
/// let mut scores: ActorMap<u32> = ActorMap::default();
/// scores[Actor::Opponent] += 7;
///
/// assert_eq!(scores[Actor::Human], 0);
/// assert_eq!(scores[Actor::Opponent], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    data: [T; 2],
}

impl<T> ActorMap<T> {
    /// Create a new ActorMap with values from a factory function.
    pub fn new(factory: impl Fn(Actor) -> T) -> Self {
        Self {
            data: [factory(Actor::Human), factory(Actor::Opponent)],
        }
    }

    /// Create a new ActorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, actor: Actor) -> &T {
        &self.data[actor.index()]
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, actor: Actor) -> &mut T {
        &mut self.data[actor.index()]
    }

    /// Iterate over (Actor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Actor, &T)> {
        Actor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        self.get(actor)
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        self.get_mut(actor)
    }
}

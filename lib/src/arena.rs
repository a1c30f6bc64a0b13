//! Id-keyed storage with monotonically assigned ids.

use std::{collections::BTreeMap, marker::PhantomData, ops::Index};

/// Values are iterated in id order, which is also insertion order for
/// values added through [`Arena::push`].
#[derive(Clone, Debug, PartialEq)]
pub struct Arena<Id: IdLike + Copy + Ord, T> {
    inner: BTreeMap<Id, T>,
    next_id: Id,
    _phantom: PhantomData<Id>,
}

impl<Id: IdLike + Copy + Ord, T> Arena<Id, T> {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
            next_id: Id::from_raw(0),
            _phantom: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, x: T) -> Id {
        self.push_with(|_| x)
    }

    /// Like [`Arena::push`], for values that need to know their own id.
    pub fn push_with(&mut self, f: impl FnOnce(Id) -> T) -> Id {
        let id = self.next_id;
        self.next_id = Id::from_raw(self.next_id.into_raw() + 1);
        self.inner.insert(id, f(id));
        id
    }

    pub fn contains(&self, id: Id) -> bool {
        self.inner.contains_key(&id)
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.inner.get(&id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.inner.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
        self.inner.iter().map(|(i, v)| (*i, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.inner.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.inner.values_mut()
    }
}

impl<Id: IdLike + Copy + Ord, T> Default for Arena<Id, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: IdLike + Copy + Ord, T> Index<Id> for Arena<Id, T> {
    type Output = T;

    fn index(&self, index: Id) -> &Self::Output {
        &self.inner[&index]
    }
}

pub trait IdLike {
    fn from_raw(index: usize) -> Self;
    fn into_raw(self) -> usize;
}

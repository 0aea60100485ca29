//! Collection capabilities implemented by todo lists.
//!
//! # Responsibility
//! - `Sequence`: ordered, read-only access to the held elements.
//! - `Filterable`: predicate-based subsets that keep the container shape.
//!
//! Value equality between containers is plain `PartialEq`/`Eq`.

/// Ordered, read-only view over a container's elements.
pub trait Sequence {
    type Item;

    /// Elements in canonical order.
    fn as_slice(&self) -> &[Self::Item];

    fn iter(&self) -> std::slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }

    fn get(&self, index: usize) -> Option<&Self::Item> {
        self.as_slice().get(index)
    }

    /// Snapshot of the elements. Changing the returned `Vec` never touches
    /// the container.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.as_slice().to_vec()
    }
}

/// Containers that can produce filtered copies of themselves.
pub trait Filterable: Sized {
    type Item;

    /// Returns a new container with the elements matching `predicate`, in
    /// their original relative order. The source is not modified.
    fn select<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&Self::Item) -> bool;

    /// Complement of [`Filterable::select`].
    fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.select(|item| !predicate(item))
    }
}

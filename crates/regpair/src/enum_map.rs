use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::reg::Reg16;

/// A closed enum whose variants map densely onto `0..COUNT`.
pub trait EnumIndex: Copy + 'static {
    const COUNT: usize;

    /// Every variant, in index order.
    fn all() -> &'static [Self];
    fn index(self) -> usize;
}

/// Fixed-size array keyed by an enum instead of a `usize`.
///
/// `N` must equal `E::COUNT`; the aliases below pin it so callers never
/// spell it out.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EnumMap<T, E, const N: usize> {
    data: [T; N],
    _key: PhantomData<E>,
}

/// One slot per register pair.
pub type PairMap<T> = EnumMap<T, Reg16, { Reg16::COUNT }>;

impl<T, E: EnumIndex, const N: usize> EnumMap<T, E, N> {
    pub fn new(data: [T; N]) -> Self {
        debug_assert_eq!(N, E::COUNT);
        Self {
            data,
            _key: PhantomData,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (E, &T)> + '_ {
        E::all().iter().copied().zip(self.data.iter())
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }
}

impl<T: Default, E: EnumIndex, const N: usize> Default for EnumMap<T, E, N> {
    fn default() -> Self {
        Self::new(std::array::from_fn(|_| T::default()))
    }
}

impl<T, E: EnumIndex, const N: usize> Index<E> for EnumMap<T, E, N> {
    type Output = T;

    #[inline]
    fn index(&self, key: E) -> &T {
        &self.data[key.index()]
    }
}

impl<T, E: EnumIndex, const N: usize> IndexMut<E> for EnumMap<T, E, N> {
    #[inline]
    fn index_mut(&mut self, key: E) -> &mut T {
        &mut self.data[key.index()]
    }
}

impl<T: fmt::Debug, E: EnumIndex + fmt::Debug, const N: usize> fmt::Debug for EnumMap<T, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Reg8;

    #[test]
    fn starts_defaulted_and_sized_by_key() {
        let pairs: PairMap<u16> = PairMap::default();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|(_, v)| *v == 0));

        let bytes: EnumMap<u8, Reg8, { Reg8::COUNT }> = EnumMap::default();
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn slots_are_independent() {
        let mut pairs: PairMap<u16> = PairMap::default();
        pairs[Reg16::HL] = 0xC000;
        pairs[Reg16::PC] += 3;

        assert_eq!(pairs[Reg16::HL], 0xC000);
        assert_eq!(pairs[Reg16::PC], 3);
        assert_eq!(pairs.as_array(), &[0, 0, 0xC000, 0, 0, 3]);
    }

    #[test]
    fn iterates_in_declaration_order() {
        let pairs = PairMap::new([1u16, 2, 3, 4, 5, 6]);
        let keys: Vec<Reg16> = pairs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, Reg16::ALL.to_vec());
        assert_eq!(pairs[Reg16::AF], 4);
    }
}

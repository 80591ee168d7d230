use bitvec::prelude::*;
use core::mem;
use num::{NumCast, ToPrimitive};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

#[derive(Clone, Default)]
pub struct BitSet {
    cardinality: usize,
    bit_vec: BitVec,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self.iter().map(|i| i.to_string()).collect();
        write!(
            f,
            "BitSet {{ cardinality: {}, bit_vec: [{}]}}",
            self.cardinality,
            values.join(", "),
        )
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.cardinality == other.cardinality && self.bit_vec == other.bit_vec
    }
}
impl Eq for BitSet {}

const fn block_size() -> usize {
    mem::size_of::<usize>() * 8
}

impl BitSet {
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            cardinality: 0,
            bit_vec: bitvec![0; size],
        }
    }

    /// Builds a set of capacity `size` from distinct indices. Indices that do
    /// not fit into `usize` or exceed `size` are skipped.
    pub fn from_slice<T: ToPrimitive + Copy>(size: usize, slice: &[T]) -> Self {
        let mut set = Self::new(size);
        slice.iter().for_each(|i| {
            let idx: Option<usize> = NumCast::from(*i);
            if let Some(idx) = idx.filter(|idx| *idx < size) {
                set.set_bit(idx);
            }
        });
        set
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.cardinality == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        self.bit_vec.as_slice()
    }

    /// Returns whether the bit was already set.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        if !self.bit_vec[idx] {
            self.bit_vec.set(idx, true);
            self.cardinality += 1;
            false
        } else {
            true
        }
    }

    /// Returns whether the bit was set before.
    #[inline]
    pub fn unset_bit(&mut self, idx: usize) -> bool {
        if self.bit_vec[idx] {
            self.bit_vec.set(idx, false);
            self.cardinality -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    #[inline]
    pub fn and(&mut self, other: &BitSet) {
        for (x, y) in self
            .bit_vec
            .as_mut_slice()
            .iter_mut()
            .zip(other.as_slice().iter())
        {
            *x &= y;
        }
        let words = other.as_slice().len();
        self.bit_vec
            .as_mut_slice()
            .iter_mut()
            .skip(words)
            .for_each(|x| *x = 0);
        self.cardinality = self.bit_vec.count_ones();
    }

    /// `|self ∩ other|` without materializing the intersection.
    #[inline]
    pub fn intersection_cardinality(&self, other: &BitSet) -> usize {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(x, y)| (x & y).count_ones() as usize)
            .sum()
    }

    #[inline]
    pub fn get_next_set(&self, idx: usize) -> Option<usize> {
        if idx >= self.bit_vec.len() {
            return None;
        }
        let mut block_idx = idx / block_size();
        let word_idx = idx % block_size();
        let mut block = self.bit_vec.as_slice()[block_idx];
        let max = self.bit_vec.as_slice().len();
        block &= usize::MAX << word_idx;
        while block == 0usize {
            block_idx += 1;
            if block_idx >= max {
                return None;
            }
            block = self.bit_vec.as_slice()[block_idx];
        }
        let v = block_idx * block_size() + block.trailing_zeros() as usize;
        if v >= self.bit_vec.len() {
            None
        } else {
            Some(v)
        }
    }

    #[inline]
    pub fn at(&self, idx: usize) -> bool {
        self.bit_vec[idx]
    }

    #[inline]
    pub fn iter(&self) -> BitSetIterator<'_> {
        BitSetIterator {
            iter: self.bit_vec.as_slice().iter(),
            block: 0,
            idx: 0,
            size: self.bit_vec.len(),
        }
    }
}

pub struct BitSetIterator<'a> {
    iter: ::std::slice::Iter<'a, usize>,
    block: usize,
    idx: usize,
    size: usize,
}

impl<'a> Iterator for BitSetIterator<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.size {
            return None;
        }
        while self.block == 0 {
            self.block = if let Some(&i) = self.iter.next() {
                if i == 0 {
                    self.idx += block_size();
                    continue;
                } else {
                    self.idx = ((self.idx + block_size() - 1) / block_size()) * block_size();
                    i
                }
            } else {
                return None;
            }
        }
        let offset = self.block.trailing_zeros() as usize;
        self.block >>= offset;
        self.block >>= 1;
        self.idx += offset + 1;
        Some(self.idx - 1)
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.bit_vec.index(index)
    }
}

/// Bucket queue over the elements `0..n` keyed by a value that only ever
/// decreases, as used by the Batagelj-Zaversnik peeling.
///
/// All buckets live in one array `vert`; `bin[d]` is the first position of
/// bucket `d` and `pos[u]` the position of `u`. Elements left of `next` have
/// been popped. Popping and moving an element one bucket down are O(1).
pub struct BucketQueue {
    value: Vec<usize>,
    bin: Vec<usize>,
    pos: Vec<usize>,
    vert: Vec<usize>,
    next: usize,
    floor: usize,
}

impl BucketQueue {
    pub fn new(values: Vec<usize>) -> Self {
        let n = values.len();
        let max_value = values.iter().copied().max().unwrap_or(0);

        let mut bin = vec![0; max_value + 1];
        for v in values.iter() {
            bin[*v] += 1;
        }
        let mut start = 0;
        for b in bin.iter_mut() {
            let count = *b;
            *b = start;
            start += count;
        }

        let mut pos = vec![0; n];
        let mut vert = vec![0; n];
        for (u, v) in values.iter().enumerate() {
            pos[u] = bin[*v];
            vert[pos[u]] = u;
            bin[*v] += 1;
        }
        for d in (1..=max_value).rev() {
            bin[d] = bin[d - 1];
        }
        bin[0] = 0;

        Self {
            value: values,
            bin,
            pos,
            vert,
            next: 0,
            floor: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vert.len() - self.next
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn value(&self, u: usize) -> usize {
        self.value[u]
    }

    /// Removes an element of smallest current value. The popped value becomes
    /// the floor no remaining element is decreased below.
    pub fn pop_min(&mut self) -> Option<(usize, usize)> {
        if self.next >= self.vert.len() {
            return None;
        }
        let u = self.vert[self.next];
        self.next += 1;
        self.floor = self.value[u];
        Some((u, self.value[u]))
    }

    /// Decreases the value of `u` by one unless it is already at the floor.
    /// Popped elements never exceed the floor, so this is a no-op for them.
    /// Returns whether `u` was moved.
    pub fn decrease(&mut self, u: usize) -> bool {
        let du = self.value[u];
        if du <= self.floor {
            return false;
        }
        let pu = self.pos[u];
        let pw = self.bin[du];
        let w = self.vert[pw];
        if u != w {
            self.pos[u] = pw;
            self.vert[pu] = w;
            self.pos[w] = pu;
            self.vert[pw] = u;
        }
        self.bin[du] += 1;
        self.value[u] = du - 1;
        true
    }
}

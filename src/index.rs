//! Open-addressed hash index keyed by RSID.
//!
//! RSIDs are already well-distributed, compiler-generated small integers,
//! so the identity function is used as the hash: no mixing, no DoS
//! resistance concerns (this is not an attacker-facing table), just a
//! cheap, uniform spread over the table's power-of-two capacity.

use crate::snp::{Rsid, RsidSnp, Snp};

const INITIAL_CAPACITY: usize = 16;
const MAX_LOAD_FACTOR: f64 = 0.7;

#[derive(Clone, Copy)]
struct Slot {
    rsid: Rsid,
    snp: Snp,
}

impl Slot {
    const EMPTY: Slot = Slot {
        rsid: 0,
        snp: crate::snp::NONE_SNP,
    };

    #[inline]
    fn is_empty(&self) -> bool {
        self.rsid == 0
    }
}

/// An open-addressed, linear-probed hash table mapping non-zero RSIDs to
/// [`Snp`] values. `rsid == 0` marks an empty slot and is never a valid
/// key — callers must never insert it.
#[derive(Clone)]
pub struct RsidMap {
    slots: Vec<Slot>,
    len: usize,
}

impl RsidMap {
    /// Create a table sized to hold roughly `capacity_hint` entries without
    /// rehashing.
    pub fn with_capacity(capacity_hint: usize) -> RsidMap {
        let min_slots = ((capacity_hint as f64 / MAX_LOAD_FACTOR) as usize).max(INITIAL_CAPACITY);
        let capacity = min_slots.next_power_of_two();
        RsidMap {
            slots: vec![Slot::EMPTY; capacity],
            len: 0,
        }
    }

    #[inline]
    fn slot_index(&self, rsid: Rsid) -> usize {
        (rsid as usize) & (self.slots.len() - 1)
    }

    /// Insert or overwrite the SNP stored under `rsid`. `rsid` must be
    /// non-zero.
    pub fn insert(&mut self, rsid: Rsid, snp: Snp) {
        debug_assert_ne!(rsid, 0, "RSID 0 is the reserved empty-slot sentinel");
        if (self.len + 1) as f64 > self.slots.len() as f64 * MAX_LOAD_FACTOR {
            self.grow();
        }
        let mut idx = self.slot_index(rsid);
        loop {
            let slot = &mut self.slots[idx];
            if slot.is_empty() {
                *slot = Slot { rsid, snp };
                self.len += 1;
                return;
            }
            if slot.rsid == rsid {
                slot.snp = snp;
                return;
            }
            idx = (idx + 1) & (self.slots.len() - 1);
        }
    }

    /// Locate the slot index holding `rsid`, if present.
    fn find(&self, rsid: Rsid) -> Option<usize> {
        if rsid == 0 || self.slots.is_empty() {
            return None;
        }
        let mut idx = self.slot_index(rsid);
        let mut probes = 0;
        loop {
            let slot = &self.slots[idx];
            if slot.is_empty() {
                return None;
            }
            if slot.rsid == rsid {
                return Some(idx);
            }
            idx = (idx + 1) & (self.slots.len() - 1);
            probes += 1;
            if probes >= self.slots.len() {
                return None;
            }
        }
    }

    #[inline]
    pub fn contains(&self, rsid: Rsid) -> bool {
        self.find(rsid).is_some()
    }

    #[inline]
    pub fn get(&self, rsid: Rsid) -> Option<&Snp> {
        self.find(rsid).map(|idx| &self.slots[idx].snp)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fraction of slots occupied. For developer/diagnostic use.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.len as f64 / self.slots.len() as f64
        }
    }

    /// Iterate over all occupied entries, in table order (not insertion
    /// order).
    pub fn iter(&self) -> impl Iterator<Item = RsidSnp> + '_ {
        self.slots.iter().filter(|s| !s.is_empty()).map(|s| RsidSnp {
            rsid: s.rsid,
            snp: s.snp,
        })
    }

    fn grow(&mut self) {
        let new_capacity = (self.slots.len() * 2).max(INITIAL_CAPACITY);
        let old = std::mem::replace(&mut self.slots, vec![Slot::EMPTY; new_capacity]);
        self.len = 0;
        for slot in old.into_iter().filter(|s| !s.is_empty()) {
            self.insert(slot.rsid, slot.snp);
        }
    }
}

impl PartialEq for RsidMap {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().all(|entry| other.get(entry.rsid) == Some(&entry.snp))
    }
}

impl Eq for RsidMap {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::genotype::Genotype;
    use crate::nucleotide::Nucleotide;

    fn snp(pos: u32) -> Snp {
        Snp::new(Chromosome::Chr1, pos, Genotype::new(Nucleotide::A, Nucleotide::G))
    }

    #[test]
    fn insert_and_lookup() {
        let mut m = RsidMap::with_capacity(4);
        m.insert(123, snp(100));
        assert!(m.contains(123));
        assert_eq!(m.get(123), Some(&snp(100)));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn missing_key_is_none() {
        let m = RsidMap::with_capacity(4);
        assert!(!m.contains(1));
        assert_eq!(m.get(1), None);
    }

    #[test]
    fn zero_is_never_found() {
        let m = RsidMap::with_capacity(4);
        assert!(!m.contains(0));
    }

    #[test]
    fn overwrite_existing_key() {
        let mut m = RsidMap::with_capacity(4);
        m.insert(5, snp(1));
        m.insert(5, snp(2));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(5), Some(&snp(2)));
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut m = RsidMap::with_capacity(4);
        for i in 1..500 {
            m.insert(i, snp(i as u32));
        }
        assert_eq!(m.len(), 499);
        for i in 1..500 {
            assert_eq!(m.get(i), Some(&snp(i as u32)));
        }
    }

    #[test]
    fn negative_rsids_work() {
        let mut m = RsidMap::with_capacity(4);
        m.insert(-7, snp(42));
        assert_eq!(m.get(-7), Some(&snp(42)));
    }
}

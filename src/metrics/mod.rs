//! Hit/miss classification counters for the ARC core.
//!
//! A plain counter block recorded inline on the operation path, snapshotted
//! on demand. Counters classify every `insert` by the list that matched
//! (resident, ghost, or none) and track demotion/eviction traffic, which is
//! the signal needed to judge how the adaptation target is behaving on a
//! given workload.
//!
//! The single-threaded core records into plain `u64` fields under `&mut`;
//! the concurrent wrapper layers atomic counters on top for its
//! shared-read `peek` path.

/// Point-in-time view of one cache's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArcMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub peek_calls: u64,
    pub peek_hits: u64,
    pub peek_misses: u64,

    pub insert_calls: u64,
    /// Insert matched a resident entry (T1 or T2): value overwritten.
    pub insert_resident_hits: u64,
    /// Insert matched a B1 ghost: target grew, key re-entered via T2.
    pub insert_ghost_hits_b1: u64,
    /// Insert matched a B2 ghost: target shrank, key re-entered via T2.
    pub insert_ghost_hits_b2: u64,
    /// Insert matched nothing: fresh entry into T1.
    pub insert_misses: u64,

    /// Residents demoted from T1 into the B1 ghost list.
    pub demotions_b1: u64,
    /// Residents demoted from T2 into the B2 ghost list.
    pub demotions_b2: u64,
    /// Residents dropped outright (T1 full and B1 empty); no ghost kept.
    pub hard_evictions: u64,
    /// Ghost keys aged off the LRU end of B1.
    pub ghost_trims_b1: u64,
    /// Ghost keys aged off the LRU end of B2.
    pub ghost_trims_b2: u64,

    pub update_calls: u64,
    pub update_hits: u64,
    pub remove_calls: u64,
    pub remove_hits: u64,

    // Gauges captured at snapshot time.
    pub t1_len: usize,
    pub t2_len: usize,
    pub b1_len: usize,
    pub b2_len: usize,
    pub target: usize,
    pub capacity: usize,
}

impl ArcMetricsSnapshot {
    /// Hit rate over touching gets, in `[0.0, 1.0]`; `0.0` when no gets ran.
    pub fn get_hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }

    /// Fraction of inserts that were ghost hits (the adaptation signal).
    pub fn ghost_hit_rate(&self) -> f64 {
        if self.insert_calls == 0 {
            0.0
        } else {
            (self.insert_ghost_hits_b1 + self.insert_ghost_hits_b2) as f64
                / self.insert_calls as f64
        }
    }
}

/// Inline counter block owned by the core.
#[derive(Debug, Default)]
pub(crate) struct ArcMetrics {
    pub(crate) get_calls: u64,
    pub(crate) get_hits: u64,
    pub(crate) get_misses: u64,
    pub(crate) insert_calls: u64,
    pub(crate) insert_resident_hits: u64,
    pub(crate) insert_ghost_hits_b1: u64,
    pub(crate) insert_ghost_hits_b2: u64,
    pub(crate) insert_misses: u64,
    pub(crate) demotions_b1: u64,
    pub(crate) demotions_b2: u64,
    pub(crate) hard_evictions: u64,
    pub(crate) ghost_trims_b1: u64,
    pub(crate) ghost_trims_b2: u64,
    pub(crate) update_calls: u64,
    pub(crate) update_hits: u64,
    pub(crate) remove_calls: u64,
    pub(crate) remove_hits: u64,
}

impl ArcMetrics {
    /// Copies the counters into a snapshot; the caller fills in gauges.
    pub(crate) fn to_snapshot(&self) -> ArcMetricsSnapshot {
        ArcMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_resident_hits: self.insert_resident_hits,
            insert_ghost_hits_b1: self.insert_ghost_hits_b1,
            insert_ghost_hits_b2: self.insert_ghost_hits_b2,
            insert_misses: self.insert_misses,
            demotions_b1: self.demotions_b1,
            demotions_b2: self.demotions_b2,
            hard_evictions: self.hard_evictions,
            ghost_trims_b1: self.ghost_trims_b1,
            ghost_trims_b2: self.ghost_trims_b2,
            update_calls: self.update_calls,
            update_hits: self.update_hits,
            remove_calls: self.remove_calls,
            remove_hits: self.remove_hits,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rates_with_no_traffic_are_zero() {
        let snap = ArcMetricsSnapshot::default();
        assert_eq!(snap.get_hit_rate(), 0.0);
        assert_eq!(snap.ghost_hit_rate(), 0.0);
    }

    #[test]
    fn hit_rates_divide_by_call_counts() {
        let snap = ArcMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            insert_calls: 10,
            insert_ghost_hits_b1: 1,
            insert_ghost_hits_b2: 1,
            ..Default::default()
        };
        assert_eq!(snap.get_hit_rate(), 0.75);
        assert_eq!(snap.ghost_hit_rate(), 0.2);
    }

    #[test]
    fn to_snapshot_copies_counters() {
        let mut metrics = ArcMetrics::default();
        metrics.insert_calls = 7;
        metrics.demotions_b1 = 2;

        let snap = metrics.to_snapshot();
        assert_eq!(snap.insert_calls, 7);
        assert_eq!(snap.demotions_b1, 2);
        assert_eq!(snap.t1_len, 0);
    }
}

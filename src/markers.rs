//! Marker Sync
//!
//! Keeps the map's marker layer in step with the filtered attraction list.
//! `MarkerRegistry` maps attraction id -> marker handle so changes can be
//! reconciled instead of rebuilt.

use std::collections::{BTreeMap, BTreeSet};

use crate::category::{self, CategoryStyle};
use crate::config::MarkerStrategy;
use crate::models::Attraction;

/// Map layer that owns marker objects
pub trait MarkerLayer {
    type Handle;

    fn add(&mut self, attraction: &Attraction, style: CategoryStyle) -> Self::Handle;
    fn remove(&mut self, handle: Self::Handle);
    fn clear(&mut self);
}

/// Outcome of one sync pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: usize,
    pub removed: usize,
    pub kept: usize,
}

#[derive(Debug)]
pub struct MarkerRegistry<H> {
    markers: BTreeMap<u32, H>,
}

impl<H> Default for MarkerRegistry<H> {
    fn default() -> Self {
        Self { markers: BTreeMap::new() }
    }
}

impl<H> MarkerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> BTreeSet<u32> {
        self.markers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn sync<L>(&mut self, layer: &mut L, filtered: &[Attraction], strategy: MarkerStrategy) -> SyncReport
    where
        L: MarkerLayer<Handle = H>,
    {
        let report = match strategy {
            MarkerStrategy::Reconcile => self.reconcile(layer, filtered),
            MarkerStrategy::Rebuild => self.rebuild(layer, filtered),
        };
        log::debug!(
            target: "markers",
            "sync {:?}: +{} -{} ={} ({} live)",
            strategy, report.added, report.removed, report.kept, self.len()
        );
        report
    }

    /// Remove stale markers, add missing ones, leave the rest untouched
    fn reconcile<L>(&mut self, layer: &mut L, filtered: &[Attraction]) -> SyncReport
    where
        L: MarkerLayer<Handle = H>,
    {
        let wanted: BTreeSet<u32> = filtered.iter().map(|a| a.id).collect();
        let stale: Vec<u32> = self
            .markers
            .keys()
            .filter(|id| !wanted.contains(id))
            .copied()
            .collect();

        let mut report = SyncReport::default();
        for id in stale {
            if let Some(handle) = self.markers.remove(&id) {
                layer.remove(handle);
                report.removed += 1;
            }
        }

        for attraction in filtered {
            if self.markers.contains_key(&attraction.id) {
                report.kept += 1;
                continue;
            }
            let handle = layer.add(attraction, category::style_for(&attraction.category));
            self.markers.insert(attraction.id, handle);
            report.added += 1;
        }
        report
    }

    /// Clear everything and recreate one marker per attraction
    fn rebuild<L>(&mut self, layer: &mut L, filtered: &[Attraction]) -> SyncReport
    where
        L: MarkerLayer<Handle = H>,
    {
        let removed = self.markers.len();
        self.markers.clear();
        layer.clear();
        for attraction in filtered {
            let handle = layer.add(attraction, category::style_for(&attraction.category));
            self.markers.insert(attraction.id, handle);
        }
        SyncReport {
            added: self.markers.len(),
            removed,
            kept: 0,
        }
    }
}

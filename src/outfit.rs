//! Three-slot outfit state
//!
//! Holds the per-slot colors and the last analysis as an explicit value.
//! Every transition consumes the current state and returns the next one, so
//! the presentation layer owns exactly one `Outfit` and replaces it after
//! each action.
//!
//! Sampling a photo can be slow, so uploads go through [`UploadTicket`]s:
//! `begin_upload` hands out a ticket, `complete_upload` applies the sampled
//! color only if that ticket is still the newest one for its slot. A later
//! upload to the same slot, or a `reset`, makes older tickets stale.

use serde::Serialize;
use tracing::{debug, info};

use crate::color::{HarmonyReport, HarmonyScorer, HsvColor};
use crate::constants::SLOT_COUNT;
use crate::{HarmonyError, Result};

/// Handle for one pending slot upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    slot: usize,
    sequence: u64,
    generation: u64,
}

impl UploadTicket {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Explicit outfit state: three garment slots and the latest analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outfit {
    slots: [Option<HsvColor>; SLOT_COUNT],
    report: Option<HarmonyReport>,
    #[serde(skip)]
    latest_ticket: [u64; SLOT_COUNT],
    #[serde(skip)]
    generation: u64,
}

impl Outfit {
    /// Empty outfit: no slots filled, no analysis
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pending upload for `slot`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `slot` is not 0, 1 or 2
    pub fn begin_upload(mut self, slot: usize) -> Result<(Self, UploadTicket)> {
        check_slot(slot)?;
        self.latest_ticket[slot] += 1;
        let ticket = UploadTicket {
            slot,
            sequence: self.latest_ticket[slot],
            generation: self.generation,
        };
        Ok((self, ticket))
    }

    /// Apply a sampled color if `ticket` is still current
    ///
    /// Stale tickets (superseded by a newer upload to the same slot, or issued
    /// before a reset) leave the state unchanged. The stored analysis is not
    /// recomputed; call [`Outfit::analyze`] again.
    pub fn complete_upload(mut self, ticket: UploadTicket, color: HsvColor) -> Self {
        let current = ticket.generation == self.generation
            && ticket.sequence == self.latest_ticket[ticket.slot];
        if !current {
            debug!(slot = ticket.slot, sequence = ticket.sequence, "discarding stale upload");
            return self;
        }

        debug!(slot = ticket.slot, h = color.h, s = color.s, v = color.v, "slot filled");
        self.slots[ticket.slot] = Some(color);
        self
    }

    /// Fill a slot immediately
    pub fn fill(self, slot: usize, color: HsvColor) -> Result<Self> {
        let (outfit, ticket) = self.begin_upload(slot)?;
        Ok(outfit.complete_upload(ticket, color))
    }

    /// Score the outfit once all three slots are filled; otherwise a no-op
    pub fn analyze(mut self) -> Self {
        match self.colors() {
            Some(colors) => {
                let report = HarmonyScorer::new().evaluate(&colors);
                info!(score = report.score, verdict = %report.verdict, "outfit analyzed");
                self.report = Some(report);
            }
            None => debug!(filled = self.filled_count(), "analyze skipped, outfit incomplete"),
        }
        self
    }

    /// Clear every slot and the analysis
    ///
    /// Uploads still in flight from before the reset are discarded when they
    /// complete.
    pub fn reset(self) -> Self {
        debug!(generation = self.generation + 1, "outfit reset");
        Self {
            generation: self.generation + 1,
            ..Self::default()
        }
    }

    /// All three colors, or `None` while any slot is empty
    pub fn colors(&self) -> Option<[HsvColor; SLOT_COUNT]> {
        let [a, b, c] = self.slots;
        Some([a?, b?, c?])
    }

    pub fn slot(&self, slot: usize) -> Option<HsvColor> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == SLOT_COUNT
    }

    /// Latest analysis, if `analyze` has run on a complete outfit
    pub fn report(&self) -> Option<&HarmonyReport> {
        self.report.as_ref()
    }
}

fn check_slot(slot: usize) -> Result<()> {
    if slot >= SLOT_COUNT {
        return Err(HarmonyError::invalid_parameter("slot", slot));
    }
    Ok(())
}

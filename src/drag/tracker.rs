//! Per-player drag slots and contact routing.
//!
//! Each player has one slot: `Idle` (empty), `Dragging` or `Returning`.
//! Both slots can be live at once. Touch contacts are pinned to the player
//! that picked up with them, so a finger that drifts across the midpoint
//! keeps driving its own drag. Mouse input is re-resolved per event.

use rustc_hash::FxHashMap;

use super::state::{ContactId, DragState};
use crate::core::{PlayerId, PlayerMap, Timestamp};
use crate::error::PickupRejected;
use crate::tiles::TileId;
use crate::zones::{owner_at, LayoutProvider, Point};

/// Drag slots for both players plus the contact → player pins.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    slots: PlayerMap<Option<DragState>>,
    contacts: FxHashMap<ContactId, PlayerId>,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A player's live drag, if any.
    #[must_use]
    pub fn slot(&self, player: PlayerId) -> Option<&DragState> {
        self.slots[player].as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self, player: PlayerId) -> bool {
        self.slots[player].is_some()
    }

    /// Player whose drag holds `tile`, returning drags included.
    #[must_use]
    pub fn holder_of(&self, tile: TileId) -> Option<PlayerId> {
        PlayerId::all().find(|&p| self.slot(p).is_some_and(|d| d.tile_id == tile))
    }

    /// Player a contact is pinned to.
    #[must_use]
    pub fn pinned(&self, contact: ContactId) -> Option<PlayerId> {
        self.contacts.get(&contact).copied()
    }

    /// Owner of a press: a pinned contact keeps its player, anything else
    /// goes to whoever's half the press lands in.
    #[must_use]
    pub fn route_press(
        &self,
        position: Point,
        contact: Option<ContactId>,
        layout: &impl LayoutProvider,
    ) -> PlayerId {
        contact
            .and_then(|c| self.pinned(c))
            .unwrap_or_else(|| owner_at(position, layout))
    }

    /// Owner of a move or release.
    ///
    /// Like `route_press`, except that a mouse event landing in a half with
    /// no mouse drag goes to the other player's mouse drag: a mouse has one
    /// contact, so that drag is the only one it can be moving.
    #[must_use]
    pub fn route(&self, position: Point, contact: Option<ContactId>, layout: &impl LayoutProvider) -> PlayerId {
        let owner = self.route_press(position, contact, layout);
        if contact.is_none() && !self.accepts(owner, None) && self.accepts(owner.other(), None) {
            return owner.other();
        }
        owner
    }

    /// Whether `player` has a drag driven by `contact`.
    #[must_use]
    pub fn accepts(&self, player: PlayerId, contact: Option<ContactId>) -> bool {
        self.slot(player).is_some_and(|d| d.accepts(contact))
    }

    /// Slot-level pickup checks: one drag per player, one player per tile.
    pub fn check_pickup(&self, player: PlayerId, tile: TileId) -> Result<(), PickupRejected> {
        if self.is_dragging(player) {
            return Err(PickupRejected::AlreadyDragging(player));
        }
        match self.holder_of(tile) {
            Some(holder) => Err(PickupRejected::TileContested { tile, holder }),
            None => Ok(()),
        }
    }

    /// Occupy `player`'s slot, pinning the drag's contact to them.
    pub fn begin(&mut self, player: PlayerId, drag: DragState) {
        if let Some(contact) = drag.contact {
            self.contacts.insert(contact, player);
        }
        self.slots[player] = Some(drag);
    }

    /// Move `player`'s drag if `contact` drives it.
    pub fn move_to(&mut self, player: PlayerId, contact: Option<ContactId>, position: Point) -> bool {
        match self.slots[player].as_mut() {
            Some(drag) if drag.accepts(contact) => drag.move_to(position),
            _ => false,
        }
    }

    /// Mutable access to `player`'s drag if `contact` drives it.
    pub fn driven_by(&mut self, player: PlayerId, contact: Option<ContactId>) -> Option<&mut DragState> {
        self.slots[player].as_mut().filter(|d| d.accepts(contact))
    }

    /// Empty `player`'s slot.
    pub fn take(&mut self, player: PlayerId) -> Option<DragState> {
        self.slots[player].take()
    }

    /// Forget a contact once it lifts.
    pub fn unpin(&mut self, contact: ContactId) -> Option<PlayerId> {
        self.contacts.remove(&contact)
    }

    /// Clear every returning drag whose glide is over, handing back the
    /// cleared drags.
    pub fn settle_returns(&mut self, now: Timestamp) -> Vec<(PlayerId, DragState)> {
        let mut settled = Vec::new();
        for (player, slot) in self.slots.iter_mut() {
            if slot.as_ref().is_some_and(|d| d.return_finished(now)) {
                if let Some(drag) = slot.take() {
                    settled.push((player, drag));
                }
            }
        }
        settled
    }

    /// Drop every drag and pin.
    pub fn clear(&mut self) {
        self.slots = PlayerMap::with_default();
        self.contacts.clear();
    }
}

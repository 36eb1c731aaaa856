//! Inventory admin state machine
//!
//! Owns everything the inventory panel shows: the form draft, the last
//! fetched snapshot and the search text. Store calls go through
//! [`InventoryService`]; this type only decides what to send and how the
//! outcome changes local state.
//!
//! Store calls are split into `begin_*` / `finish_*` / `apply_*` steps so the
//! state is only borrowed between awaits, never across one. The async
//! workflows at the bottom chain those steps through an [`AdminHandle`].
//!
//! Failure policy: a failed store call leaves the draft, the edit target and
//! the snapshot exactly as they were. The error has already been logged by
//! the service and is not surfaced any further.

use gemdesk_domain::{
    filter_items, InventoryItem, ItemData, ItemDraft, ItemField, ItemId, SaveMode,
};

use crate::application::services::{InventoryService, SaveRequest};

/// Identifies one issued fetch; newer tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryAdmin {
    draft: ItemDraft,
    items: Vec<InventoryItem>,
    search: String,
    save_in_flight: bool,
    issued_fetches: u64,
    applied_fetch: u64,
}

impl InventoryAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Form state
    // =========================================================================

    pub fn draft(&self) -> &ItemData {
        self.draft.data()
    }

    pub fn field(&self, field: ItemField) -> &str {
        self.draft.get(field)
    }

    pub fn editing_id(&self) -> Option<&ItemId> {
        self.draft.editing_id()
    }

    pub fn mode(&self) -> SaveMode {
        self.draft.mode()
    }

    pub fn set_field(&mut self, field: ItemField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn start_edit(&mut self, item: &InventoryItem) {
        tracing::debug!(item_id = %item.id, "Editing inventory item");
        self.draft.start_edit(item);
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    // =========================================================================
    // List state
    // =========================================================================

    /// Last fetched snapshot, unfiltered
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Rows to render: the snapshot filtered by the current search text.
    pub fn visible_items(&self) -> Vec<&InventoryItem> {
        filter_items(&self.items, &self.search)
    }

    // =========================================================================
    // Save
    // =========================================================================

    pub fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    /// Resolve the draft into a store request and mark a save as pending.
    ///
    /// Returns `None` while another save is still pending.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.save_in_flight {
            tracing::debug!("Save already in flight, ignoring submit");
            return None;
        }
        self.save_in_flight = true;

        let data = self.draft.data().clone();
        Some(match self.draft.mode() {
            SaveMode::Creating => SaveRequest::Create(data),
            SaveMode::Editing(id) => SaveRequest::Update { id, data },
        })
    }

    /// Record the outcome of the pending save.
    ///
    /// On success the draft is cleared and the edit target dropped, which
    /// returns the form to creating mode. On failure nothing changes.
    pub fn finish_save(&mut self, succeeded: bool) {
        self.save_in_flight = false;
        if succeeded {
            self.draft.reset();
        }
    }

    // =========================================================================
    // Fetch
    // =========================================================================

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_fetches += 1;
        FetchTicket(self.issued_fetches)
    }

    /// Replace the snapshot with the result of the fetch `ticket`.
    ///
    /// A snapshot older than the one already applied is discarded, so when
    /// fetches race the most recently issued one wins. Returns whether the
    /// snapshot was applied.
    pub fn apply_snapshot(&mut self, ticket: FetchTicket, items: Vec<InventoryItem>) -> bool {
        if ticket.0 <= self.applied_fetch {
            tracing::debug!(
                ticket = ticket.0,
                applied = self.applied_fetch,
                "Discarding stale inventory snapshot"
            );
            return false;
        }
        self.applied_fetch = ticket.0;
        self.items = items;
        true
    }
}

/// Anything holding an [`InventoryAdmin`] that can lend it out mutably for a
/// short, synchronous step.
///
/// The async workflows below never hold the borrow across an await, so the
/// UI can implement this for its reactive signal while tests use a plain
/// `InventoryAdmin`.
pub trait AdminHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut InventoryAdmin) -> R) -> R;
}

impl AdminHandle for InventoryAdmin {
    fn update<R>(&mut self, f: impl FnOnce(&mut InventoryAdmin) -> R) -> R {
        f(self)
    }
}

/// Holds the pending-save flag for one submit.
///
/// If the submit future is dropped before the store answers (its task was
/// cancelled when the panel unmounted), the save is recorded as failed so the
/// flag does not stay set.
struct PendingSave<'a, H: AdminHandle> {
    admin: &'a mut H,
    settled: bool,
}

impl<'a, H: AdminHandle> PendingSave<'a, H> {
    fn new(admin: &'a mut H) -> Self {
        Self {
            admin,
            settled: false,
        }
    }

    fn settle(&mut self, succeeded: bool) {
        self.settled = true;
        self.admin.update(|a| a.finish_save(succeeded));
    }
}

impl<H: AdminHandle> Drop for PendingSave<'_, H> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("Submit cancelled before the store answered");
            self.admin.update(|a| a.finish_save(false));
        }
    }
}

/// Re-fetch the full collection. Returns whether the snapshot changed.
pub async fn refresh(admin: &mut impl AdminHandle, service: &InventoryService) -> bool {
    let ticket = admin.update(InventoryAdmin::begin_fetch);
    match service.list_items().await {
        Ok(items) => admin.update(|a| a.apply_snapshot(ticket, items)),
        Err(_) => false,
    }
}

/// Submit the draft, then re-fetch on success. Returns whether the save went
/// through.
pub async fn submit(admin: &mut impl AdminHandle, service: &InventoryService) -> bool {
    let Some(request) = admin.update(InventoryAdmin::begin_save) else {
        return false;
    };
    let succeeded = {
        let mut pending = PendingSave::new(&mut *admin);
        let succeeded = service.save(&request).await.is_ok();
        pending.settle(succeeded);
        succeeded
    };
    if succeeded {
        refresh(admin, service).await;
    }
    succeeded
}

/// Delete a record, then re-fetch on success.
pub async fn delete(
    admin: &mut impl AdminHandle,
    service: &InventoryService,
    id: &ItemId,
) -> bool {
    let succeeded = service.delete_item(id).await.is_ok();
    if succeeded {
        refresh(admin, service).await;
    }
    succeeded
}

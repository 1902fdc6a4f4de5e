// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem;

use airlock_once::OnceToken;

use crate::error::RegionError;
use crate::record::CommandRecord;
use crate::region::SharedRegion;
use crate::status::Status;

/// Where a [`Mailbox`] keeps its record, status slot and payload.
///
/// All offsets are in bytes from the start of the region.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MailboxLayout {
    /// Offset of the [`CommandRecord`].
    pub record_offset: usize,
    /// Offset of the `u32` status slot.
    pub status_offset: usize,
    /// Offset of the payload area.
    pub payload_offset: usize,
    /// Payload area size in bytes.
    pub payload_capacity: usize,
}

impl MailboxLayout {
    /// Bytes of region needed to hold this layout.
    pub fn region_len(&self) -> usize {
        let record_end = self.record_offset + mem::size_of::<CommandRecord>();
        let status_end = self.status_offset + mem::size_of::<Status>();
        let payload_end = self.payload_offset + self.payload_capacity;

        record_end.max(status_end).max(payload_end)
    }
}

impl Default for MailboxLayout {
    fn default() -> Self {
        Self {
            record_offset: 0,
            status_offset: 32,
            payload_offset: 64,
            payload_capacity: 448,
        }
    }
}

/// The producer's side of an exchange: a [`SharedRegion`] with a fixed
/// layout for one record, one status slot and one payload.
///
/// [`post`](Mailbox::post) plays the transport: it writes the payload,
/// resets the status slot to `Waiting`, writes a record pointing at both
/// and returns the consumer's single-shot token for the record. Everything
/// stays writable afterwards through the `overwrite_*` methods, which is
/// what a hostile producer would do.
#[derive(Debug)]
pub struct Mailbox {
    region: SharedRegion,
    layout: MailboxLayout,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new(MailboxLayout::default())
    }
}

impl Mailbox {
    /// Creates a zeroed mailbox with the given layout.
    pub fn new(layout: MailboxLayout) -> Self {
        Self {
            region: SharedRegion::new(layout.region_len()),
            layout,
        }
    }

    /// The backing region, also usable as the validator's address oracle.
    #[inline]
    pub fn region(&self) -> &SharedRegion {
        &self.region
    }

    /// The layout this mailbox was created with.
    #[inline]
    pub fn layout(&self) -> MailboxLayout {
        self.layout
    }

    /// Address of the payload area.
    pub fn payload_ptr(&self) -> *const u8 {
        self.region.base().wrapping_add(self.layout.payload_offset)
    }

    /// Address of the status slot.
    pub fn status_ptr(&self) -> *mut Status {
        self.region
            .base()
            .wrapping_add(self.layout.status_offset)
            .cast::<Status>()
    }

    /// Posts `payload` and returns the record token for the consumer.
    pub fn post(&self, payload: &[u8]) -> Result<OnceToken<'_, CommandRecord>, RegionError> {
        self.write_payload(payload)?;
        self.overwrite_status(Status::Waiting)?;

        let status = self.region.ptr_at::<Status>(self.layout.status_offset)?;
        let record = CommandRecord::new(self.payload_ptr(), payload.len(), status);

        self.post_record(record)
    }

    /// Posts an arbitrary record, pointers and all.
    pub fn post_record(
        &self,
        record: CommandRecord,
    ) -> Result<OnceToken<'_, CommandRecord>, RegionError> {
        self.region.post(self.layout.record_offset, record)
    }

    /// Rewrites the payload area in place.
    pub fn overwrite_payload(&self, payload: &[u8]) -> Result<(), RegionError> {
        self.write_payload(payload)
    }

    /// Rewrites the status slot.
    pub fn overwrite_status(&self, status: Status) -> Result<(), RegionError> {
        self.region
            .write_value::<u32>(self.layout.status_offset, status.as_raw())
            .map(|_| ())
    }

    /// Reads the status slot; `None` if it holds something that is not a
    /// [`Status`].
    pub fn status(&self) -> Option<Status> {
        self.region
            .read_value::<u32>(self.layout.status_offset)
            .ok()
            .and_then(Status::from_raw)
    }

    fn write_payload(&self, payload: &[u8]) -> Result<(), RegionError> {
        if payload.len() > self.layout.payload_capacity {
            return Err(RegionError::OutOfBounds {
                offset: self.layout.payload_offset,
                len: payload.len(),
                capacity: self.layout.payload_capacity,
            });
        }

        self.region.write_bytes(self.layout.payload_offset, payload)
    }
}

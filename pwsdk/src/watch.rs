// This file is part of Gear.
//
// Copyright (C) 2021-2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Waiting for the outcome of a submitted extrinsic.
//!
//! The transaction pool reports progress as a stream of statuses. Once the
//! extrinsic is included in a block its events tell whether the dispatch
//! succeeded. [`TxWatcher`] turns that stream into exactly one
//! [`TxOutcome`].

use crate::{
    events::{DispatchFailure, ExtrinsicEvent},
    result::{Error, Result, TxError, TxStatus as KhalaTxStatus},
};
use futures::prelude::*;
use std::pin::pin;
use subxt::{Metadata, tx::TxStatus};

/// How far the extrinsic has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxMilestone {
    /// Validated, broadcast or retracted; events are not known yet.
    Pending,
    /// Included in a best block.
    InBlock,
    /// Included in a finalized block.
    Finalized,
}

/// Progress notification of a watched extrinsic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxNotification {
    pub milestone: TxMilestone,
    pub events: Vec<ExtrinsicEvent>,
}

impl TxNotification {
    pub fn pending() -> Self {
        Self {
            milestone: TxMilestone::Pending,
            events: Vec::new(),
        }
    }

    pub fn in_block(events: Vec<ExtrinsicEvent>) -> Self {
        Self {
            milestone: TxMilestone::InBlock,
            events,
        }
    }

    pub fn finalized(events: Vec<ExtrinsicEvent>) -> Self {
        Self {
            milestone: TxMilestone::Finalized,
            events,
        }
    }

    /// Converts a transaction pool status, fetching the extrinsic events
    /// once it's in a block.
    ///
    /// Pool errors (`Error`, `Invalid`, `Dropped`) are returned as [`TxError`].
    pub async fn from_status(status: KhalaTxStatus, metadata: &Metadata) -> Result<Self> {
        log_status(&status);

        match status {
            TxStatus::InBestBlock(b) => Ok(Self::in_block(ExtrinsicEvent::decode_all(
                &b.fetch_events().await?,
                metadata,
            )?)),
            TxStatus::InFinalizedBlock(b) => Ok(Self::finalized(ExtrinsicEvent::decode_all(
                &b.fetch_events().await?,
                metadata,
            )?)),
            status => match TxError::from_status(status) {
                Some(err) => Err(err.into()),
                None => Ok(Self::pending()),
            },
        }
    }
}

/// Final result of an extrinsic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxOutcome {
    Success,
    Failure { reason: String },
}

impl TxOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Turns a failed outcome into [`TxError::ExtrinsicFailed`].
    pub fn into_result(self) -> Result<(), TxError> {
        match self {
            Self::Success => Ok(()),
            Self::Failure { reason } => Err(TxError::ExtrinsicFailed(reason)),
        }
    }
}

impl From<&DispatchFailure> for TxOutcome {
    fn from(failure: &DispatchFailure) -> Self {
        Self::Failure {
            reason: failure.to_string(),
        }
    }
}

/// Settles the outcome of one extrinsic from its notifications.
///
/// Settles at most once: after the first terminal event every further
/// event or notification is ignored.
#[derive(Debug, Default)]
pub struct TxWatcher {
    settled: bool,
}

impl TxWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Feeds a notification, returning the outcome if it settles the watch.
    pub fn observe(&mut self, notification: &TxNotification) -> Option<TxOutcome> {
        if self.settled || notification.milestone == TxMilestone::Pending {
            return None;
        }

        let outcome = notification.events.iter().find_map(|event| match event {
            ExtrinsicEvent::Success => Some(TxOutcome::Success),
            ExtrinsicEvent::Failed(failure) => {
                log::error!("\tError: {failure}");
                Some(failure.into())
            }
            ExtrinsicEvent::Other { .. } => None,
        })?;

        self.settled = true;
        Some(outcome)
    }
}

/// Waits for the outcome of an extrinsic from its notification stream.
///
/// Stream errors are returned as they come. Fails with
/// [`Error::SubscriptionDied`] if the stream ends before a terminal event.
pub async fn wait_for_outcome<E>(
    notifications: impl Stream<Item = Result<TxNotification, E>>,
) -> Result<TxOutcome>
where
    Error: From<E>,
{
    let mut notifications = pin!(notifications);
    let mut watcher = TxWatcher::new();

    while let Some(notification) = notifications.next().await.transpose()? {
        if let Some(outcome) = watcher.observe(&notification) {
            return Ok(outcome);
        }
    }

    Err(Error::SubscriptionDied)
}

/// Propagates log::info for given status.
pub(crate) fn log_status(status: &KhalaTxStatus) {
    match status {
        TxStatus::Validated => log::info!("\tStatus: Validated"),
        TxStatus::Broadcasted { num_peers } => log::info!("\tStatus: Broadcast( {num_peers} )"),
        TxStatus::NoLongerInBestBlock => log::info!("\tStatus: NoLongerInBestBlock"),
        TxStatus::InBestBlock(b) => log::info!(
            "\tStatus: InBestBlock( block hash: {:?}, extrinsic hash: {:?} )",
            b.block_hash(),
            b.extrinsic_hash()
        ),
        TxStatus::InFinalizedBlock(b) => log::info!(
            "\tStatus: Finalized( block hash: {:?}, extrinsic hash: {:?} )",
            b.block_hash(),
            b.extrinsic_hash()
        ),
        TxStatus::Error { message: e } => log::error!("\tStatus: Error( {e:?} )"),
        TxStatus::Dropped { message: e } => log::error!("\tStatus: Dropped( {e:?} )"),
        TxStatus::Invalid { message: e } => log::error!("\tStatus: Invalid( {e:?} )"),
    }
}

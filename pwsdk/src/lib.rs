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

//! Helpers for scripting PhalaWorld on the Khala network.
//!
//! `pwsdk` talks to a Khala node over WebSocket and covers what test and
//! operation scripts keep rewriting:
//!
//! - polling a condition until it holds or a deadline passes
//!   ([`check_until`]);
//! - submitting an extrinsic and waiting for its outcome, with module
//!   errors decoded as `section.method` ([`Signer::submit_and_watch`]);
//! - PhalaWorld lookups: collection ids, NFT transferability, feeding
//!   statistics, account nonces;
//! - PHA unit conversion and overlord whitelist signatures.
//!
//! # Example
//!
//! ```ignore
//! use pwsdk::{Api, TxOutcome};
//!
//! let signer = Api::new(None).await?.signer("//Alice", None)?;
//! let nonce = signer.nonce().await?;
//!
//! let outcome = signer
//!     .transfer_keep_alive(&bob, pwsdk::token(10)?)
//!     .await?;
//! assert_eq!(outcome, TxOutcome::Success);
//!
//! signer.wait_for_nonce_increment(signer.account_id(), nonce).await?;
//! ```

pub use crate::{
    api::Api,
    config::{DEFAULT_KHALA_ENDPOINT, DEFAULT_TIMEOUT, KhalaConfig, POLL_INTERVAL},
    events::{DispatchFailure, ExtrinsicEvent, extract_tx_result},
    nft::{CollectionId, CollectionKind, EraId, FoodStat, NftId, find_transferable, top_fed},
    poll::{PollOutcome, check_until, poll_until, poll_until_with},
    result::{Error, Result, TxError},
    signer::{
        OverlordMessage, PairSigner, Purpose, Signer, sign_overlord_message, sign_whitelist_message,
    },
    units::{TOKEN_DECIMALS, UNIT, format_balance, token},
    watch::{TxMilestone, TxNotification, TxOutcome, TxWatcher, wait_for_outcome},
};
pub use subxt::dynamic::Value;

mod api;
mod config;
mod events;
mod nft;
mod poll;
pub mod result;
mod signer;
mod storage;
mod units;
mod watch;

/// Re-exports of the crates `pwsdk` is built on.
pub mod ext {
    pub use sp_core;
    pub use subxt;
}

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

//! pwsdk results
use crate::config::KhalaConfig;
use subxt::tx::TxStatus as SubxtTxStatus;

pub(crate) type TxStatus = SubxtTxStatus<KhalaConfig, subxt::OnlineClient<KhalaConfig>>;

/// Transaction Errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxError {
    #[error("Transaction Error( {0} )")]
    Error(String),
    #[error("Transaction Invalid( {0} )")]
    Invalid(String),
    #[error("Transaction Dropped( {0} )")]
    Dropped(String),
    #[error("Extrinsic Failed( {0} )")]
    ExtrinsicFailed(String),
}

impl TxError {
    /// Maps the failure statuses of the transaction pool, `None` for the rest.
    pub(crate) fn from_status(status: TxStatus) -> Option<Self> {
        match status {
            SubxtTxStatus::Error { message } => Some(Self::Error(message)),
            SubxtTxStatus::Invalid { message } => Some(Self::Invalid(message)),
            SubxtTxStatus::Dropped { message } => Some(Self::Dropped(message)),
            _ => None,
        }
    }
}

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid secret key")]
    InvalidSecret,
    #[error("Invalid rpc URL.")]
    InvalidUrl,
    #[error("Connecting to the node timed out.")]
    ConnectTimeout,
    #[error("Funds overcame u128::MAX")]
    BalanceOverflow,
    #[error("Unexpected shape of {0}")]
    UnexpectedValue(&'static str),
    #[error("Transaction status subscription ended before a terminal event")]
    SubscriptionDied,
    #[error(transparent)]
    Subxt(#[from] Box<subxt::Error>),
    #[error(transparent)]
    Tx(#[from] TxError),
}

impl From<subxt::Error> for Error {
    fn from(value: subxt::Error) -> Self {
        Self::Subxt(Box::new(value))
    }
}

impl From<subxt::ext::scale_decode::Error> for Error {
    fn from(value: subxt::ext::scale_decode::Error) -> Self {
        subxt::Error::from(value).into()
    }
}

impl From<subxt::error::MetadataError> for Error {
    fn from(value: subxt::error::MetadataError) -> Self {
        subxt::Error::from(value).into()
    }
}

/// Custom Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

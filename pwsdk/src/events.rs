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

//! Typed view over the events emitted by an extrinsic.

use crate::{config::KhalaConfig, result::Result};
use std::fmt;
use subxt::{Metadata, blocks::ExtrinsicEvents, error::DispatchError, events::EventDetails};

const SYSTEM: &str = "System";
const EXTRINSIC_SUCCESS: &str = "ExtrinsicSuccess";
const EXTRINSIC_FAILED: &str = "ExtrinsicFailed";

/// Reason of an `ExtrinsicFailed` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchFailure {
    /// Error raised by a pallet, resolved through the runtime metadata.
    Module { section: String, method: String },
    /// Any other dispatch error, kept in its textual form.
    Other(String),
}

impl fmt::Display for DispatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module { section, method } => write!(f, "{section}.{method}"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

impl DispatchFailure {
    /// Decodes the fields of `System::ExtrinsicFailed`, the dispatch error
    /// being the first one.
    pub fn decode(fields: &[u8], metadata: &Metadata) -> Result<Self> {
        Ok(DispatchError::decode_from(fields, metadata.clone())?.into())
    }
}

impl From<DispatchError> for DispatchFailure {
    fn from(err: DispatchError) -> Self {
        if let DispatchError::Module(ref module) = err {
            if let Ok(details) = module.details() {
                return Self::Module {
                    section: details.pallet.name().to_string(),
                    method: details.variant.name.clone(),
                };
            }
        }

        Self::Other(err.to_string())
    }
}

/// Event of an extrinsic, reduced to what decides its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtrinsicEvent {
    /// `System::ExtrinsicSuccess`
    Success,
    /// `System::ExtrinsicFailed`
    Failed(DispatchFailure),
    /// Any other event.
    Other { pallet: String, variant: String },
}

impl ExtrinsicEvent {
    /// Decodes an event, resolving module errors with `metadata`.
    pub fn decode(event: &EventDetails<KhalaConfig>, metadata: &Metadata) -> Result<Self> {
        Ok(match (event.pallet_name(), event.variant_name()) {
            (SYSTEM, EXTRINSIC_SUCCESS) => Self::Success,
            (SYSTEM, EXTRINSIC_FAILED) => {
                Self::Failed(DispatchFailure::decode(event.field_bytes(), metadata)?)
            }
            (pallet, variant) => Self::Other {
                pallet: pallet.into(),
                variant: variant.into(),
            },
        })
    }

    /// Decodes all events of an extrinsic.
    pub fn decode_all(
        events: &ExtrinsicEvents<KhalaConfig>,
        metadata: &Metadata,
    ) -> Result<Vec<Self>> {
        events
            .iter()
            .map(|event| Self::decode(&event?, metadata))
            .collect()
    }

    /// Returns the failure if this is an `ExtrinsicFailed` event.
    pub fn failure(&self) -> Option<&DispatchFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Checks whether the extrinsic events report success.
pub fn extract_tx_result<'a>(events: impl IntoIterator<Item = &'a ExtrinsicEvent>) -> bool {
    events
        .into_iter()
        .any(|event| matches!(event, ExtrinsicEvent::Success))
}

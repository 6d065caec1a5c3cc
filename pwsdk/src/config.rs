// This file is part of Gear.
//
// Copyright (C) 2025 Gear Technologies Inc.
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

//! Chain configuration and client defaults.

use std::time::Duration;

/// Khala runs the stock Polkadot extrinsic format.
pub type KhalaConfig = subxt::PolkadotConfig;

/// Public Khala RPC endpoint used when no URI is given.
pub const DEFAULT_KHALA_ENDPOINT: &str = "wss://khala-api.phala.network:443/ws";

/// Connection timeout used by [`Api::new`](crate::Api::new).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Fixed delay between two evaluations of a polled condition.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

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

use pwsdk::{Api, Signer};
use std::env;

const LOCAL_NODE: &str = "ws://127.0.0.1:9944";

/// Connects to the dev node at `$KHALA_WS` (local node by default) as Alice.
pub async fn dev_signer() -> Signer {
    let _ = env_logger::builder().is_test(true).try_init();

    let uri = env::var("KHALA_WS").unwrap_or_else(|_| LOCAL_NODE.into());
    Api::new(uri.as_str())
        .await
        .expect("Failed to connect: Maybe the dev node isn't running?")
        .signer("//Alice", None)
        .expect("Infallible")
}

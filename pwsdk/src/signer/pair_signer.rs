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

//! [`subxt::tx::Signer`] backed by an `sp-core` sr25519 pair.

use crate::config::KhalaConfig;
use sp_core::{Pair as _, sr25519::Pair};
use subxt::{
    tx::Signer,
    utils::{AccountId32, MultiAddress, MultiSignature},
};

/// Signs extrinsics with an sr25519 key pair.
#[derive(Clone)]
pub struct PairSigner {
    account_id: AccountId32,
    pair: Pair,
}

impl PairSigner {
    pub fn new(pair: Pair) -> Self {
        Self {
            account_id: AccountId32(pair.public().0),
            pair,
        }
    }

    pub fn account_id(&self) -> &AccountId32 {
        &self.account_id
    }

    pub fn pair(&self) -> &Pair {
        &self.pair
    }
}

impl Signer<KhalaConfig> for PairSigner {
    fn account_id(&self) -> AccountId32 {
        self.account_id.clone()
    }

    fn address(&self) -> MultiAddress<AccountId32, ()> {
        self.account_id.clone().into()
    }

    fn sign(&self, signer_payload: &[u8]) -> MultiSignature {
        MultiSignature::Sr25519(self.pair.sign(signer_payload).0)
    }
}

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

//! Khala api with signer

use crate::{
    Api,
    result::{Error, Result},
};
use core::ops::Deref;
pub use pair_signer::PairSigner;
use sp_core::{Pair as _, sr25519::Pair};
use subxt::utils::AccountId32;
pub use whitelist::{OverlordMessage, Purpose, sign_overlord_message, sign_whitelist_message};

mod pair_signer;
mod utils;
mod whitelist;

/// Signer representation that provides access to Khala API.
///
/// Submits extrinsics with [`submit_and_watch`](Signer::submit_and_watch)
/// and signs whitelist messages when the key belongs to the overlord.
#[derive(Clone)]
pub struct Signer {
    api: Api,
    signer: PairSigner,
}

impl Signer {
    /// New signer api.
    pub fn new(api: Api, suri: &str, passwd: Option<&str>) -> Result<Self> {
        Ok(Self {
            api,
            signer: PairSigner::new(load_sr25519_pair(suri, passwd)?),
        })
    }

    /// Change inner signer.
    pub fn change(mut self, suri: &str, passwd: Option<&str>) -> Result<Self> {
        self.signer = PairSigner::new(load_sr25519_pair(suri, passwd)?);
        Ok(self)
    }

    /// Get address of the current signer.
    pub fn address(&self) -> String {
        self.account_id().to_string()
    }

    /// Get account id of the current signer.
    pub fn account_id(&self) -> &AccountId32 {
        self.signer.account_id()
    }

    /// Get reference to inner unsigned api.
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Get the extrinsic signer of the current key.
    pub fn signer(&self) -> &PairSigner {
        &self.signer
    }

    /// Get the nonce of the current signer.
    pub async fn nonce(&self) -> Result<u32> {
        self.api.account_nonce(self.account_id()).await
    }

    /// Signs a whitelist message for `account`, using the current signer
    /// as the overlord.
    pub fn sign_whitelist(&self, account: &AccountId32) -> sp_core::sr25519::Signature {
        sign_whitelist_message(self.signer.pair(), account)
    }
}

fn load_sr25519_pair(suri: &str, passwd: Option<&str>) -> Result<Pair> {
    Pair::from_string(suri, passwd).map_err(|_| Error::InvalidSecret)
}

impl Deref for Signer {
    type Target = Api;

    fn deref(&self) -> &Api {
        &self.api
    }
}

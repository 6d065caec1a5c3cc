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

//! Khala storage apis
use crate::{
    Api,
    nft::{CollectionId, CollectionKind, EraId, FoodStat, NftId},
    poll::check_value_until,
    result::{Error, Result},
};
use futures::TryStreamExt;
use std::time::Duration;
use subxt::{
    dynamic::{self, DecodedValueThunk, Value},
    ext::scale_value::At,
    utils::AccountId32,
};

impl Api {
    /// Shortcut for fetching an optional storage entry at the latest block.
    pub async fn fetch_storage(
        &self,
        pallet: &str,
        entry: &str,
        keys: Vec<Value>,
    ) -> Result<Option<DecodedValueThunk>> {
        let address = dynamic::storage(pallet, entry, keys);

        Ok(self.storage().at_latest().await?.fetch(&address).await?)
    }
}

// frame-system
impl Api {
    /// Get the nonce of the account.
    pub async fn account_nonce(&self, account: &AccountId32) -> Result<u32> {
        let info = self
            .fetch_storage("System", "Account", vec![Value::from_bytes(account)])
            .await?;

        // Accounts without any state have the default info.
        let Some(info) = info else {
            return Ok(0);
        };

        info.to_value()?
            .at("nonce")
            .and_then(|nonce| nonce.as_u128())
            .and_then(|nonce| u32::try_from(nonce).ok())
            .ok_or(Error::UnexpectedValue("System.Account"))
    }

    /// Waits until the nonce of the account becomes `observed + 1`.
    ///
    /// Polls without a deadline; see
    /// [`wait_for_nonce_increment_within`](Self::wait_for_nonce_increment_within)
    /// for a bounded wait.
    pub async fn wait_for_nonce_increment(
        &self,
        account: &AccountId32,
        observed: u32,
    ) -> Result<()> {
        self.poll_nonce(account, observed, None).await.map(|_| ())
    }

    /// Same as [`wait_for_nonce_increment`](Self::wait_for_nonce_increment),
    /// but returns `false` if the nonce hasn't moved within `timeout`.
    pub async fn wait_for_nonce_increment_within(
        &self,
        account: &AccountId32,
        observed: u32,
        timeout: Duration,
    ) -> Result<bool> {
        self.poll_nonce(account, observed, Some(timeout)).await
    }

    async fn poll_nonce(
        &self,
        account: &AccountId32,
        observed: u32,
        timeout: Option<Duration>,
    ) -> Result<bool> {
        let expected = observed.checked_add(1).ok_or(Error::UnexpectedValue("nonce"))?;

        check_value_until(expected, || self.account_nonce(account), timeout).await
    }
}

// pallet-pw-nft-sale, pallet-pw-incubation
impl Api {
    /// Get the id of the PhalaWorld collection of given kind.
    ///
    /// Returns `None` if the collection hasn't been created yet.
    pub async fn collection_id(&self, kind: CollectionKind) -> Result<Option<CollectionId>> {
        let (pallet, entry) = kind.storage_entry();

        self.fetch_storage(pallet, entry, vec![])
            .await?
            .map(|id| id.as_type::<CollectionId>())
            .transpose()
            .map_err(Into::into)
    }

    /// Get feeding statistics of all origin of shells fed during the era.
    ///
    /// Entries come in storage iteration order.
    pub async fn origin_of_shell_food_stats(&self, era: EraId) -> Result<Vec<FoodStat>> {
        let address = dynamic::storage(
            "PwIncubation",
            "OriginOfShellFoodStats",
            vec![Value::u128(era.into())],
        );

        let mut entries = self.storage().at_latest().await?.iter(address).await?;
        let mut stats = Vec::new();

        while let Some(kv) = entries.try_next().await? {
            let nft = kv
                .keys
                .last()
                .ok_or(Error::UnexpectedValue("OriginOfShellFoodStats key"))?;
            let id = |idx: usize| {
                nft.at(idx)
                    .and_then(|v| v.as_u128())
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or(Error::UnexpectedValue("OriginOfShellFoodStats key"))
            };

            stats.push(FoodStat {
                era,
                collection_id: id(0)?,
                nft_id: id(1)?,
                times_fed: kv.value.as_type::<u32>()?,
            });
        }

        Ok(stats)
    }
}

// pallet-rmrk-core
impl Api {
    /// Get the transferability of the NFT.
    ///
    /// Returns `None` if the NFT doesn't exist.
    pub async fn nft_transferable(
        &self,
        collection_id: CollectionId,
        nft_id: NftId,
    ) -> Result<Option<bool>> {
        let Some(info) = self
            .fetch_storage(
                "RmrkCore",
                "Nfts",
                vec![Value::u128(collection_id.into()), Value::u128(nft_id.into())],
            )
            .await?
        else {
            return Ok(None);
        };

        info.to_value()?
            .at("transferable")
            .and_then(|v| v.as_bool())
            .map(Some)
            .ok_or(Error::UnexpectedValue("RmrkCore.Nfts"))
    }
}

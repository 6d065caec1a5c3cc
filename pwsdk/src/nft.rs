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

//! PhalaWorld NFT helpers.

use crate::{Api, result::Result};
use std::{cmp::Reverse, future::Future, str::FromStr};

pub type CollectionId = u32;
pub type NftId = u32;
pub type EraId = u64;

/// PhalaWorld collections with a well-known id in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Spirit,
    OriginOfShell,
    Shell,
    ShellParts,
}

impl CollectionKind {
    /// Pallet and storage item holding the collection id.
    pub fn storage_entry(&self) -> (&'static str, &'static str) {
        match self {
            Self::Spirit => ("PwNftSale", "SpiritCollectionId"),
            Self::OriginOfShell => ("PwNftSale", "OriginOfShellCollectionId"),
            Self::Shell => ("PwIncubation", "ShellCollectionId"),
            Self::ShellParts => ("PwIncubation", "ShellPartsCollectionId"),
        }
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "spirit" => Ok(Self::Spirit),
            "originOfShell" => Ok(Self::OriginOfShell),
            "shell" => Ok(Self::Shell),
            "shellParts" => Ok(Self::ShellParts),
            _ => Err(format!("unknown collection kind `{label}`")),
        }
    }
}

/// How many times an origin of shell was fed during an era.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodStat {
    pub era: EraId,
    pub collection_id: CollectionId,
    pub nft_id: NftId,
    pub times_fed: u32,
}

/// Returns the `n` most fed entries, most fed first.
///
/// Entries fed equally often keep their relative order.
pub fn top_fed(mut stats: Vec<FoodStat>, n: usize) -> Vec<FoodStat> {
    stats.sort_by_key(|stat| Reverse(stat.times_fed));
    stats.truncate(n);
    stats
}

/// Returns the first candidate for which `transferable` yields `Some(true)`.
///
/// `transferable` yields `None` for NFTs that don't exist. Candidates after
/// the match aren't looked up.
pub async fn find_transferable<F, Fut, E>(
    candidates: impl IntoIterator<Item = NftId>,
    mut transferable: F,
) -> Result<Option<NftId>, E>
where
    F: FnMut(NftId) -> Fut,
    Fut: Future<Output = Result<Option<bool>, E>>,
{
    for nft_id in candidates {
        if transferable(nft_id).await? == Some(true) {
            return Ok(Some(nft_id));
        }
    }

    Ok(None)
}

impl Api {
    /// Same as [`collection_id`](Self::collection_id), but takes the kind
    /// label (`spirit`, `originOfShell`, `shell` or `shellParts`).
    ///
    /// Unknown labels yield `None`.
    pub async fn collection_id_by_label(&self, label: &str) -> Result<Option<CollectionId>> {
        match label.parse::<CollectionKind>() {
            Ok(kind) => self.collection_id(kind).await,
            Err(e) => {
                log::warn!("{e}");
                Ok(None)
            }
        }
    }

    /// Get the `n` most fed origin of shells of the era.
    pub async fn top_fed_entries(&self, era: EraId, n: usize) -> Result<Vec<FoodStat>> {
        Ok(top_fed(self.origin_of_shell_food_stats(era).await?, n))
    }

    /// Find the first transferable NFT of the collection among `candidates`.
    pub async fn find_transferable_nft(
        &self,
        collection_id: CollectionId,
        candidates: impl IntoIterator<Item = NftId>,
    ) -> Result<Option<NftId>> {
        find_transferable(candidates, |nft_id| {
            self.nft_transferable(collection_id, nft_id)
        })
        .await
    }
}

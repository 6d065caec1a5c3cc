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

//! Utils

use super::Signer;
use crate::{
    result::{Error, Result},
    watch::{TxNotification, TxOutcome, wait_for_outcome},
};
use colored::Colorize;
use futures::prelude::*;
use subxt::{dynamic::Value, ext::scale_value::Composite, tx::DynamicPayload};

impl Signer {
    /// Submits the extrinsic and waits until it's included in a block.
    ///
    /// Returns the outcome decoded from the extrinsic events. Submission
    /// errors are returned right away and never retried.
    pub async fn submit_and_watch(&self, tx: &DynamicPayload) -> Result<TxOutcome> {
        let extrinsic = format!("{}::{}", tx.pallet_name(), tx.call_name())
            .magenta()
            .bold();
        log::info!("Pending {extrinsic} ...");

        let progress = self
            .api
            .tx()
            .sign_and_submit_then_watch_default(tx, &self.signer)
            .await?;

        let metadata = self.api.metadata();
        let notifications = progress.map_err(Error::from).and_then(move |status| {
            let metadata = metadata.clone();
            async move { TxNotification::from_status(status, &metadata).await }
        });

        let outcome = wait_for_outcome(notifications).await?;
        if outcome.is_success() {
            log::info!("Submitted {extrinsic} !");
        }

        Ok(outcome)
    }

    /// Run transaction.
    ///
    /// Builds a dynamic call of `pallet::call` with `fields` and submits it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use pwsdk::{Api, Value};
    ///
    /// let signer = Api::new(None).await?.signer("//Alice", None)?;
    /// let outcome = signer
    ///     .run_tx(
    ///         "PwNftSale",
    ///         "buy_prime_origin_of_shell",
    ///         vec![
    ///             Value::from_bytes(signature),
    ///             Value::unnamed_variant("Cyborg", []),
    ///             Value::unnamed_variant("Pandroid", []),
    ///         ],
    ///     )
    ///     .await?;
    /// ```
    pub async fn run_tx(
        &self,
        pallet: &str,
        call: &str,
        fields: impl Into<Composite<()>>,
    ) -> Result<TxOutcome> {
        let tx = subxt::dynamic::tx(pallet, call, fields.into());

        self.submit_and_watch(&tx).await
    }

    /// `pallet_balances::transfer_keep_alive`, amount in balance units.
    pub async fn transfer_keep_alive(
        &self,
        dest: &subxt::utils::AccountId32,
        value: u128,
    ) -> Result<TxOutcome> {
        self.run_tx(
            "Balances",
            "transfer_keep_alive",
            vec![
                Value::unnamed_variant("Id", [Value::from_bytes(dest)]),
                Value::u128(value),
            ],
        )
        .await
    }
}

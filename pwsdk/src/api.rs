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

use crate::{
    config::{DEFAULT_KHALA_ENDPOINT, DEFAULT_TIMEOUT, KhalaConfig},
    result::{Error, Result},
    signer::Signer,
};
use core::ops::{Deref, DerefMut};
use std::time::Duration;
use subxt::{OnlineClient, backend::rpc::RpcClient};

/// Khala api wrapper.
#[derive(Clone)]
pub struct Api {
    rpc: RpcClient,
    client: OnlineClient<KhalaConfig>,
}

impl Api {
    /// Create new API client.
    ///
    /// Connects to [`DEFAULT_KHALA_ENDPOINT`] if `uri` is `None`.
    pub async fn new(uri: impl Into<Option<&str>>) -> Result<Self> {
        Self::with_timeout(uri, DEFAULT_TIMEOUT).await
    }

    /// Create new API client, giving up on the connection after `timeout`.
    pub async fn with_timeout(uri: impl Into<Option<&str>>, timeout: Duration) -> Result<Self> {
        let uri: Option<&str> = uri.into();
        let rpc_client = Self::rpc_client(uri.unwrap_or(DEFAULT_KHALA_ENDPOINT), timeout).await?;

        Self::from_rpc_client(rpc_client).await
    }

    async fn rpc_client(uri: &str, timeout: Duration) -> Result<RpcClient> {
        if !uri.starts_with("ws://") && !uri.starts_with("wss://") {
            return Err(Error::InvalidUrl);
        }

        log::debug!("Connecting to {uri}");

        tokio::time::timeout(timeout, RpcClient::from_insecure_url(uri))
            .await
            .map_err(|_| Error::ConnectTimeout)?
            .map_err(Into::into)
    }

    /// Create new API client from an already connected [`RpcClient`].
    pub async fn from_rpc_client(rpc: RpcClient) -> Result<Self> {
        let client = OnlineClient::from_rpc_client(rpc.clone()).await?;

        Ok(Self { rpc, client })
    }

    /// New signer from api
    pub fn signer(self, suri: &str, passwd: Option<&str>) -> Result<Signer> {
        Signer::new(self, suri, passwd)
    }

    /// Get the underlying [`RpcClient`] instance.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

impl Deref for Api {
    type Target = OnlineClient<KhalaConfig>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for Api {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

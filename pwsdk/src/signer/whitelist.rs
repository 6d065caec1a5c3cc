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

//! Overlord-signed whitelist messages.

use parity_scale_codec::{Decode, Encode};
use sp_core::{
    Pair as _,
    sr25519::{Pair, Signature},
};
use subxt::utils::AccountId32;

/// Action the overlord authorizes the account for.
///
/// Variant order follows the runtime's `Purpose` enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub enum Purpose {
    RedeemSpirit,
    BuyPrimeOriginOfShells,
}

/// Message binding an account to a purpose.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct OverlordMessage {
    pub account: AccountId32,
    pub purpose: Purpose,
}

/// Signs the SCALE encoding of `message` with the overlord key.
pub fn sign_overlord_message(overlord: &Pair, message: &OverlordMessage) -> Signature {
    overlord.sign(&message.encode())
}

/// Signs a message allowing `account` to buy prime origin of shells.
pub fn sign_whitelist_message(overlord: &Pair, account: &AccountId32) -> Signature {
    let message = OverlordMessage {
        account: account.clone(),
        purpose: Purpose::BuyPrimeOriginOfShells,
    };
    log::debug!("Signing whitelist for {account}");

    sign_overlord_message(overlord, &message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_pair(suri: &str) -> Pair {
        Pair::from_string(suri, None).unwrap()
    }

    #[test]
    fn message_encoding() {
        let account = AccountId32([7; 32]);
        let message = OverlordMessage {
            account: account.clone(),
            purpose: Purpose::BuyPrimeOriginOfShells,
        };

        let encoded = message.encode();
        assert_eq!(encoded.len(), 33);
        assert_eq!(&encoded[..32], &[7; 32]);
        assert_eq!(encoded[32], 1);
    }

    #[test]
    fn whitelist_signature_verifies() {
        let overlord = dev_pair("//Alice");
        let account = AccountId32(dev_pair("//Bob").public().0);

        let signature = sign_whitelist_message(&overlord, &account);
        let message = OverlordMessage {
            account: account.clone(),
            purpose: Purpose::BuyPrimeOriginOfShells,
        };
        assert!(Pair::verify(
            &signature,
            message.encode(),
            &overlord.public()
        ));

        // Bound to the purpose.
        let redeem = OverlordMessage {
            account,
            purpose: Purpose::RedeemSpirit,
        };
        assert!(!Pair::verify(
            &signature,
            redeem.encode(),
            &overlord.public()
        ));
    }
}

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

//! Watching extrinsic outcomes from notification streams.

use futures::stream;
use pwsdk::{
    DispatchFailure, Error, ExtrinsicEvent, Result, TxError, TxNotification, TxOutcome,
    wait_for_outcome,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn other(pallet: &str, variant: &str) -> ExtrinsicEvent {
    ExtrinsicEvent::Other {
        pallet: pallet.into(),
        variant: variant.into(),
    }
}

fn module_error(section: &str, method: &str) -> ExtrinsicEvent {
    ExtrinsicEvent::Failed(DispatchFailure::Module {
        section: section.into(),
        method: method.into(),
    })
}

fn ok_stream(
    notifications: Vec<TxNotification>,
) -> impl futures::Stream<Item = Result<TxNotification>> {
    stream::iter(notifications.into_iter().map(Ok))
}

#[tokio::test]
async fn success_after_in_block() -> Result<()> {
    init_logger();

    let notifications = ok_stream(vec![
        TxNotification::pending(),
        // Events before inclusion are never looked at.
        TxNotification {
            milestone: pwsdk::TxMilestone::Pending,
            events: vec![module_error("System", "CallFiltered")],
        },
        TxNotification::in_block(vec![
            other("Balances", "Withdraw"),
            other("Balances", "Transfer"),
            ExtrinsicEvent::Success,
        ]),
    ]);

    assert_eq!(wait_for_outcome(notifications).await?, TxOutcome::Success);

    Ok(())
}

#[tokio::test]
async fn module_error_is_decoded() -> Result<()> {
    init_logger();

    let notifications = ok_stream(vec![
        TxNotification::pending(),
        TxNotification::in_block(vec![
            other("Balances", "Withdraw"),
            module_error("System", "InsufficientBalance"),
        ]),
    ]);

    let outcome = wait_for_outcome(notifications).await?;
    assert_eq!(
        outcome,
        TxOutcome::Failure {
            reason: "System.InsufficientBalance".into()
        }
    );
    assert_eq!(
        outcome.into_result(),
        Err(TxError::ExtrinsicFailed("System.InsufficientBalance".into()))
    );

    Ok(())
}

#[tokio::test]
async fn raw_error_is_kept() -> Result<()> {
    init_logger();

    let notifications = ok_stream(vec![TxNotification::finalized(vec![
        ExtrinsicEvent::Failed(DispatchFailure::Other("BadOrigin".into())),
    ])]);

    assert_eq!(
        wait_for_outcome(notifications).await?,
        TxOutcome::Failure {
            reason: "BadOrigin".into()
        }
    );

    Ok(())
}

#[tokio::test]
async fn first_terminal_event_settles() -> Result<()> {
    init_logger();

    let notifications = ok_stream(vec![
        TxNotification::in_block(vec![
            ExtrinsicEvent::Success,
            module_error("PwNftSale", "PrimeOriginOfShellPurchaseNotAvailable"),
        ]),
        TxNotification::finalized(vec![module_error("System", "CallFiltered")]),
    ]);

    assert_eq!(wait_for_outcome(notifications).await?, TxOutcome::Success);

    Ok(())
}

#[tokio::test]
async fn pool_error_rejects() {
    init_logger();

    let notifications = stream::iter(vec![
        Ok(TxNotification::pending()),
        Err(Error::Tx(TxError::Dropped("pool is full".into()))),
        Ok(TxNotification::in_block(vec![ExtrinsicEvent::Success])),
    ]);

    assert!(matches!(
        wait_for_outcome(notifications).await,
        Err(Error::Tx(TxError::Dropped(_)))
    ));
}

#[tokio::test]
async fn ended_subscription_fails() {
    init_logger();

    let notifications = ok_stream(vec![
        TxNotification::pending(),
        TxNotification::in_block(vec![other("Balances", "Deposit")]),
    ]);

    assert!(matches!(
        wait_for_outcome(notifications).await,
        Err(Error::SubscriptionDied)
    ));
}

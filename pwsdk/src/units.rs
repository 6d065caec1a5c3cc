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

//! PHA token units.

use crate::result::{Error, Result};

/// Decimals of the PHA token.
pub const TOKEN_DECIMALS: u32 = 12;

/// Balance of one PHA.
pub const UNIT: u128 = 10u128.pow(TOKEN_DECIMALS);

/// Converts whole tokens into balance units.
pub fn token(amount: u128) -> Result<u128> {
    amount.checked_mul(UNIT).ok_or(Error::BalanceOverflow)
}

/// Formats a balance as tokens, e.g. `1.5` for `1_500_000_000_000`.
pub fn format_balance(balance: u128) -> String {
    let (whole, fraction) = (balance / UNIT, balance % UNIT);

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{fraction:0width$}", width = TOKEN_DECIMALS as usize);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Conversions between atomic units (piconero) and human readable XMR.
//!
//! The wallet RPC speaks exclusively in atomic units. Floating point never
//! touches an amount here; parsing works on the decimal string directly.

use thiserror::Error;

/// Atomic units in one XMR.
pub const PICONERO_PER_XMR: u64 = 1_000_000_000_000;
/// Decimal places of one XMR.
pub const DECIMALS: usize = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be empty")]
    Empty,
    #[error("Invalid amount '{0}'")]
    Invalid(String),
    #[error("Amount '{0}' has more than 12 decimal places")]
    TooPrecise(String),
    #[error("Amount '{0}' does not fit into 64 bits of piconero")]
    Overflow(String),
}

/// Formats atomic units as XMR, dropping trailing zeros.
///
/// # Examples
/// ```
/// use monerowallet_common::utils::amount;
///
/// assert_eq!(amount::format_xmr(2_262_265_030_000), "2.26226503");
/// assert_eq!(amount::format_xmr(10_000_000_000), "0.01");
/// assert_eq!(amount::format_xmr(3 * amount::PICONERO_PER_XMR), "3");
/// ```
pub fn format_xmr(atomic: u64) -> String {
    let whole = atomic / PICONERO_PER_XMR;
    let frac = atomic % PICONERO_PER_XMR;

    if frac == 0 {
        return whole.to_string();
    }

    let frac_str = format!("{frac:0width$}", width = DECIMALS);
    format!("{whole}.{}", frac_str.trim_end_matches('0'))
}

/// Parses a decimal XMR string ("0.5", "12", ".25") into atomic units.
pub fn parse_xmr(input: &str) -> Result<u64, AmountError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole_str, frac_str) = s.split_once('.').unwrap_or((s, ""));

    if whole_str.is_empty() && frac_str.is_empty() {
        return Err(AmountError::Invalid(s.to_string()));
    }
    if !is_digits(whole_str) || !is_digits(frac_str) {
        return Err(AmountError::Invalid(s.to_string()));
    }
    if frac_str.len() > DECIMALS {
        return Err(AmountError::TooPrecise(s.to_string()));
    }

    let whole: u64 = if whole_str.is_empty() {
        0
    } else {
        whole_str
            .parse()
            .map_err(|_| AmountError::Overflow(s.to_string()))?
    };

    let frac: u64 = if frac_str.is_empty() {
        0
    } else {
        let padded = format!("{frac_str:0<width$}", width = DECIMALS);
        padded
            .parse()
            .map_err(|_| AmountError::Invalid(s.to_string()))?
    };

    whole
        .checked_mul(PICONERO_PER_XMR)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| AmountError::Overflow(s.to_string()))
}

/// Sums atomic amounts, clamping at `u64::MAX` instead of wrapping.
pub fn total<I: IntoIterator<Item = u64>>(amounts: I) -> u64 {
    amounts.into_iter().fold(0u64, u64::saturating_add)
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_zero() {
        assert_eq!(format_xmr(0), "0");
    }

    #[test]
    fn format_single_piconero() {
        assert_eq!(format_xmr(1), "0.000000000001");
    }

    #[test]
    fn parse_whole_and_fraction() {
        assert_eq!(parse_xmr("0.01"), Ok(10_000_000_000));
        assert_eq!(parse_xmr("12"), Ok(12 * PICONERO_PER_XMR));
        assert_eq!(parse_xmr(".5"), Ok(PICONERO_PER_XMR / 2));
        assert_eq!(parse_xmr("1."), Ok(PICONERO_PER_XMR));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_xmr(""), Err(AmountError::Empty));
        assert!(matches!(parse_xmr("."), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_xmr("-1"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_xmr("+1"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_xmr("1.2.3"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_xmr("1e5"), Err(AmountError::Invalid(_))));
    }

    #[test]
    fn parse_rejects_sub_piconero_precision() {
        assert!(matches!(
            parse_xmr("0.0000000000001"),
            Err(AmountError::TooPrecise(_))
        ));
    }

    #[test]
    fn total_saturates_instead_of_wrapping() {
        assert_eq!(total([1, 2, 3]), 6);
        assert_eq!(total([u64::MAX, 1]), u64::MAX);
        assert_eq!(total([u64::MAX / 2 + 1, u64::MAX / 2 + 1, 5]), u64::MAX);
        assert_eq!(total(std::iter::empty()), 0);
    }

    #[test]
    fn parse_detects_overflow() {
        assert!(matches!(
            parse_xmr("18446744073709552"),
            Err(AmountError::Overflow(_))
        ));
    }

    proptest! {
        #[test]
        fn formatted_amounts_parse_back(atomic in any::<u64>()) {
            prop_assert_eq!(parse_xmr(&format_xmr(atomic)), Ok(atomic));
        }
    }
}

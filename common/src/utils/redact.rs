// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Utilities for privacy-preserving output.
//!
//! Provides functions to mask wallet addresses, secret keys and transaction
//! identifiers while keeping enough of them visible to tell entries apart.

const MASK: &str = "XXXXX";

/// Redacts a Monero address, keeping the network prefix and the tail.
///
/// Standard addresses are 95 characters long, integrated ones 106. The first
/// 4 and last 4 characters stay visible; anything of 12 characters or less is
/// masked completely.
///
/// # Examples
/// ```
/// use monerowallet_common::utils::redact;
///
/// assert_eq!(redact::address("44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A"), "44AFXXXXXEP3A");
/// assert_eq!(redact::address("short"), "XXXXX");
/// ```
pub fn address(addr: &str) -> String {
    let len = addr.len();

    if len <= 12 || !addr.is_ascii() {
        return MASK.to_string();
    }

    format!("{}{MASK}{}", &addr[..4], &addr[len - 4..])
}

/// Redacts secret key material entirely.
///
/// Mnemonic seeds and private keys never leak a single character.
pub fn secret(_key: &str) -> String {
    MASK.to_string()
}

/// Redacts a hex identifier such as a transaction hash or payment id.
///
/// Keeps the first 4 characters. Identifiers of 8 characters or less are
/// masked completely.
///
/// # Examples
/// ```
/// use monerowallet_common::utils::redact;
///
/// assert_eq!(redact::identifier("fdfcfd993482b58b"), "fdfcXXXXX");
/// assert_eq!(redact::identifier("abcd"), "XXXXX");
/// ```
pub fn identifier(id: &str) -> String {
    if id.len() <= 8 || !id.is_ascii() {
        return MASK.to_string();
    }

    format!("{}{MASK}", &id[..4])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

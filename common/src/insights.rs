// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use rand::seq::SliceRandom;
use rand::{Rng, rng};

/// Operational guidance for wallet users.
const WALLET_TIPS: &[&str] = &[
    "Amounts are entered in XMR and sent as piconero",
    "Use 'balance --account N' to inspect a single account",
    "The '--redact' flag masks addresses and tx hashes",
    "Unlocked balance is what you can spend right now",
    "'transfer --do-not-relay' builds a tx without broadcasting",
    "Run 'store' before shutting down a long-lived wallet",
];

/// Monero facts and trivia.
const MONERO_TRIVIA: &[&str] = &[
    "One XMR is 10^12 piconero",
    "Outputs unlock after 10 blocks, roughly 20 minutes",
    "Ring signatures hide which output is being spent",
    "Stealth addresses give every payment a fresh one-time key",
    "Monero's tail emission pays 0.6 XMR per block forever",
];

/// Industry jokes and developer humor.
const DEV_HUMOR: &[&str] = &[
    "Not your keys, not your coins, not your bug reports",
    "The transfer works on my testnet though",
    "JSON-RPC: because REST needed more curly braces",
    "Waiting for confirmations is a form of meditation",
];

/// Generates a randomized list of UI messages.
///
/// Every slot in the resulting list has a 50% probability of being an
/// wallet tip and a 50% probability of being flavor text (trivia/humor),
/// provided both pools still have remaining items.
pub fn get_shuffled_insights() -> Vec<&'static str> {
    let mut rng = rng();

    let mut tips = WALLET_TIPS.to_vec();
    tips.shuffle(&mut rng);

    let mut flavor: Vec<&str> = MONERO_TRIVIA
        .iter()
        .chain(DEV_HUMOR.iter())
        .copied()
        .collect();
    flavor.shuffle(&mut rng);

    let total_len = tips.len() + flavor.len();
    let mut output = Vec::with_capacity(total_len);

    while !tips.is_empty() && !flavor.is_empty() {
        let pick_tip = rng.random_bool(0.5);
        if pick_tip {
            output.push(tips.remove(0));
        } else {
            output.push(flavor.remove(0));
        }
    }

    output.extend(tips);
    output.extend(flavor);
    output
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

    #[test]
    fn shuffled_insights_contain_every_entry_once() {
        let insights = get_shuffled_insights();
        let expected = WALLET_TIPS.len() + MONERO_TRIVIA.len() + DEV_HUMOR.len();
        assert_eq!(insights.len(), expected);

        for tip in WALLET_TIPS {
            assert_eq!(insights.iter().filter(|i| *i == tip).count(), 1);
        }
    }
}

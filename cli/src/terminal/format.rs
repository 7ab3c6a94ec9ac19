// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use monerowallet_common::models::account::{AccountSummary, SubaddressIndex};
use monerowallet_common::models::payment::Payment;
use monerowallet_common::models::transfer::{
    IncomingTransfer, Transfer, TransferKind, TransferResult,
};
use monerowallet_common::utils::{amount, redact};

use crate::terminal::colors;
use crate::terminal::print::Detail;

pub fn xmr(atomic: u64) -> ColoredString {
    format!("{} XMR", amount::format_xmr(atomic)).color(colors::AMOUNT)
}

pub fn xmr_locked(atomic: u64) -> ColoredString {
    format!("{} XMR", amount::format_xmr(atomic)).color(colors::AMOUNT_LOCKED)
}

pub fn address(addr: &str, redacted: bool) -> ColoredString {
    if redacted {
        redact::address(addr).color(colors::ADDRESS)
    } else {
        addr.color(colors::ADDRESS)
    }
}

pub fn hash(id: &str, redacted: bool) -> ColoredString {
    if redacted {
        redact::identifier(id).color(colors::HASH)
    } else {
        id.color(colors::HASH)
    }
}

pub fn secret(key: &str, redacted: bool) -> ColoredString {
    if redacted {
        redact::secret(key).color(colors::SECRET)
    } else {
        key.color(colors::SECRET)
    }
}

fn kind(kind: &TransferKind) -> ColoredString {
    let label = kind.to_string();
    match kind {
        TransferKind::In => label.green().bold(),
        TransferKind::Out => label.red().bold(),
        TransferKind::Pending | TransferKind::Pool => label.yellow().bold(),
        TransferKind::Failed => label.bright_red(),
        _ => label.color(colors::SECONDARY),
    }
}

fn subaddr(index: Option<SubaddressIndex>) -> Option<Detail> {
    index.map(|idx| ("Subaddress".to_string(), idx.to_string().color(colors::SECONDARY)))
}

fn non_empty(key: &str, value: &str, color: ColoredString) -> Option<Detail> {
    (!value.is_empty()).then(|| (key.to_string(), color))
}

pub fn transfer_details(t: &Transfer, redacted: bool) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Type".to_string(), kind(&t.kind)),
        ("Amount".to_string(), xmr(t.amount)),
        ("Fee".to_string(), xmr(t.fee)),
        ("Height".to_string(), t.height.to_string().normal()),
        (
            "Confirms".to_string(),
            t.confirmations.to_string().color(colors::TEXT_DEFAULT),
        ),
    ];

    details.extend(non_empty(
        "Payment ID",
        &t.payment_id,
        hash(&t.payment_id, redacted),
    ));
    details.extend(non_empty("Address", &t.address, address(&t.address, redacted)));
    details.extend(subaddr(t.subaddr_index));
    details.extend(non_empty("Note", &t.note, t.note.italic()));

    for dest in &t.destinations {
        let value = format!("{} → {}", xmr(dest.amount), address(&dest.address, redacted));
        details.push(("To".to_string(), value.normal()));
    }

    if t.unlock_time > 0 {
        details.push(("Unlock".to_string(), t.unlock_time.to_string().normal()));
    }
    if t.double_spend_seen {
        details.push(("Warning".to_string(), "double spend seen".red().bold()));
    }
    details
}

/// Lines describing a freshly built transaction. The blob is only shown
/// when the wallet kept it back, since it is then the only way to relay it.
pub fn transfer_result_details(
    r: &TransferResult,
    not_relayed: bool,
    redacted: bool,
) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Hash".to_string(), hash(&r.tx_hash, redacted))];
    details.extend(non_empty("Tx key", &r.tx_key, secret(&r.tx_key, redacted)));
    if r.amount > 0 {
        details.push(("Amount".to_string(), xmr(r.amount)));
    }
    details.push(("Fee".to_string(), xmr(r.fee)));
    if not_relayed {
        details.extend(non_empty("Tx blob", &r.tx_blob, secret(&r.tx_blob, redacted)));
    }
    details
}

pub fn payment_details(p: &Payment, redacted: bool) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Payment ID".to_string(), hash(&p.payment_id, redacted)),
        ("Amount".to_string(), xmr(p.amount)),
        ("Height".to_string(), p.block_height.to_string().normal()),
    ];
    details.extend(non_empty("Address", &p.address, address(&p.address, redacted)));
    details.extend(subaddr(p.subaddr_index));
    if p.unlock_time > 0 {
        details.push(("Unlock".to_string(), p.unlock_time.to_string().normal()));
    }
    details
}

pub fn incoming_details(t: &IncomingTransfer, redacted: bool) -> Vec<Detail> {
    let spent = if t.spent {
        "spent".color(colors::AMOUNT_LOCKED)
    } else {
        "unspent".green()
    };
    let mut details: Vec<Detail> = vec![
        ("Amount".to_string(), xmr(t.amount)),
        ("State".to_string(), spent),
        ("Index".to_string(), t.global_index.to_string().normal()),
    ];
    details.extend(non_empty(
        "Key image",
        &t.key_image,
        hash(&t.key_image, redacted),
    ));
    details.extend(subaddr(t.subaddr_index));
    details
}

pub fn account_details(a: &AccountSummary, redacted: bool) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Address".to_string(), address(&a.base_address, redacted)),
        ("Balance".to_string(), xmr(a.balance)),
        ("Unlocked".to_string(), xmr(a.unlocked_balance)),
    ];
    details.extend(non_empty("Label", &a.label, a.label.italic()));
    details.extend(non_empty("Tag", &a.tag, a.tag.color(colors::SECONDARY)));
    details
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

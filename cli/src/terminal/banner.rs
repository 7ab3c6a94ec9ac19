// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;

use crate::mprint;
use crate::terminal::colors;

const LOGO: &str = r#"
       ███╗   ███╗ ██████╗ ███╗   ██╗███████╗██████╗  ██████╗
       ████╗ ████║██╔═══██╗████╗  ██║██╔════╝██╔══██╗██╔═══██╗
       ██╔████╔██║██║   ██║██╔██╗ ██║█████╗  ██████╔╝██║   ██║
       ██║╚██╔╝██║██║   ██║██║╚██╗██║██╔══╝  ██╔══██╗██║   ██║
       ██║ ╚═╝ ██║╚██████╔╝██║ ╚████║███████╗██║  ██║╚██████╔╝
       ╚═╝     ╚═╝ ╚═════╝ ╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝ ╚═════╝"#;

pub const NO_RESULTS_0: &str = r#"
                 ┌─┐┌┬┐┌─┐┌┬┐┬ ┬  ┬─┐┌─┐┌─┐┬ ┬ ┬  ┌┬┐
                 ├┤ │││├─┘ │ └┬┘  ├┬┘├┤ └─┐│ │ │   │
                 └─┘┴ ┴┴   ┴  ┴   ┴└─└─┘└─┘└─┘┴─┘ ┴
"#;

pub fn print() {
    mprint!("{}", LOGO.color(colors::ADDRESS).bold());
    mprint!();
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Validated sample matrices shared by the continuous estimators (entropy, MI, TE)

pub mod dataset;

// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod common;
pub mod template_utils;

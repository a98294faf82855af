// ABOUTME: Helper modules for heirloom-cli
// ABOUTME: Provides recipe file loading and argument parsing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

pub mod recipes;

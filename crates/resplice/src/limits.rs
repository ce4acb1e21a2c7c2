//! Centralized matching limits and configuration constants.
//!
//! All magic numbers that bound matcher behavior are collected here
//! for easy tuning.

// ===== Lua pattern dialect =====

/// Maximum number of captures in a Lua pattern.
/// Matches Lua 5.5's LUA_MAXCAPTURES.
pub const MAX_CAPTURES: usize = 32;

/// Default recursion depth for the backtracking matcher.
/// Matches Lua 5.5's MAXCCALLS for pattern matching.
pub const MAX_MATCH_DEPTH: usize = 200;

// ===== Output buffers =====

/// Extra capacity reserved on top of the subject length when assembling a
/// replacement, so that a handful of longer replacements don't reallocate.
pub const REPLACE_SLACK: usize = 64;

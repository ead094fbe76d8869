// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command key derivation.

/// Prefix carried by every command key.
pub const KEY_PREFIX: &str = "--";

/// Derive the command key for a callable identifier.
///
/// Every `_` becomes `-` and the result is prefixed with `--`, so
/// `one_two_three` maps to `--one-two-three`.
pub fn command_key(name: &str) -> String {
    format!("{}{}", KEY_PREFIX, name.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(command_key("add"), "--add");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(command_key("a_function"), "--a-function");
        assert_eq!(command_key("one_two_three"), "--one-two-three");
    }

    #[test]
    fn test_every_separator_is_replaced() {
        // Leading and doubled separators are kept one-for-one.
        assert_eq!(command_key("_private"), "---private");
        assert_eq!(command_key("a__b"), "--a--b");
    }
}

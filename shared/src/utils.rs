//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting vault addresses and handles for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the wallet's display widths
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x7175b2d6a01ee3c4e5e2b7a3f3c1d9e8b7a6c5d4e3f2a1b0c9d8e7f6a5b4d5a1";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x7175...d5a1");
//! ```

/// Default number of leading characters kept by [`truncate_address`].
pub const DISPLAY_PREFIX_LEN: usize = 10;

/// Default number of trailing characters kept by [`truncate_address`].
pub const DISPLAY_SUFFIX_LEN: usize = 4;

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
/// Truncation works on characters, so handles with non-ASCII text never split
/// inside a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x7175b2d6a01ee3c4e5e2b7a3f3c1d9e8b7a6c5d4e3f2a1b0c9d8e7f6a5b4d5a1";
/// assert_eq!(format_address(addr, 6, 4), "0x7175...d5a1");
/// assert_eq!(format_address("short", 4, 4), "short");
/// assert_eq!(format_address("", 4, 4), "");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.chars().count();

    if address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(address_len - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an address with the wallet's display widths (10-character prefix, 4-character suffix).
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x7175b2d6a01ee3c4e5e2b7a3f3c1d9e8b7a6c5d4e3f2a1b0c9d8e7f6a5b4d5a1";
/// assert_eq!(truncate_address(addr), "0x7175b2d6...d5a1");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, DISPLAY_PREFIX_LEN, DISPLAY_SUFFIX_LEN)
}

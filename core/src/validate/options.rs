//! Configuration options for email address validation.

/// Limits and switches for [`validate_email_address_with`](super::validate_email_address_with).
///
/// The defaults are the RFC 5321 limits.
///
/// # Example
///
/// ```
/// use tenet_core::validate::EmailOptions;
///
/// let options = EmailOptions {
///     allow_address_literals: false,
///     ..EmailOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailOptions {
    /// Maximum length of the local part, in octets.
    ///
    /// Default: 64
    pub max_local_part_len: usize,

    /// Maximum length of a domain name, in octets.
    ///
    /// Default: 255
    pub max_domain_len: usize,

    /// Maximum length of a single domain label, in octets.
    ///
    /// Default: 63
    pub max_label_len: usize,

    /// Maximum length of the whole mailbox, in octets. A forward or reverse
    /// path is limited to 256 octets including the angle brackets.
    ///
    /// Default: 254
    pub max_address_len: usize,

    /// Whether `[...]` address literals are accepted in place of a domain.
    ///
    /// Default: true
    pub allow_address_literals: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            max_local_part_len: 64,
            max_domain_len: 255,
            max_label_len: 63,
            max_address_len: 254,
            allow_address_literals: true,
        }
    }
}

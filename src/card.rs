//! Card network identifiers shown next to the card number field.

use std::fmt;

/// Payment networks the entry form can recognise from a number prefix.
///
/// Detection only drives which logo is displayed. It carries no
/// validation weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardNetwork {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// JCB - prefix 35
    Jcb,
    /// UnionPay - prefix 62
    UnionPay,
    /// No recognised prefix (or not enough digits yet).
    #[default]
    Unknown,
}

impl CardNetwork {
    /// Returns the human-readable network name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Unknown => "Unknown",
        }
    }

    /// Identifier of the logo asset the presentation layer should show.
    ///
    /// Returns `None` for [`CardNetwork::Unknown`], where no logo is drawn.
    pub const fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Visa => Some("visa"),
            Self::Mastercard => Some("msc"),
            Self::Amex => Some("amex"),
            Self::Jcb => Some("jcb"),
            Self::UnionPay => Some("up"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Localized string tables consumed by the presentation layer.
//!
//! The core reads exactly one table per form and never mutates it.

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Traditional Chinese.
    #[default]
    Zh,
    /// English.
    En,
}

/// Labels shown next to each form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabels {
    pub email: &'static str,
    pub card: &'static str,
    pub expiry: &'static str,
    pub cvc: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub alias: &'static str,
}

/// Every user-visible string for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTable {
    pub labels: FieldLabels,
    pub submit: &'static str,
    pub processing: &'static str,
    pub currency: &'static str,
    pub save_consent: &'static str,
    pub success: &'static str,
    /// Inline message for a card number that fails the checksum.
    pub invalid_card: &'static str,
    /// Generic notice for a submission that could not be completed.
    pub failure: &'static str,
}

static ZH: StringTable = StringTable {
    labels: FieldLabels {
        email: "電子郵件",
        card: "卡號",
        expiry: "到期日",
        cvc: "CVV",
        name: "持卡人姓名",
        country: "國家或地區",
        alias: "卡片名稱",
    },
    submit: "新增",
    processing: "處理中...",
    currency: "NT$",
    save_consent: "我想要安全儲存我的卡片。",
    success: "付款成功，我們已收到您的資料。",
    invalid_card: "卡號不正確，請重新輸入",
    failure: "處理失敗，請稍後再試",
};

static EN: StringTable = StringTable {
    labels: FieldLabels {
        email: "Email",
        card: "Card number",
        expiry: "Expiry",
        cvc: "CVC",
        name: "Cardholder name",
        country: "Country or region",
        alias: "Card nickname",
    },
    submit: "Add",
    processing: "Processing...",
    currency: "$",
    save_consent: "Securely save my card for future payments.",
    success: "Payment complete. We have received your details.",
    invalid_card: "Card number is incorrect, please re-enter it",
    failure: "Something went wrong, please try again later",
};

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// Parses a locale code such as `"zh"`, `"zh-TW"` or `"en-US"`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Returns the locale code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Returns the string table for this locale.
    pub fn strings(&self) -> &'static StringTable {
        match self {
            Self::Zh => &ZH,
            Self::En => &EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("zh-TW"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_tables_are_complete() {
        for locale in Locale::ALL {
            let t = locale.strings();
            for s in [t.submit, t.processing, t.success, t.invalid_card, t.failure, t.labels.card] {
                assert!(!s.is_empty(), "{} has an empty string", locale.code());
            }
        }
    }
}

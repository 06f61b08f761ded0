//! Call and WhatsApp deep links for a listing

use crate::car::CarRecord;

pub const DEFAULT_CALL_NUMBER: &str = "9876543210";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919876543210";

/// Dealer numbers used by the contact buttons
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub call_number: String,
    pub whatsapp_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            call_number: DEFAULT_CALL_NUMBER.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

impl ContactConfig {
    /// Numbers baked in at build time via `CARLOT_CALL_NUMBER` and
    /// `CARLOT_WHATSAPP_NUMBER`, falling back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CARLOT_CALL_NUMBER"),
            option_env!("CARLOT_WHATSAPP_NUMBER"),
        )
    }

    pub fn from_values(call_number: Option<&str>, whatsapp_number: Option<&str>) -> Self {
        Self {
            call_number: pick(call_number, DEFAULT_CALL_NUMBER),
            whatsapp_number: pick(whatsapp_number, DEFAULT_WHATSAPP_NUMBER),
        }
    }

    pub fn call_link(&self) -> String {
        tel_link(&self.call_number)
    }

    /// WhatsApp link with a message naming the car
    pub fn whatsapp_link_for(&self, car: &CarRecord) -> String {
        whatsapp_link(&self.whatsapp_number, &enquiry_text(car))
    }
}

fn pick(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Pre-filled enquiry message
pub fn enquiry_text(car: &CarRecord) -> String {
    format!("Interested in {}", car.title())
}

/// `tel:` link; spaces and dashes are dropped from the number
pub fn tel_link(number: &str) -> String {
    let digits: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// `https://wa.me/{number}?text=...` with the text percent-encoded
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn honda_city() -> CarRecord {
        CarRecord {
            brand: "Honda".into(),
            model: "City".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tel_link() {
        assert_eq!(tel_link("9876543210"), "tel:9876543210");
        assert_eq!(tel_link("+91 98765-43210"), "tel:+919876543210");
    }

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let contact = ContactConfig::default();
        assert_eq!(
            contact.whatsapp_link_for(&honda_city()),
            "https://wa.me/919876543210?text=Interested%20in%20Honda%20City"
        );
    }

    #[test]
    fn test_whatsapp_link_escapes_reserved_characters() {
        let link = whatsapp_link("91 98765 43210", "Interested in A&B #1?");
        assert_eq!(
            link,
            "https://wa.me/919876543210?text=Interested%20in%20A%26B%20%231%3F"
        );
    }

    #[test]
    fn test_contact_config_values() {
        let contact = ContactConfig::from_values(Some(" 1800123456 "), Some(""));
        assert_eq!(contact.call_link(), "tel:1800123456");
        assert_eq!(contact.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(ContactConfig::from_values(None, None), ContactConfig::default());
    }
}

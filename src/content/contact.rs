//! Outreach channels: phone, Instagram, WhatsApp.
//!
//! Every target is a fixed URI template; the only interpolation is the shop
//! phone number and the pre-filled WhatsApp greeting.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

/// Phone number in E.164 digits, without the leading `+`.
pub const PHONE_DIGITS: &str = "919972382049";

/// Phone number as printed on the page.
pub const PHONE_DISPLAY: &str = "+91 997 238 2049";

pub const INSTAGRAM_HANDLE: &str = "thepopandchipshop";

/// Message pre-filled in the WhatsApp chat.
pub const ORDER_GREETING: &str = "Hi! I'd like to place an order from The Pop and Chip Shop!";

/// Characters escaped in the `text` query value.
///
/// `!` and `'` stay literal so the link matches what the shop already shares.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Phone,
    Instagram,
    Whatsapp,
}

/// One way of reaching the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub display_label: String,
    pub target_uri: String,
}

impl ContactChannel {
    pub fn phone() -> Self {
        Self {
            kind: ChannelKind::Phone,
            display_label: PHONE_DISPLAY.to_string(),
            target_uri: tel_uri(PHONE_DIGITS),
        }
    }

    pub fn instagram() -> Self {
        Self {
            kind: ChannelKind::Instagram,
            display_label: format!("@{INSTAGRAM_HANDLE}"),
            target_uri: instagram_uri(INSTAGRAM_HANDLE),
        }
    }

    pub fn whatsapp() -> Self {
        Self {
            kind: ChannelKind::Whatsapp,
            display_label: "Order via WhatsApp".to_string(),
            target_uri: whatsapp_uri(PHONE_DIGITS, ORDER_GREETING),
        }
    }

    /// Whether the link leaves the page (opened in a new tab).
    pub const fn is_external(&self) -> bool {
        !matches!(self.kind, ChannelKind::Phone)
    }
}

pub fn tel_uri(digits: &str) -> String {
    format!("tel:+{digits}")
}

pub fn instagram_uri(handle: &str) -> String {
    format!("https://instagram.com/{handle}")
}

/// `wa.me` chat link with a pre-filled message.
pub fn whatsapp_uri(digits: &str, message: &str) -> String {
    let text = utf8_percent_encode(message, QUERY_VALUE);
    format!("https://wa.me/{digits}?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_uri() {
        assert_eq!(ContactChannel::phone().target_uri, "tel:+919972382049");
    }

    #[test]
    fn test_instagram_uri() {
        let channel = ContactChannel::instagram();
        assert_eq!(channel.target_uri, "https://instagram.com/thepopandchipshop");
        assert_eq!(channel.display_label, "@thepopandchipshop");
    }

    #[test]
    fn test_whatsapp_uri_carries_greeting() {
        let uri = ContactChannel::whatsapp().target_uri;
        assert_eq!(
            uri,
            "https://wa.me/919972382049?text=Hi!%20I'd%20like%20to%20place%20an%20order%20from%20The%20Pop%20and%20Chip%20Shop!"
        );
        let (_, text) = uri.split_once("?text=").unwrap();
        assert!(!text.is_empty());
    }

    #[test]
    fn test_whatsapp_uri_escapes_query_delimiters() {
        let uri = whatsapp_uri("1", "a&b=c #d");
        assert_eq!(uri, "https://wa.me/1?text=a%26b%3Dc%20%23d");
    }

    #[test]
    fn test_external_channels() {
        assert!(!ContactChannel::phone().is_external());
        assert!(ContactChannel::instagram().is_external());
        assert!(ContactChannel::whatsapp().is_external());
    }
}

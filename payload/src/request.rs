//! Typed content requests for QR payload generation.
//!
//! A [`ContentRequest`] is a sum type: each variant carries exactly the
//! fields its content kind needs, so a request can never hold stale data
//! from another kind. Requests are built fresh per use (by the CLI, a
//! form surface, or a test), handed to the encoder once, and discarded.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying which kind of content a [`ContentRequest`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Url,
    Text,
    VCard,
    Email,
    Wifi,
    Sms,
    Phone,
    Location,
    Event,
}

impl ContentKind {
    /// Short lowercase slug used in file names and log lines.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
            Self::VCard => "vcard",
            Self::Email => "email",
            Self::Wifi => "wifi",
            Self::Sms => "sms",
            Self::Phone => "phone",
            Self::Location => "location",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// WiFi encryption schemes understood by the `WIFI:` join format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiEncryption {
    /// WPA or WPA2 pre-shared key.
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    /// Open network without a password.
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiEncryption {
    /// Token emitted into the `T:` field of a `WIFI:` payload.
    pub fn token(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
        }
    }
}

/// Join credentials for a WiFi network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    /// Network name. Required.
    pub ssid: String,
    pub password: String,
    pub encryption: WifiEncryption,
    /// Whether the network does not broadcast its SSID.
    pub hidden: bool,
}

/// Pre-filled email draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address. Required.
    pub address: String,
    pub subject: String,
    pub body: String,
}

/// Contact card fields for a VCARD 3.0 block.
///
/// Every field is optional except that at least one of `first_name` and
/// `last_name` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub website: String,
}

/// SMS draft addressed to a phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    /// Destination number. Required.
    pub phone: String,
    pub message: String,
}

/// A point on the map, with an optional label for the map application.
///
/// Coordinates are kept as the strings the user typed; the `geo:` format
/// does not require normalized numbers and the original values survive
/// round trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: String,
    pub longitude: String,
    pub display_name: String,
}

/// Calendar event fields for a VEVENT fragment.
///
/// `start` and `end` hold ISO-like local datetimes (`2024-05-01T10:00`);
/// the encoder compacts them for calendar consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title. Required.
    pub title: String,
    /// Start datetime. Required.
    pub start: String,
    pub end: String,
    pub location: String,
    pub description: String,
}

/// A single piece of typed content destined for a QR symbol.
///
/// Serialized form is internally tagged, so a request round-trips as a
/// flat JSON object: `{"kind":"wifi","ssid":"home",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentRequest {
    Url { url: String },
    Text { text: String },
    Wifi(WifiNetwork),
    Email(EmailMessage),
    VCard(ContactCard),
    Sms(SmsMessage),
    Phone { number: String },
    Location(GeoPoint),
    Event(CalendarEvent),
}

/// Required fields for the selected content kind are empty.
///
/// This is a gate, not a fault: callers recover by asking the user for
/// the missing input, the way the original form disables its generate
/// button.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} content requires {requirement}")]
pub struct ValidationError {
    /// Kind of the rejected request.
    pub kind: ContentKind,
    /// What was required and missing.
    pub requirement: &'static str,
}

impl ContentRequest {
    /// The kind tag of this request.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Url { .. } => ContentKind::Url,
            Self::Text { .. } => ContentKind::Text,
            Self::Wifi(_) => ContentKind::Wifi,
            Self::Email(_) => ContentKind::Email,
            Self::VCard(_) => ContentKind::VCard,
            Self::Sms(_) => ContentKind::Sms,
            Self::Phone { .. } => ContentKind::Phone,
            Self::Location(_) => ContentKind::Location,
            Self::Event(_) => ContentKind::Event,
        }
    }

    /// Check that the fields required by this request's kind are present.
    ///
    /// Optional fields may be empty; they encode as empty values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ok = match self {
            Self::Url { url } => !url.trim().is_empty(),
            Self::Text { text } => !text.trim().is_empty(),
            Self::Phone { number } => !number.trim().is_empty(),
            Self::Wifi(wifi) => !wifi.ssid.is_empty(),
            Self::Email(email) => !email.address.is_empty(),
            Self::VCard(card) => !card.first_name.is_empty() || !card.last_name.is_empty(),
            Self::Sms(sms) => !sms.phone.is_empty(),
            Self::Location(point) => !point.latitude.is_empty() && !point.longitude.is_empty(),
            Self::Event(event) => !event.title.is_empty() && !event.start.is_empty(),
        };

        if ok {
            Ok(())
        } else {
            Err(ValidationError {
                kind: self.kind(),
                requirement: self.requirement(),
            })
        }
    }

    /// Human-readable description of the fields this kind requires.
    fn requirement(&self) -> &'static str {
        match self {
            Self::Url { .. } => "a web address",
            Self::Text { .. } => "text content",
            Self::Phone { .. } => "a phone number",
            Self::Wifi(_) => "a network name (ssid)",
            Self::Email(_) => "a recipient address",
            Self::VCard(_) => "a first or last name",
            Self::Sms(_) => "a destination phone number",
            Self::Location(_) => "both latitude and longitude",
            Self::Event(_) => "a title and a start datetime",
        }
    }
}

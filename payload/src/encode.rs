//! Canonical payload encoding.
//!
//! Each content kind lowers to an established external micro-format.
//! The output is a byte-for-byte contract: QR readers in the wild parse
//! these strings, so the shapes below must not drift.
//!
//! Field values are deliberately NOT escaped beyond the percent-encoding
//! the `mailto:` and `geo:` query parts call for. A `;` inside an SSID
//! passes through verbatim; downstream readers tolerate it and the
//! original emitter behaved the same way.

use serde::{Deserialize, Serialize};

use crate::request::{CalendarEvent, ContactCard, ContentRequest, ValidationError};

/// Symbol redundancy requested from the renderer.
///
/// QRfoundry always asks for [`ErrorCorrection::High`] (~30% recovery),
/// keeping symbols scannable when partially occluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

/// Encode a request into the text payload for a QR symbol.
///
/// Validation runs first; a request whose required fields are empty is
/// rejected without producing output. Encoding itself never fails, and
/// the same request always yields the same string.
pub fn encode(request: &ContentRequest) -> Result<String, ValidationError> {
    request.validate()?;

    Ok(match request {
        ContentRequest::Url { url } => url.clone(),
        ContentRequest::Text { text } => text.clone(),
        ContentRequest::Wifi(wifi) => format!(
            "WIFI:T:{};S:{};P:{};H:{};;",
            wifi.encryption.token(),
            wifi.ssid,
            wifi.password,
            wifi.hidden,
        ),
        ContentRequest::Email(email) => format!(
            "mailto:{}?subject={}&body={}",
            email.address,
            urlencoding::encode(&email.subject),
            urlencoding::encode(&email.body),
        ),
        ContentRequest::VCard(card) => encode_vcard(card),
        ContentRequest::Sms(sms) => format!("smsto:{}:{}", sms.phone, sms.message),
        ContentRequest::Phone { number } => format!("tel:{number}"),
        ContentRequest::Location(point) => format!(
            "geo:{},{}?q={}",
            point.latitude,
            point.longitude,
            urlencoding::encode(&point.display_name),
        ),
        ContentRequest::Event(event) => encode_event(event),
    })
}

/// VCARD 3.0 block with a fixed line order.
///
/// Empty optional fields emit empty-valued lines; lines are never
/// omitted, so the block shape is constant.
fn encode_vcard(card: &ContactCard) -> String {
    [
        "BEGIN:VCARD".to_owned(),
        "VERSION:3.0".to_owned(),
        format!("N:{};{}", card.last_name, card.first_name),
        format!("FN:{} {}", card.first_name, card.last_name),
        format!("ORG:{}", card.company),
        format!("TITLE:{}", card.title),
        format!("TEL:{}", card.phone),
        format!("EMAIL:{}", card.email),
        format!("URL:{}", card.website),
        "END:VCARD".to_owned(),
    ]
    .join("\n")
}

/// iCalendar VEVENT fragment.
fn encode_event(event: &CalendarEvent) -> String {
    [
        "BEGIN:VEVENT".to_owned(),
        format!("SUMMARY:{}", event.title),
        format!("DTSTART:{}", compact_datetime(&event.start)),
        format!("DTEND:{}", compact_datetime(&event.end)),
        format!("LOCATION:{}", event.location),
        format!("DESCRIPTION:{}", event.description),
        "END:VEVENT".to_owned(),
    ]
    .join("\n")
}

/// Strip every `-` and `:` so an ISO-like local datetime collapses to the
/// compact `YYYYMMDDTHHMMSS` form calendar consumers expect.
fn compact_datetime(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '-' | ':')).collect()
}

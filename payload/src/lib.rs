//! Typed QR content requests and canonical payload encoding for QRfoundry.
//!
//! This crate is the precision core of QRfoundry: it maps a typed
//! [`ContentRequest`] to the exact text string embedded in a QR symbol,
//! following the established micro-formats for each content kind
//! (`WIFI:`, VCARD, `mailto:`, `smsto:`, `tel:`, `geo:`, iCalendar
//! VEVENT fragments).
//!
//! Rendering the string into a scannable symbol is someone else's job
//! (see the `qrfoundry-render` crate); this crate only decides WHAT to
//! encode and at which [`ErrorCorrection`] level.
//!
//! # Example
//!
//! ```
//! use qrfoundry_payload::{encode, ContentRequest};
//!
//! let request = ContentRequest::Phone {
//!     number: "+15551234567".to_owned(),
//! };
//! assert_eq!(encode(&request).expect("valid request"), "tel:+15551234567");
//! ```

pub mod encode;
pub mod request;


pub use encode::{ErrorCorrection, encode};
pub use request::{
    CalendarEvent, ContactCard, ContentKind, ContentRequest, EmailMessage, GeoPoint, SmsMessage,
    ValidationError, WifiEncryption, WifiNetwork,
};

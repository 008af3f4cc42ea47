//! Payload generation: assemble a typed request from CLI arguments,
//! encode it, and present the result.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::Utc;
use qrfoundry_payload::{
    CalendarEvent, ContactCard, ContentRequest, EmailMessage, ErrorCorrection, GeoPoint,
    SmsMessage, WifiNetwork, encode,
};
use tracing::debug;

use crate::cli::{Commands, RenderOptions};
use crate::config::{Config, Theme};
use crate::output::Output;
use crate::stdin::StdinReader;

/// Assemble the content request an encoding subcommand describes.
///
/// `text` falls back to stdin when no argument was given. Non-encoding
/// subcommands never reach this function; they are dispatched in `main`.
pub fn build_request(command: &Commands, stdin: &mut impl StdinReader) -> Result<ContentRequest> {
    Ok(match command {
        Commands::Url { url } => ContentRequest::Url { url: url.clone() },
        Commands::Text { text } => {
            let text = match text {
                Some(text) => text.clone(),
                None => stdin
                    .read_text()?
                    .context("no text argument given and stdin was empty")?,
            };
            ContentRequest::Text { text }
        }
        Commands::Wifi {
            ssid,
            password,
            encryption,
            hidden,
        } => ContentRequest::Wifi(WifiNetwork {
            ssid: ssid.clone(),
            password: password.clone(),
            encryption: (*encryption).into(),
            hidden: *hidden,
        }),
        Commands::Email {
            address,
            subject,
            body,
        } => ContentRequest::Email(EmailMessage {
            address: address.clone(),
            subject: subject.clone(),
            body: body.clone(),
        }),
        Commands::Vcard {
            first_name,
            last_name,
            phone,
            email,
            company,
            title,
            website,
        } => ContentRequest::VCard(ContactCard {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            phone: phone.clone(),
            email: email.clone(),
            company: company.clone(),
            title: title.clone(),
            website: website.clone(),
        }),
        Commands::Sms { phone, message } => ContentRequest::Sms(SmsMessage {
            phone: phone.clone(),
            message: message.clone(),
        }),
        Commands::Phone { number } => ContentRequest::Phone {
            number: number.clone(),
        },
        Commands::Location {
            latitude,
            longitude,
            name,
        } => ContentRequest::Location(GeoPoint {
            latitude: latitude.clone(),
            longitude: longitude.clone(),
            display_name: name.clone(),
        }),
        Commands::Event {
            title,
            start,
            end,
            location,
            description,
        } => ContentRequest::Event(CalendarEvent {
            title: title.clone(),
            start: start.clone(),
            end: end.clone(),
            location: location.clone(),
            description: description.clone(),
        }),
        Commands::Theme { .. } | Commands::Completions { .. } => {
            unreachable!("non-encoding commands are dispatched in main")
        }
    })
}

/// Encode a request and render it per the presentation options.
///
/// A validation failure is user input to fix, not a fault: it prints a
/// styled message and exits nonzero without a backtrace.
pub fn run_generate(request: &ContentRequest, options: &RenderOptions) -> Result<()> {
    let out = Output::new();

    let payload = match encode(request) {
        Ok(payload) => payload,
        Err(err) => {
            out.error(&err);
            std::process::exit(1);
        }
    };
    debug!(kind = %request.kind(), bytes = payload.len(), "encoded payload");

    if options.payload_only {
        out.print(&payload);
        return Ok(());
    }

    let level = ErrorCorrection::default();

    if options.save || options.output.is_some() {
        let path = options.output.clone().unwrap_or_else(|| {
            PathBuf::from(qrfoundry_render::download_filename(
                "qrfoundry",
                request.kind(),
                Utc::now().timestamp_millis(),
            ))
        });
        qrfoundry_render::render_png(&payload, level, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        out.success(format!("Saved {}", path.display()));
    } else {
        let theme = Config::load()
            .map(|config| config.ui.theme.unwrap_or_default())
            .unwrap_or_default();
        let symbol = qrfoundry_render::render_unicode(&payload, level, theme == Theme::Dark)
            .context("failed to render QR symbol")?;
        out.print(symbol);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use qrfoundry_payload::WifiEncryption;

    use super::*;
    use crate::cli::Cli;
    use crate::stdin::MockStdinReader;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("arguments parse")
    }

    #[test]
    fn test_wifi_args_build_wifi_request() {
        let cli = parse(&[
            "qrfoundry", "wifi", "-s", "home-net", "-p", "hunter2", "-e", "wep", "--hidden",
        ]);
        let request =
            build_request(&cli.command, &mut MockStdinReader::empty()).expect("request builds");
        assert_eq!(
            request,
            ContentRequest::Wifi(WifiNetwork {
                ssid: "home-net".to_owned(),
                password: "hunter2".to_owned(),
                encryption: WifiEncryption::Wep,
                hidden: true,
            })
        );
    }

    #[test]
    fn test_wifi_defaults_to_wpa_and_visible() {
        let cli = parse(&["qrfoundry", "wifi", "-s", "cafe"]);
        let request =
            build_request(&cli.command, &mut MockStdinReader::empty()).expect("request builds");
        assert_eq!(
            request,
            ContentRequest::Wifi(WifiNetwork {
                ssid: "cafe".to_owned(),
                password: String::new(),
                encryption: WifiEncryption::Wpa,
                hidden: false,
            })
        );
    }

    #[test]
    fn test_text_argument_wins_over_stdin() {
        let cli = parse(&["qrfoundry", "text", "inline note"]);
        let request = build_request(&cli.command, &mut MockStdinReader::new("piped"))
            .expect("request builds");
        assert_eq!(
            request,
            ContentRequest::Text {
                text: "inline note".to_owned(),
            }
        );
    }

    #[test]
    fn test_text_falls_back_to_stdin() {
        let cli = parse(&["qrfoundry", "text"]);
        let request = build_request(&cli.command, &mut MockStdinReader::new("from stdin"))
            .expect("request builds");
        assert_eq!(
            request,
            ContentRequest::Text {
                text: "from stdin".to_owned(),
            }
        );
    }

    #[test]
    fn test_text_with_empty_stdin_is_an_error() {
        let cli = parse(&["qrfoundry", "text"]);
        assert!(build_request(&cli.command, &mut MockStdinReader::empty()).is_err());
    }

    #[test]
    fn test_location_args_build_location_request() {
        let cli = parse(&[
            "qrfoundry",
            "location",
            "52.5163",
            "13.3777",
            "-n",
            "Brandenburg Gate",
        ]);
        let request =
            build_request(&cli.command, &mut MockStdinReader::empty()).expect("request builds");
        assert_eq!(
            request,
            ContentRequest::Location(GeoPoint {
                latitude: "52.5163".to_owned(),
                longitude: "13.3777".to_owned(),
                display_name: "Brandenburg Gate".to_owned(),
            })
        );
    }

    #[test]
    fn test_event_args_build_event_request() {
        let cli = parse(&[
            "qrfoundry",
            "event",
            "-t",
            "Standup",
            "--start",
            "2024-05-01T10:00",
            "--end",
            "2024-05-01T10:15",
        ]);
        let request =
            build_request(&cli.command, &mut MockStdinReader::empty()).expect("request builds");
        assert_eq!(
            request,
            ContentRequest::Event(CalendarEvent {
                title: "Standup".to_owned(),
                start: "2024-05-01T10:00".to_owned(),
                end: "2024-05-01T10:15".to_owned(),
                location: String::new(),
                description: String::new(),
            })
        );
    }

    #[test]
    fn test_vcard_args_build_contact_request() {
        let cli = parse(&["qrfoundry", "vcard", "--first-name", "Ada"]);
        let request =
            build_request(&cli.command, &mut MockStdinReader::empty()).expect("request builds");
        assert_eq!(
            request,
            ContentRequest::VCard(ContactCard {
                first_name: "Ada".to_owned(),
                ..ContactCard::default()
            })
        );
    }
}

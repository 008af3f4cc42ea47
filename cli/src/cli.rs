//! Argument definitions for the `qrfoundry` binary.
//!
//! One subcommand per content kind, mirroring the type selector of the
//! original form surface: the subcommand picks the kind, its flags are
//! the kind's form fields.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use qrfoundry_payload::WifiEncryption;

use crate::config::Theme;

#[derive(Parser)]
#[command(name = "qrfoundry")]
#[command(about = "Generate QR codes from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Write the QR code to a PNG file instead of drawing it in the terminal
    #[arg(long, short = 'o', global = true)]
    pub output: Option<PathBuf>,

    /// Save a PNG under an automatic qrfoundry-<kind>-<timestamp>.png name
    #[arg(long, global = true, conflicts_with = "output")]
    pub save: bool,

    /// Print the encoded payload string and stop
    #[arg(long, global = true)]
    pub payload_only: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Presentation options shared by every encoding subcommand.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Explicit PNG output path.
    pub output: Option<PathBuf>,
    /// Auto-named PNG output.
    pub save: bool,
    /// Print the payload string only.
    pub payload_only: bool,
}

impl Cli {
    /// Collect the global presentation flags.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            output: self.output.clone(),
            save: self.save,
            payload_only: self.payload_only,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a web address
    Url {
        /// Address to open when the code is scanned
        url: String,
    },
    /// Encode free text
    Text {
        /// Text content; omit to read it from stdin
        text: Option<String>,
    },
    /// Encode WiFi join credentials
    Wifi {
        /// Network name
        #[arg(long, short = 's')]
        ssid: String,

        /// Network password
        #[arg(long, short = 'p', default_value = "")]
        password: String,

        /// Encryption scheme
        #[arg(long, short = 'e', value_enum, default_value_t = EncryptionArg::Wpa)]
        encryption: EncryptionArg,

        /// Mark the network as hidden
        #[arg(long)]
        hidden: bool,
    },
    /// Encode an email draft
    Email {
        /// Recipient address
        address: String,

        /// Subject line
        #[arg(long, short = 's', default_value = "")]
        subject: String,

        /// Message body
        #[arg(long, short = 'b', default_value = "")]
        body: String,
    },
    /// Encode a vCard contact
    Vcard {
        /// Given name
        #[arg(long, default_value = "")]
        first_name: String,

        /// Family name
        #[arg(long, default_value = "")]
        last_name: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Company name
        #[arg(long, default_value = "")]
        company: String,

        /// Job title
        #[arg(long, default_value = "")]
        title: String,

        /// Website URL
        #[arg(long, default_value = "")]
        website: String,
    },
    /// Encode an SMS draft
    Sms {
        /// Destination phone number
        phone: String,

        /// Message text
        #[arg(long, short = 'm', default_value = "")]
        message: String,
    },
    /// Encode a phone number
    Phone {
        /// Number to dial
        number: String,
    },
    /// Encode map coordinates
    Location {
        /// Latitude in decimal degrees
        latitude: String,

        /// Longitude in decimal degrees
        longitude: String,

        /// Label shown by the map application
        #[arg(long, short = 'n', default_value = "")]
        name: String,
    },
    /// Encode a calendar event
    Event {
        /// Event title
        #[arg(long, short = 't')]
        title: String,

        /// Start date and time, e.g. 2024-05-01T10:00
        #[arg(long)]
        start: String,

        /// End date and time
        #[arg(long, default_value = "")]
        end: String,

        /// Event location
        #[arg(long, default_value = "")]
        location: String,

        /// Event description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show or set the preferred color theme
    Theme {
        /// Theme to save; omit to print the current one
        #[arg(value_enum)]
        theme: Option<Theme>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// WiFi encryption choice as spelled on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EncryptionArg {
    /// WPA or WPA2 pre-shared key
    #[default]
    Wpa,
    /// Legacy WEP key
    Wep,
    /// Open network without a password
    Nopass,
}

impl fmt::Display for EncryptionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wpa => "wpa",
            Self::Wep => "wep",
            Self::Nopass => "nopass",
        })
    }
}

impl From<EncryptionArg> for WifiEncryption {
    fn from(arg: EncryptionArg) -> Self {
        match arg {
            EncryptionArg::Wpa => Self::Wpa,
            EncryptionArg::Wep => Self::Wep,
            EncryptionArg::Nopass => Self::NoPass,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use clap::Parser as _;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_save_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "qrfoundry",
            "url",
            "https://example.com",
            "--save",
            "-o",
            "code.png",
        ]);
        assert!(result.is_err(), "--save and -o are mutually exclusive");
    }

    #[test]
    fn test_encryption_arg_maps_to_payload_tokens() {
        assert_eq!(WifiEncryption::from(EncryptionArg::Wpa).token(), "WPA");
        assert_eq!(WifiEncryption::from(EncryptionArg::Wep).token(), "WEP");
        assert_eq!(WifiEncryption::from(EncryptionArg::Nopass).token(), "nopass");
    }
}

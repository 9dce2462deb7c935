//! `vendor:product` sink identifiers
//!
//! A sink is identified by the USB (or PCI) vendor and product ids the audio
//! server reports in its `device.vendor.id` / `device.product.id` properties.
//! Unlike sink names, these survive replugging into a different port.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::AutopulseError;
use crate::pulse::LiveSink;

static SINK_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<vendor>[0-9a-fA-F]{4}):(?P<product>[0-9a-fA-F]{4})$")
        .expect("sink identifier pattern is valid")
});

/// A `vendor:product` pair of 4-digit hex ids, case preserved as written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SinkIdentifier {
    vendor_id: String,
    product_id: String,
}

impl SinkIdentifier {
    #[must_use]
    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Whether a live sink reports this vendor/product pair
    ///
    /// Hex ids compare case-insensitively. A sink without the properties never
    /// matches.
    #[must_use]
    pub fn matches(&self, sink: &LiveSink) -> bool {
        self.vendor_id.eq_ignore_ascii_case(sink.vendor_id())
            && self.product_id.eq_ignore_ascii_case(sink.product_id())
    }
}

impl FromStr for SinkIdentifier {
    type Err = AutopulseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let caps = SINK_ID_RE
            .captures(value)
            .ok_or_else(|| AutopulseError::Parse(value.to_string()))?;

        Ok(Self {
            vendor_id: caps["vendor"].to_string(),
            product_id: caps["product"].to_string(),
        })
    }
}

impl fmt::Display for SinkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.vendor_id, self.product_id)
    }
}

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Shown by an info tile when the value is missing, empty or zero
pub const MISSING_VALUE: &str = "N/A";

/// Listing data for one vehicle, as served by `GET /api/cars/{id}`.
///
/// Decoding is lenient: everything except the name is optional, `images`
/// drops entries that are not usable strings, and `imageUrl` is only kept
/// when it is a non-empty string. Numbers may arrive as numeric strings; a
/// value of the wrong type decodes as absent rather than failing the record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub brand: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub fuel_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mileage: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub transmission: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub seating_capacity: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub owners: Option<u32>,
    #[serde(default, deserialize_with = "optional_text")]
    pub location: Option<String>,
    /// Gallery images in display order
    #[serde(default, deserialize_with = "string_entries")]
    pub images: Vec<String>,
    /// Legacy single-image field; takes precedence over `images`
    #[serde(default, deserialize_with = "non_empty_string")]
    pub image_url: Option<String>,
}

/// A label/value pair rendered as one info tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

impl InfoField {
    fn new(label: &'static str, value: Option<String>) -> Self {
        Self {
            label,
            value: value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        }
    }
}

impl CarRecord {
    /// "{brand} {model}"
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }

    /// Price in rupees with Indian digit grouping, e.g. "₹12,34,567"
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) if price.is_finite() => format!("₹{}", format_indian_number(price)),
            _ => format!("₹{MISSING_VALUE}"),
        }
    }

    /// "{mileage} km", or None when the listing has no mileage
    pub fn mileage_label(&self) -> Option<String> {
        self.mileage
            .filter(|m| m.is_finite())
            .map(|m| format!("{} km", format_plain_number(m)))
    }

    /// The facts shown next to the gallery, in display order
    pub fn info_fields(&self) -> Vec<InfoField> {
        vec![
            InfoField::new("Fuel", self.fuel_type.clone()),
            InfoField::new("Mileage", self.mileage_label()),
            InfoField::new("Transmission", self.transmission.clone()),
            InfoField::new("Seats", non_zero(self.seating_capacity)),
            InfoField::new("Owners", non_zero(self.owners)),
            InfoField::new("Location", self.location.clone()),
        ]
    }
}

fn non_zero(value: Option<u32>) -> Option<String> {
    value.filter(|v| *v != 0).map(|v| v.to_string())
}

/// Format with lakh/crore grouping: the last three digits, then pairs.
/// Fractions keep at most two decimals with trailing zeros dropped.
pub fn format_indian_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        let fraction = format!("{cents:02}");
        format!("{sign}{grouped}.{}", fraction.trim_end_matches('0'))
    }
}

fn format_plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(whole) => Some(whole as f64),
            None => n.as_f64(),
        },
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    // Counts must be whole and fit; 5.0 is fine, 2.5 or -1 is not.
    Ok(number
        .filter(|n| n.is_finite() && n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

fn string_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let entries = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(entries)
}

fn non_empty_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

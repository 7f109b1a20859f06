//! Custom serde helpers for backend wire formats.

/// (De)serializes a `Decimal` as a plain JSON number.
///
/// The backend sends `cost` and `balance` as JSON numbers (`100`, `4999.5`),
/// while persisted values come back as strings, so both are accepted.
pub mod decimal_number {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(serde_json::Number),
        String(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s,
        };
        Decimal::from_str(raw.trim())
            .or_else(|_| Decimal::from_scientific(raw.trim()))
            .map_err(|e| serde::de::Error::custom(format!("Invalid decimal {raw:?}: {e}")))
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let number = serde_json::Number::from_str(&value.normalize().to_string())
            .map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

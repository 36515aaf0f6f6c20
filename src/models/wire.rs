// Backends are inconsistent about ids: the Java service sends numbers, the
// destination service sends strings. Both are normalized to `String`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        price: Option<String>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let p: Probe = serde_json::from_str(r#"{"id": 42, "price": 199.5}"#).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.price.as_deref(), Some("199.5"));

        let p: Probe = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(p.id, "abc");
        assert_eq!(p.price, None);
    }

    #[test]
    fn null_becomes_none() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "price": null}"#).unwrap();
        assert_eq!(p.price, None);
    }
}

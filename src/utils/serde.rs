use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit JSON null.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "double_option")]
        teacher_id: Option<Option<Uuid>>,
    }

    #[test]
    fn absent_field() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.teacher_id, None);
    }

    #[test]
    fn explicit_null() {
        let p: Payload = serde_json::from_str(r#"{"teacher_id": null}"#).unwrap();
        assert_eq!(p.teacher_id, Some(None));
    }

    #[test]
    fn explicit_value() {
        let id = Uuid::new_v4();
        let p: Payload = serde_json::from_str(&format!(r#"{{"teacher_id": "{id}"}}"#)).unwrap();
        assert_eq!(p.teacher_id, Some(Some(id)));
    }
}

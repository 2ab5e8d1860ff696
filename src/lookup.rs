use serde_json::Value;

/// Walk a dot-delimited path (`"meta.pagination.cursors.next"`) through nested
/// JSON objects.
///
/// Every level that is descended through must be a non-empty object; an empty
/// object, a non-object, or a missing key at any level yields `None`. The value
/// at the final segment is returned unchanged, whatever its type.
pub fn obj_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        let map = current.as_object().filter(|m| !m.is_empty())?;
        current = map.get(segment)?;
    }
    Some(current)
}

pub fn get_str<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    obj_get(value, path).and_then(Value::as_str)
}

pub fn get_u64(value: &Value, path: &str) -> Option<u64> {
    obj_get(value, path).and_then(Value::as_u64)
}

pub fn get_array<'a>(value: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    obj_get(value, path).and_then(Value::as_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descends_nested_objects() {
        let v = json!({"meta": {"pagination": {"cursors": {"next": "abc"}, "total": 12}}});
        assert_eq!(obj_get(&v, "meta.pagination.cursors.next"), Some(&json!("abc")));
        assert_eq!(get_str(&v, "meta.pagination.cursors.next"), Some("abc"));
        assert_eq!(get_u64(&v, "meta.pagination.total"), Some(12));
    }

    #[test]
    fn missing_levels_are_none() {
        let v = json!({"meta": {"pagination": {}}});
        assert_eq!(obj_get(&v, "meta.pagination.cursors.next"), None);
        assert_eq!(obj_get(&v, "data"), None);
        assert_eq!(obj_get(&json!({}), "meta"), None);
    }

    #[test]
    fn non_object_level_short_circuits() {
        let v = json!({"dimensions": "640x480", "list": [1, 2]});
        assert_eq!(obj_get(&v, "dimensions.h"), None);
        assert_eq!(obj_get(&v, "list.0"), None);
        assert_eq!(obj_get(&json!(null), "a"), None);
    }

    #[test]
    fn leaf_is_returned_as_is() {
        let v = json!({"a": {"b": null, "c": {}}});
        assert_eq!(obj_get(&v, "a.b"), Some(&Value::Null));
        assert_eq!(obj_get(&v, "a.c"), Some(&json!({})));
        assert_eq!(get_str(&v, "a.b"), None);
    }

    #[test]
    fn typed_getters_reject_other_types() {
        let v = json!({"h": "10", "order": "m1", "neg": -4});
        assert_eq!(get_u64(&v, "h"), None);
        assert_eq!(get_u64(&v, "neg"), None);
        assert_eq!(get_array(&v, "order"), None);
    }
}

use serde_json::Value;

use crate::domain::entities::ScanPayload;
use crate::domain::errors::MalformedPayload;

// Decode scanned text into a payload. Only `lat` and `lon` are load-bearing;
// `id` is carried through without validation.
pub fn decode_payload(raw: &str) -> Result<ScanPayload, MalformedPayload> {
    let value: Value = serde_json::from_str(raw).map_err(|_| MalformedPayload::NotJson)?;
    let object = value.as_object().ok_or(MalformedPayload::NotAnObject)?;

    let lat = numeric_field(object, "lat")?;
    let lon = numeric_field(object, "lon")?;
    let id = match object.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => Some(other.to_string()),
    };

    Ok(ScanPayload { id, lat, lon })
}

// Serialize a payload for QR rendering.
pub fn encode_payload(payload: &ScanPayload) -> String {
    serde_json::json!({
        "id": payload.id,
        "lat": payload.lat,
        "lon": payload.lon,
    })
    .to_string()
}

fn numeric_field(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<f64, MalformedPayload> {
    match object.get(field) {
        None | Some(Value::Null) => Err(MalformedPayload::MissingField(field)),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or(MalformedPayload::NotNumeric(field)),
        Some(_) => Err(MalformedPayload::NotNumeric(field)),
    }
}

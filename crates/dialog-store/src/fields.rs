//! Mapping between the document model and the store's typed field values
//!
//! The managed document store represents every field as a tagged value
//! (`stringValue`, `booleanValue`, `timestampValue`, `arrayValue`,
//! `mapValue`). This module converts [`ConversationDoc`] and
//! [`AudioFields`] to and from that representation.

use crate::error::{StoreError, StoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use dialog_core::{AudioFields, ConversationDoc, ConversationTurn};
use serde_json::{Map, Value, json};

fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

fn bool_value(b: bool) -> Value {
    json!({ "booleanValue": b })
}

fn timestamp_value(at: DateTime<Utc>) -> Value {
    json!({ "timestampValue": at.to_rfc3339_opts(SecondsFormat::Micros, true) })
}

fn turn_value(turn: &ConversationTurn) -> Value {
    json!({
        "mapValue": {
            "fields": {
                "role": string_value(&turn.role),
                "speaker": string_value(&turn.speaker),
                "text": string_value(&turn.text),
            }
        }
    })
}

fn turns_value(turns: &[ConversationTurn]) -> Value {
    let values: Vec<Value> = turns.iter().map(turn_value).collect();
    json!({ "arrayValue": { "values": values } })
}

/// Encode the audio fields as a typed field map
#[must_use]
pub fn audio_field_map(audio: &AudioFields) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "audioFileUrl".to_string(),
        string_value(&audio.audio_file_url),
    );
    fields.insert(
        "audioTranscript".to_string(),
        string_value(&audio.audio_transcript),
    );
    fields.insert(
        "audioTranscribedAt".to_string(),
        timestamp_value(audio.audio_transcribed_at),
    );
    fields.insert("hasAudio".to_string(), bool_value(audio.has_audio));
    fields
}

/// Encode a full document as a typed field map
#[must_use]
pub fn doc_field_map(doc: &ConversationDoc) -> Map<String, Value> {
    let mut fields = audio_field_map(&doc.audio);
    fields.insert("sessionId".to_string(), string_value(&doc.session_id));
    fields.insert("startTime".to_string(), timestamp_value(doc.start_time));
    fields.insert("channel".to_string(), string_value(&doc.channel));
    fields.insert("status".to_string(), string_value(&doc.status));
    fields.insert("turns".to_string(), turns_value(&doc.turns));
    fields
}

fn get_string(fields: &Map<String, Value>, name: &str) -> String {
    fields
        .get(name)
        .and_then(|v| v.get("stringValue"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn get_bool(fields: &Map<String, Value>, name: &str) -> bool {
    fields
        .get(name)
        .and_then(|v| v.get("booleanValue"))
        .and_then(Value::as_bool)
        .unwrap_or_default()
}

fn get_timestamp(fields: &Map<String, Value>, name: &str) -> DateTime<Utc> {
    fields
        .get(name)
        .and_then(|v| v.get("timestampValue"))
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map_or(DateTime::<Utc>::UNIX_EPOCH, |dt| dt.with_timezone(&Utc))
}

fn get_turns(fields: &Map<String, Value>) -> Vec<ConversationTurn> {
    let Some(values) = fields
        .get("turns")
        .and_then(|v| v.get("arrayValue"))
        .and_then(|v| v.get("values"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    values
        .iter()
        .filter_map(|value| {
            let turn_fields = value
                .get("mapValue")
                .and_then(|v| v.get("fields"))
                .and_then(Value::as_object)?;
            Some(ConversationTurn {
                role: get_string(turn_fields, "role"),
                speaker: get_string(turn_fields, "speaker"),
                text: get_string(turn_fields, "text"),
            })
        })
        .collect()
}

/// Decode a fetched document's field map into the document model
///
/// Fields the document does not carry decode to empty defaults; the
/// ingest path only needs existence plus the audio fields, and documents
/// written by other channels may omit any of them.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if `fields` is not an object.
pub fn doc_from_fields(session_id: &str, fields: &Value) -> StoreResult<ConversationDoc> {
    // A document can legitimately exist with no fields at all
    let empty = Map::new();
    let fields = if fields.is_null() {
        &empty
    } else {
        fields
            .as_object()
            .ok_or_else(|| StoreError::decode(session_id, "fields is not an object"))?
    };

    let audio = AudioFields {
        audio_file_url: get_string(fields, "audioFileUrl"),
        audio_transcript: get_string(fields, "audioTranscript"),
        audio_transcribed_at: get_timestamp(fields, "audioTranscribedAt"),
        has_audio: get_bool(fields, "hasAudio"),
    };

    Ok(ConversationDoc {
        session_id: session_id.to_string(),
        audio,
        start_time: get_timestamp(fields, "startTime"),
        channel: get_string(fields, "channel"),
        status: get_string(fields, "status"),
        turns: get_turns(fields),
    })
}

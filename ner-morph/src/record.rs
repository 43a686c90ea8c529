//! # Registros de Entrada
//!
//! Formato em árvore produzido pelo analisador morfológico:
//!
//! ```json
//! {
//!   "id": 0,
//!   "word": [{"id": 1, "begin": 1, "end": 2}],
//!   "morp": [{"id": 1, "lemma": "John", "type": "NNP"}, {"id": 2, "lemma": "는", "type": "JX"}],
//!   "NE":   [{"id": 1, "text": "John", "type": "PS", "begin": 1, "end": 1}]
//! }
//! ```
//!
//! Todos os campos são lidos como opcionais e validados na projeção para o
//! modelo: um campo ausente vira [`SentenceError::MissingField`] com o tipo
//! do registro e sua identidade, nunca um valor padrão silencioso.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::{Category, SpanEntity};
use crate::error::{Result, SentenceError};
use crate::morph::{MorphRange, Morpheme, Word};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<Vec<WordRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morp: Option<Vec<MorpRecord>>,
    #[serde(rename = "NE", default, skip_serializing_if = "Option::is_none")]
    pub ne: Option<Vec<NeRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorpRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// NE do registro. `type` fica como JSON cru até a validação do formato.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

fn required<T>(value: Option<T>, record: &'static str, id: Option<usize>, field: &'static str) -> Result<T> {
    value.ok_or(SentenceError::MissingField { record, id, field })
}

impl TryFrom<MorpRecord> for Morpheme {
    type Error = SentenceError;

    fn try_from(rec: MorpRecord) -> Result<Self> {
        let id = required(rec.id, "morp", None, "id")?;
        let lemma = required(rec.lemma, "morp", Some(id), "lemma")?;
        let tag = required(rec.tag, "morp", Some(id), "type")?;
        Ok(Morpheme::new(id, lemma, tag))
    }
}

impl TryFrom<WordRecord> for Word {
    type Error = SentenceError;

    fn try_from(rec: WordRecord) -> Result<Self> {
        let id = required(rec.id, "word", None, "id")?;
        let begin = required(rec.begin, "word", Some(id), "begin")?;
        let end = required(rec.end, "word", Some(id), "end")?;
        Word::new(id, begin, end)
    }
}

impl TryFrom<NeRecord> for SpanEntity {
    type Error = SentenceError;

    fn try_from(rec: NeRecord) -> Result<Self> {
        let id = required(rec.id, "NE", None, "id")?;
        let text = required(rec.text, "NE", Some(id), "text")?;
        let value = required(rec.category, "NE", Some(id), "type")?;
        let category = category_from_value(value, id)?;
        let begin = required(rec.begin, "NE", Some(id), "begin")?;
        let end = required(rec.end, "NE", Some(id), "end")?;
        SpanEntity::new("NE", id, Some(text), category, begin, end)
    }
}

/// Uma string → `Single`; lista não vazia de strings → `Multiple`.
fn category_from_value(value: Value, id: usize) -> Result<Category> {
    let shape_error = SentenceError::CategoryShape { record: "NE", id };
    match value {
        Value::String(tag) => Ok(Category::Single(tag)),
        Value::Array(items) if !items.is_empty() => items
            .into_iter()
            .map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Category::Multiple)
            .ok_or(shape_error),
        _ => Err(shape_error),
    }
}

impl From<&Morpheme> for MorpRecord {
    fn from(m: &Morpheme) -> Self {
        Self {
            id: Some(m.id()),
            lemma: Some(m.lemma().to_string()),
            tag: Some(m.tag().to_string()),
        }
    }
}

impl From<&Word> for WordRecord {
    fn from(w: &Word) -> Self {
        Self {
            id: Some(w.id()),
            begin: Some(w.begin()),
            end: Some(w.end()),
        }
    }
}

impl From<&SpanEntity> for NeRecord {
    fn from(e: &SpanEntity) -> Self {
        let category = match e.category() {
            Category::Single(tag) => Value::String(tag.clone()),
            Category::Multiple(tags) => {
                Value::Array(tags.iter().cloned().map(Value::String).collect())
            }
        };
        Self {
            id: Some(e.id()),
            text: e.text().map(str::to_string),
            category: Some(category),
            begin: Some(e.begin()),
            end: Some(e.end()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ne_record(value: Value) -> NeRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_morp_missing_lemma() {
        let rec: MorpRecord = serde_json::from_value(json!({"id": 4, "type": "NNG"})).unwrap();
        let err = Morpheme::try_from(rec).unwrap_err();
        assert!(matches!(
            err,
            SentenceError::MissingField { record: "morp", id: Some(4), field: "lemma" }
        ));
    }

    #[test]
    fn test_word_missing_id() {
        let rec: WordRecord = serde_json::from_value(json!({"begin": 0, "end": 1})).unwrap();
        let err = Word::try_from(rec).unwrap_err();
        assert!(matches!(
            err,
            SentenceError::MissingField { record: "word", id: None, field: "id" }
        ));
    }

    #[test]
    fn test_ne_category_shapes() {
        let single = SpanEntity::try_from(ne_record(
            json!({"id": 0, "text": "John", "type": "PS", "begin": 1, "end": 1}),
        ))
        .unwrap();
        assert!(single.category().is_single("PS"));

        let multi = SpanEntity::try_from(ne_record(
            json!({"id": 1, "text": "X", "type": ["PS", "OG"], "begin": 7, "end": 7}),
        ))
        .unwrap();
        assert_eq!(multi.label(7).unwrap(), "B-PS,B-OG");
    }

    #[test]
    fn test_ne_bad_category_shape() {
        for bad in [json!(3), json!([]), json!(["PS", 1]), json!({"t": "PS"})] {
            let rec = ne_record(json!({"id": 9, "text": "x", "type": bad, "begin": 0, "end": 0}));
            let err = SpanEntity::try_from(rec).unwrap_err();
            assert!(matches!(err, SentenceError::CategoryShape { record: "NE", id: 9 }));
        }
    }

    #[test]
    fn test_ne_missing_end() {
        let rec = ne_record(json!({"id": 2, "text": "x", "type": "LC", "begin": 0}));
        let err = SpanEntity::try_from(rec).unwrap_err();
        assert!(matches!(
            err,
            SentenceError::MissingField { record: "NE", id: Some(2), field: "end" }
        ));
    }

    #[test]
    fn test_ne_record_from_entity_keeps_shape() {
        let e = SpanEntity::new(
            "NE",
            3,
            Some("X".to_string()),
            Category::Multiple(vec!["PS".to_string(), "OG".to_string()]),
            2,
            4,
        )
        .unwrap();
        let value = serde_json::to_value(NeRecord::from(&e)).unwrap();
        assert_eq!(
            value,
            json!({"id": 3, "text": "X", "type": ["PS", "OG"], "begin": 2, "end": 4})
        );
    }
}

//! # Erros
//!
//! Todas as falhas são determinísticas: a mesma entrada sempre produz o mesmo
//! erro, então nenhuma é repetida (retry) internamente.

use thiserror::Error;

/// Erros de construção e consulta de uma [`Sentence`](crate::sentence::Sentence).
#[derive(Debug, Error)]
pub enum SentenceError {
    /// Um campo obrigatório não está presente no registro de entrada.
    #[error("campo obrigatório `{field}` ausente em {record} (id: {})", fmt_id(.id))]
    MissingField {
        /// Tipo do registro (`sentence`, `word`, `morp`, `NE`).
        record: &'static str,
        /// Identidade do registro, quando ela pôde ser lida.
        id: Option<usize>,
        field: &'static str,
    },

    /// Intervalo de morfemas com `begin > end`.
    #[error("intervalo inválido em {record} {id}: begin={begin} > end={end}")]
    InvalidRange {
        record: &'static str,
        id: usize,
        begin: usize,
        end: usize,
    },

    /// Categoria que não é nem uma tag nem uma lista não vazia de tags.
    #[error("categoria com formato inválido em {record} {id}")]
    CategoryShape { record: &'static str, id: usize },

    /// A entrada não é um JSON válido para o registro de sentença.
    #[error("registro JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    /// Falha do gazetteer externo, repassada sem alteração.
    #[error(transparent)]
    Gazetteer(Box<dyn std::error::Error + Send + Sync>),

    /// Posição de entidade inexistente na lista de NEs da sentença.
    #[error("entidade inexistente na posição {position}")]
    UnknownEntity { position: usize },
}

fn fmt_id(id: &Option<usize>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "?".to_string(),
    }
}

/// Erros do dicionário [`Gazette`](crate::gazette::Gazette) embutido.
#[derive(Debug, Error)]
pub enum GazetteError {
    #[error("falha de leitura do gazetteer: {0}")]
    Io(#[from] std::io::Error),

    /// Linha sem o formato `superfície<TAB>categoria`.
    #[error("linha {line} malformada no gazetteer: {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Alias de resultado para operações de sentença.
pub type Result<T> = std::result::Result<T, SentenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_record_and_field() {
        let err = SentenceError::MissingField {
            record: "morp",
            id: Some(3),
            field: "lemma",
        };
        let msg = err.to_string();
        assert!(msg.contains("lemma"));
        assert!(msg.contains("morp"));
        assert!(msg.contains('3'));

        let err = SentenceError::MissingField {
            record: "word",
            id: None,
            field: "id",
        };
        assert!(err.to_string().contains("id: ?"));
    }

    #[test]
    fn test_gazetteer_error_is_transparent() {
        let inner = GazetteError::MalformedLine {
            line: 7,
            content: "sem tab".to_string(),
        };
        let expected = inner.to_string();
        let err = SentenceError::Gazetteer(Box::new(inner));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SentenceError>();
        assert_send_sync::<GazetteError>();
    }
}

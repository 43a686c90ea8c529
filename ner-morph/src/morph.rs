//! # Morfemas e Palavras
//!
//! Registros posicionais mínimos de uma sentença analisada.
//!
//! - [`Morpheme`]: a menor unidade anotada (lema + tag morfossintática).
//!   Sua identidade é a **posição** usada por todos os intervalos da sentença.
//! - [`Word`]: um eojeol/palavra, que cobre um intervalo **inclusivo**
//!   `[begin, end]` de identidades de morfemas.

use std::fmt;

use serde::Serialize;

use crate::chars::lex_form;
use crate::error::{Result, SentenceError};

/// Algo que ocupa um intervalo inclusivo de morfemas.
///
/// Implementado por [`Word`] e [`SpanEntity`](crate::entity::SpanEntity);
/// é o que o índice morfema → dono precisa saber de cada dono.
pub trait MorphRange {
    /// Identidade do dono.
    fn id(&self) -> usize;
    /// Primeiro morfema (inclusivo).
    fn begin(&self) -> usize;
    /// Último morfema (inclusivo).
    fn end(&self) -> usize;
}

/// Um morfema: identidade, lema e tag.
///
/// # Exemplo
/// Em "John은", o morfema `1:John/NNP` seguido de `2:은/JX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Morpheme {
    id: usize,
    lemma: String,
    tag: String,
}

impl Morpheme {
    pub fn new(id: usize, lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id,
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Tag morfossintática (ex: "NNP", "JX")
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Forma lexical do lema (ver [`crate::chars`]).
    pub fn lex_form(&self) -> String {
        lex_form(&self.lemma)
    }

    /// Representação para depuração: `id:lema/tag`
    pub fn to_dbg_str(&self) -> String {
        format!("{}:{}/{}", self.id, self.lemma, self.tag)
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dbg_str())
    }
}

/// Uma palavra, cobrindo os morfemas `[begin, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    id: usize,
    begin: usize,
    end: usize,
}

impl Word {
    /// Cria a palavra, rejeitando `begin > end`.
    pub fn new(id: usize, begin: usize, end: usize) -> Result<Self> {
        if begin > end {
            return Err(SentenceError::InvalidRange {
                record: "word",
                id,
                begin,
                end,
            });
        }
        Ok(Self { id, begin, end })
    }
}

impl MorphRange for Word {
    fn id(&self) -> usize {
        self.id
    }

    fn begin(&self) -> usize {
        self.begin
    }

    fn end(&self) -> usize {
        self.end
    }
}

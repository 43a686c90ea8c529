//! # Entidades de Intervalo (Span Entities)
//!
//! Uma única representação para as duas fontes de evidência:
//!
//! - **NEs da anotação**: vêm no registro da sentença; a categoria pode ser
//!   uma tag ou uma lista de tags (rótulo disjuntivo no nível do morfema).
//! - **NEs do dicionário**: descobertos pelo gazetteer; sempre uma única tag.
//!
//! ## Esquema IOB
//!
//! - `B-TAG`: primeiro morfema da entidade
//! - `I-TAG`: morfemas seguintes
//! - `O`: fora de qualquer entidade

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentenceError};
use crate::morph::MorphRange;

/// Tag de entidade de pessoa.
pub const PERSON_CATEGORY: &str = "PS";

/// Rótulo de morfema fora de qualquer entidade.
pub const OUTSIDE: &str = "O";

/// Categoria de uma entidade.
///
/// Serializa no mesmo formato do campo `type` do registro: uma string
/// ou uma lista de strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    /// Uma única tag (ex: "PS").
    Single(String),
    /// Lista ordenada de tags, só possível em NEs da anotação.
    Multiple(Vec<String>),
}

impl Category {
    /// Verifica se a categoria é exatamente a tag única `tag`.
    pub fn is_single(&self, tag: &str) -> bool {
        matches!(self, Category::Single(t) if t == tag)
    }

    /// Tags da categoria, em ordem
    pub fn tags(&self) -> &[String] {
        match self {
            Category::Single(tag) => std::slice::from_ref(tag),
            Category::Multiple(tags) => tags,
        }
    }

    fn is_well_formed(&self) -> bool {
        !self.tags().is_empty()
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::Single(tag.to_string())
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Category::Single(tag)
    }
}

/// Prefixo IOB de um morfema dentro de uma entidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iob {
    Begin,
    Inside,
}

impl Iob {
    pub fn as_str(&self) -> &'static str {
        match self {
            Iob::Begin => "B",
            Iob::Inside => "I",
        }
    }
}

impl fmt::Display for Iob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entidade cobrindo os morfemas `[begin, end]` com uma categoria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanEntity {
    id: usize,
    text: Option<String>,
    category: Category,
    begin: usize,
    end: usize,
}

impl SpanEntity {
    /// Cria a entidade validando o intervalo e o formato da categoria.
    ///
    /// `record` identifica a origem nos erros (`"NE"` ou `"gazette"`).
    pub fn new(
        record: &'static str,
        id: usize,
        text: Option<String>,
        category: Category,
        begin: usize,
        end: usize,
    ) -> Result<Self> {
        if begin > end {
            return Err(SentenceError::InvalidRange {
                record,
                id,
                begin,
                end,
            });
        }
        if !category.is_well_formed() {
            return Err(SentenceError::CategoryShape { record, id });
        }
        Ok(Self {
            id,
            text,
            category,
            begin,
            end,
        })
    }

    /// Texto da entidade; pode faltar em entidades do dicionário.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Prefixo IOB do morfema `morp_id` dentro desta entidade.
    pub fn iob(&self, morp_id: usize) -> Iob {
        if morp_id == self.begin {
            Iob::Begin
        } else {
            Iob::Inside
        }
    }

    /// Rótulo IOB do morfema `morp_id`.
    ///
    /// Para categorias múltiplas, junta `"{iob}-{tag}"` de cada tag com vírgula,
    /// preservando a ordem: `["PS", "OG"]` no início → `"B-PS,B-OG"`.
    pub fn label(&self, morp_id: usize) -> Result<String> {
        let iob = self.iob(morp_id);
        match &self.category {
            Category::Single(tag) => Ok(format!("{iob}-{tag}")),
            Category::Multiple(tags) if !tags.is_empty() => Ok(tags
                .iter()
                .map(|tag| format!("{iob}-{tag}"))
                .collect::<Vec<_>>()
                .join(",")),
            Category::Multiple(_) => Err(SentenceError::CategoryShape {
                record: "NE",
                id: self.id,
            }),
        }
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    pub(crate) fn set_category(&mut self, category: Category) -> Result<()> {
        if !category.is_well_formed() {
            return Err(SentenceError::CategoryShape {
                record: "NE",
                id: self.id,
            });
        }
        self.category = category;
        Ok(())
    }
}

impl MorphRange for SpanEntity {
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

//! # ner-morph — Rótulos de NE por Morfema
//!
//! Este crate modela uma sentença com anotação linguística (morfemas, palavras
//! e NEs) e produz, para cada morfema, um rótulo no esquema **IOB**. Há duas
//! fontes de evidência:
//!
//! 1.  **Anotação** ([`sentence`]): os NEs que já vêm no registro da sentença.
//! 2.  **Dicionário** ([`gazette`]): entidades encontradas casando a sequência
//!     de morfemas com um gazetteer de superfícies conhecidas.
//!
//! ## Fluxo
//!
//! 1.  **Entrada**: registro JSON do analisador morfológico ([`record`]).
//! 2.  **Construção**: a [`Sentence`] monta os índices morfema → palavra e
//!     morfema → NE ([`index`]), imutáveis daí em diante.
//! 3.  **Gazetteer**: [`Sentence::tag_nes`] chama o [`Gazetteer`] e substitui
//!     o índice do dicionário.
//! 4.  **Consulta**: `label`, `dic_label`, `is_person` e a forma lexical
//!     ([`chars`]) alimentam o extrator de features.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use ner_morph::{Gazette, Sentence};
//!
//! let mut sent = Sentence::from_json(r#"{
//!     "id": 1,
//!     "word": [{"id": 0, "begin": 0, "end": 1}, {"id": 1, "begin": 2, "end": 3}],
//!     "morp": [{"id": 0, "lemma": "홍길동", "type": "NNP"},
//!              {"id": 1, "lemma": "이", "type": "JKS"},
//!              {"id": 2, "lemma": "서울", "type": "NNP"},
//!              {"id": 3, "lemma": "에", "type": "JKB"}],
//!     "NE": [{"id": 0, "text": "홍길동", "type": "PS", "begin": 0, "end": 0}]
//! }"#).unwrap();
//!
//! let mut gazette = Gazette::new();
//! gazette.insert("서울", "LC");
//! sent.tag_nes(&gazette, gazette.max_key_len()).unwrap();
//!
//! for morp in sent.morps() {
//!     println!(
//!         "{}\t{}\t{}\t{}",
//!         morp,
//!         morp.lex_form(),
//!         sent.label(morp.id()).unwrap(),
//!         sent.dic_label(morp.id()).unwrap(),
//!     );
//! }
//! assert_eq!(sent.dic_label(2).unwrap(), "B-LC");
//! assert!(sent.is_person(0));
//! ```
//!
//! ## Módulos Principais
//!
//! - [`sentence`]: a sentença e suas consultas.
//! - [`index`]: índices morfema → dono e o resolvedor de rótulos.
//! - [`entity`]: entidades de intervalo e categorias.
//! - [`gazette`]: contrato do gazetteer e dicionário embutido.

pub mod chars;
pub mod entity;
pub mod error;
pub mod gazette;
pub mod index;
pub mod morph;
pub mod record;
pub mod sentence;

pub use chars::{classify, lex_form, CharClass};
pub use entity::{Category, Iob, SpanEntity, PERSON_CATEGORY};
pub use error::{GazetteError, Result, SentenceError};
pub use gazette::{Gazette, GazetteConfig, GazetteMatch, Gazetteer};
pub use index::{label_of, MorphIndex};
pub use morph::{MorphRange, Morpheme, Word};
pub use sentence::{DictionaryIndex, Sentence};

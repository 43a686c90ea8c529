//! # Sentença Anotada
//!
//! Junta morfemas, palavras e NEs e mantém os índices morfema → dono:
//!
//! | Índice            | Construído em       | Mutável?                    |
//! |-------------------|---------------------|-----------------------------|
//! | morfema → palavra | construção          | não                         |
//! | morfema → NE      | construção          | não                         |
//! | morfema → NE dic. | [`Sentence::tag_nes`] | substituído a cada chamada |
//!
//! O índice do dicionário e sua lista de entidades formam uma única unidade
//! ([`DictionaryIndex`]): o par novo é construído por inteiro e só então
//! substitui o anterior. Como `tag_nes` exige `&mut self`, nenhuma consulta
//! pode observar um índice pela metade.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::entity::{Category, SpanEntity, PERSON_CATEGORY};
use crate::error::{Result, SentenceError};
use crate::gazette::{GazetteMatch, Gazetteer};
use crate::index::{label_of, MorphIndex};
use crate::morph::{MorphRange, Morpheme, Word};
use crate::record::{MorpRecord, NeRecord, SentenceRecord, WordRecord};

/// Entidades descobertas pelo gazetteer e seu índice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryIndex {
    nes: Vec<SpanEntity>,
    index: MorphIndex,
}

impl DictionaryIndex {
    /// Numera os casamentos em ordem (0, 1, 2...) e indexa sobre `morp_ids`.
    pub fn from_matches(morp_ids: &[usize], matches: Vec<GazetteMatch>) -> Result<Self> {
        let nes = matches
            .into_iter()
            .enumerate()
            .map(|(id, m)| {
                SpanEntity::new("gazette", id, m.text, Category::Single(m.category), m.begin, m.end)
            })
            .collect::<Result<Vec<_>>>()?;
        let index = MorphIndex::build(morp_ids, &nes);
        Ok(Self { nes, index })
    }

    pub fn nes(&self) -> &[SpanEntity] {
        &self.nes
    }

    pub fn index(&self) -> &MorphIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.nes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nes.is_empty()
    }
}

/// Uma sentença analisada, com rótulos IOB por morfema.
///
/// # Exemplo
///
/// ```rust
/// use ner_morph::Sentence;
///
/// let sent = Sentence::from_json(r#"{
///     "id": 0,
///     "word": [{"id": 1, "begin": 1, "end": 2}],
///     "morp": [{"id": 1, "lemma": "John", "type": "NNP"},
///              {"id": 2, "lemma": "는", "type": "JX"}],
///     "NE": [{"id": 0, "text": "John", "type": "PS", "begin": 1, "end": 1}]
/// }"#).unwrap();
///
/// assert_eq!(sent.label(1).unwrap(), "B-PS");
/// assert_eq!(sent.label(2).unwrap(), "O");
/// assert!(sent.is_person(1));
/// ```
#[derive(Debug, Clone)]
pub struct Sentence {
    id: usize,
    morps: Vec<Morpheme>,
    words: Vec<Word>,
    nes: Vec<SpanEntity>,
    /// morfema → palavra
    mid2wid: MorphIndex,
    /// morfema → NE da anotação
    mid2nid: MorphIndex,
    /// morfema → NE do dicionário
    dic: DictionaryIndex,
}

impl Sentence {
    /// Monta a sentença e constrói os índices de palavra e de NE.
    pub fn new(id: usize, morps: Vec<Morpheme>, words: Vec<Word>, nes: Vec<SpanEntity>) -> Self {
        let morp_ids = morp_ids(&morps);
        let mid2wid = MorphIndex::build(&morp_ids, &words);
        let mid2nid = MorphIndex::build(&morp_ids, &nes);
        Self {
            id,
            morps,
            words,
            nes,
            mid2wid,
            mid2nid,
            dic: DictionaryIndex::default(),
        }
    }

    /// Lê a sentença de um texto JSON no formato do analisador.
    pub fn from_json(text: &str) -> Result<Self> {
        let record: SentenceRecord = serde_json::from_str(text)?;
        Self::try_from(record)
    }

    /// Lê a sentença de um valor JSON já decodificado.
    pub fn from_value(value: Value) -> Result<Self> {
        let record: SentenceRecord = serde_json::from_value(value)?;
        Self::try_from(record)
    }

    /// Projeta de volta para o formato de registro.
    ///
    /// O campo `NE` é omitido quando não há entidades da anotação.
    pub fn to_record(&self) -> SentenceRecord {
        SentenceRecord {
            id: Some(self.id),
            word: Some(self.words.iter().map(WordRecord::from).collect()),
            morp: Some(self.morps.iter().map(MorpRecord::from).collect()),
            ne: if self.nes.is_empty() {
                None
            } else {
                Some(self.nes.iter().map(NeRecord::from).collect())
            },
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn morps(&self) -> &[Morpheme] {
        &self.morps
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// NEs da anotação
    pub fn nes(&self) -> &[SpanEntity] {
        &self.nes
    }

    /// NEs descobertos pelo último [`tag_nes`](Self::tag_nes) (vazio antes dele).
    pub fn dic_nes(&self) -> &[SpanEntity] {
        self.dic.nes()
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dic
    }

    pub fn word_index(&self) -> &MorphIndex {
        &self.mid2wid
    }

    pub fn ne_index(&self) -> &MorphIndex {
        &self.mid2nid
    }

    /// Palavra que contém o morfema.
    pub fn word_of(&self, morp_id: usize) -> Option<&Word> {
        self.mid2wid.owner(&self.words, morp_id)
    }

    /// Identidade da palavra que contém o morfema.
    pub fn wid_of(&self, morp_id: usize) -> Option<usize> {
        self.word_of(morp_id).map(Word::id)
    }

    /// NE da anotação que contém o morfema.
    pub fn ne_of(&self, morp_id: usize) -> Option<&SpanEntity> {
        self.mid2nid.owner(&self.nes, morp_id)
    }

    /// NE do dicionário que contém o morfema.
    pub fn dic_ne_of(&self, morp_id: usize) -> Option<&SpanEntity> {
        self.dic.index.owner(&self.dic.nes, morp_id)
    }

    /// Morfemas que nenhuma palavra cobre (vazio em entradas bem formadas).
    pub fn word_coverage_gaps(&self) -> Vec<usize> {
        self.morps
            .iter()
            .map(Morpheme::id)
            .filter(|id| !self.mid2wid.contains(*id))
            .collect()
    }

    /// Rótulo IOB do morfema segundo os NEs da anotação.
    pub fn label(&self, morp_id: usize) -> Result<String> {
        label_of(&self.mid2nid, &self.nes, morp_id)
    }

    /// Rótulo IOB do morfema segundo os NEs do dicionário.
    pub fn dic_label(&self, morp_id: usize) -> Result<String> {
        label_of(&self.dic.index, &self.dic.nes, morp_id)
    }

    /// Marca NEs na sentença com o gazetteer.
    ///
    /// Substitui por completo a lista e o índice do dicionário; nada da
    /// chamada anterior sobrevive. Erros do gazetteer são repassados como
    /// [`SentenceError::Gazetteer`] e deixam o estado anterior intacto.
    pub fn tag_nes<G: Gazetteer>(&mut self, gazetteer: &G, max_key_len: usize) -> Result<()> {
        let matches = gazetteer
            .match_entities(max_key_len, &self.morps)
            .map_err(|e| SentenceError::Gazetteer(Box::new(e)))?;
        let dic = DictionaryIndex::from_matches(&morp_ids(&self.morps), matches)?;
        debug!(sent_id = self.id, matches = dic.len(), max_key_len, "índice do dicionário substituído");
        self.dic = dic;
        Ok(())
    }

    /// Verifica se o morfema é, sozinho, uma pessoa (PS) da anotação.
    ///
    /// Falso sem NE, com outra categoria, com categoria múltipla ou com
    /// entidade de mais de um morfema.
    pub fn is_person(&self, morp_id: usize) -> bool {
        match self.ne_of(morp_id) {
            Some(entity) => {
                entity.category().is_single(PERSON_CATEGORY) && entity.begin() == entity.end()
            }
            None => false,
        }
    }

    /// Troca a categoria do NE na posição `position`.
    pub fn recategorize_ne(&mut self, position: usize, category: Category) -> Result<()> {
        self.nes
            .get_mut(position)
            .ok_or(SentenceError::UnknownEntity { position })?
            .set_category(category)
    }

    /// Renumera os NEs da anotação pela posição na lista (0, 1, 2...).
    pub fn renumber_nes(&mut self) {
        for (pos, entity) in self.nes.iter_mut().enumerate() {
            entity.set_id(pos);
        }
    }

    /// Representação para depuração: `[id] id:lema/tag id:lema/tag ...`
    pub fn to_dbg_str(&self) -> String {
        let morps: Vec<String> = self.morps.iter().map(Morpheme::to_dbg_str).collect();
        format!("[{}] {}", self.id, morps.join(" "))
    }
}

fn morp_ids(morps: &[Morpheme]) -> Vec<usize> {
    morps.iter().map(Morpheme::id).collect()
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dbg_str())
    }
}

impl TryFrom<SentenceRecord> for Sentence {
    type Error = SentenceError;

    fn try_from(rec: SentenceRecord) -> Result<Self> {
        let missing = |field| SentenceError::MissingField {
            record: "sentence",
            id: rec.id,
            field,
        };
        let id = rec.id.ok_or_else(|| missing("id"))?;
        let words = rec
            .word
            .ok_or_else(|| missing("word"))?
            .into_iter()
            .map(Word::try_from)
            .collect::<Result<Vec<_>>>()?;
        let morps = rec
            .morp
            .ok_or_else(|| missing("morp"))?
            .into_iter()
            .map(Morpheme::try_from)
            .collect::<Result<Vec<_>>>()?;
        let nes = rec
            .ne
            .unwrap_or_default()
            .into_iter()
            .map(SpanEntity::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(id, morps, words, nes))
    }
}

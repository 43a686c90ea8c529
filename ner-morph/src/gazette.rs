//! # Gazetteer — Dicionário de Entidades Conhecidas
//!
//! A sentença não conhece o algoritmo de casamento: ela só chama o trait
//! [`Gazetteer`] com o comprimento máximo de chave e a sequência de morfemas,
//! e recebe de volta os intervalos descobertos ([`GazetteMatch`]).
//!
//! [`Gazette`] é a implementação embutida: um dicionário de superfícies
//! (sequências de lemas) para categorias, com casamento guloso pelo
//! **maior prefixo** da esquerda para a direita.
//!
//! ## Formato do arquivo
//!
//! ```text
//! # superfície<TAB>categoria
//! 서울 대학교	OG
//! 홍길동	PS
//! ```
//!
//! Lemas de uma superfície são separados por espaço: `"서울 대학교"` casa com
//! dois morfemas consecutivos `서울` + `대학교`.

use std::collections::HashMap;
use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GazetteError;
use crate::morph::Morpheme;

/// Uma entidade descoberta pelo gazetteer.
///
/// Mesmo formato de um NE da anotação, mas sempre com uma única categoria
/// e sem identidade: a sentença numera os casamentos em ordem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteMatch {
    /// Lemas casados, como aparecem na sentença, unidos por espaço (opcional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Categoria da entrada do dicionário.
    #[serde(rename = "type")]
    pub category: String,
    /// Identidade do primeiro morfema (inclusivo).
    pub begin: usize,
    /// Identidade do último morfema (inclusivo).
    pub end: usize,
}

/// Colaborador externo que encontra entidades na sequência de morfemas.
///
/// A saída deve ser determinística para a mesma entrada.
pub trait Gazetteer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Procura entidades em `morps`.
    ///
    /// `max_key_len` limita quantos morfemas consecutivos uma chave pode cobrir.
    fn match_entities(
        &self,
        max_key_len: usize,
        morps: &[Morpheme],
    ) -> Result<Vec<GazetteMatch>, Self::Error>;
}

/// Opções do dicionário embutido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GazetteConfig {
    /// Compara chaves e lemas em minúsculas.
    pub lowercase: bool,
    /// Teto aplicado sobre o `max_key_len` recebido na consulta.
    pub max_key_len: Option<usize>,
}

impl Default for GazetteConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            max_key_len: None,
        }
    }
}

/// Dicionário de superfícies → categoria.
#[derive(Debug, Clone, Default)]
pub struct Gazette {
    /// Chave: lemas unidos por um espaço.
    entries: HashMap<String, String>,
    /// Maior entrada, em número de morfemas.
    longest: usize,
    config: GazetteConfig,
}

impl Gazette {
    pub fn new() -> Self {
        Self::with_config(GazetteConfig::default())
    }

    pub fn with_config(config: GazetteConfig) -> Self {
        Self {
            entries: HashMap::new(),
            longest: 0,
            config,
        }
    }

    /// Carrega linhas `superfície<TAB>categoria` com as opções padrão.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GazetteError> {
        let mut gazette = Self::new();
        gazette.load(reader)?;
        Ok(gazette)
    }

    /// Acrescenta as entradas de `reader`.
    ///
    /// Linhas vazias ou iniciadas por `#` são ignoradas.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<(), GazetteError> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let malformed = || GazetteError::MalformedLine {
                line: i + 1,
                content: line.clone(),
            };
            let (surface, category) = trimmed.split_once('\t').ok_or_else(malformed)?;
            let (surface, category) = (surface.trim(), category.trim());
            if surface.is_empty() || category.is_empty() {
                return Err(malformed());
            }
            self.insert(surface, category);
        }
        debug!(entries = self.len(), longest = self.longest, "gazetteer carregado");
        Ok(())
    }

    /// Insere uma superfície; repetir a chave substitui a categoria.
    pub fn insert(&mut self, surface: &str, category: &str) {
        let parts: Vec<String> = surface
            .split_whitespace()
            .map(|p| self.normalize(p))
            .collect();
        if parts.is_empty() {
            return;
        }
        self.longest = self.longest.max(parts.len());
        self.entries.insert(parts.join(" "), category.to_string());
    }

    /// Categoria de uma superfície, se presente.
    pub fn get(&self, surface: &str) -> Option<&str> {
        let key = surface
            .split_whitespace()
            .map(|p| self.normalize(p))
            .collect::<Vec<_>>()
            .join(" ");
        self.entries.get(&key).map(String::as_str)
    }

    /// Maior entrada do dicionário, em morfemas.
    pub fn max_key_len(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &GazetteConfig {
        &self.config
    }

    fn normalize(&self, text: &str) -> String {
        if self.config.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }

    fn window(&self, max_key_len: usize) -> usize {
        match self.config.max_key_len {
            Some(cap) => max_key_len.min(cap),
            None => max_key_len,
        }
    }
}

impl Gazetteer for Gazette {
    type Error = GazetteError;

    /// Casamento guloso pelo maior prefixo, da esquerda para a direita.
    fn match_entities(
        &self,
        max_key_len: usize,
        morps: &[Morpheme],
    ) -> Result<Vec<GazetteMatch>, GazetteError> {
        let window = self.window(max_key_len);
        // Lema com espaço interno não pode compor chave
        let keys: Vec<Option<String>> = morps
            .iter()
            .map(|m| {
                let lemma = m.lemma();
                if lemma.contains(char::is_whitespace) {
                    None
                } else {
                    Some(self.normalize(lemma))
                }
            })
            .collect();
        let mut found = Vec::new();
        let mut i = 0;

        while i < morps.len() {
            let longest = window.min(morps.len() - i);
            let hit = (1..=longest).rev().find_map(|len| {
                let parts = keys[i..i + len]
                    .iter()
                    .map(Option::as_deref)
                    .collect::<Option<Vec<&str>>>()?;
                self.entries
                    .get(&parts.join(" "))
                    .map(|category| (len, category.clone()))
            });
            match hit {
                Some((len, category)) => {
                    let text = morps[i..i + len]
                        .iter()
                        .map(Morpheme::lemma)
                        .collect::<Vec<_>>()
                        .join(" ");
                    found.push(GazetteMatch {
                        text: Some(text),
                        category,
                        begin: morps[i].id(),
                        end: morps[i + len - 1].id(),
                    });
                    i += len;
                }
                None => i += 1,
            }
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morps(lemmas: &[&str]) -> Vec<Morpheme> {
        lemmas
            .iter()
            .enumerate()
            .map(|(i, l)| Morpheme::new(i, *l, "NNP"))
            .collect()
    }

    #[test]
    fn test_longest_match_wins() {
        let mut gaz = Gazette::new();
        gaz.insert("서울", "LC");
        gaz.insert("서울 대학교", "OG");

        let found = gaz
            .match_entities(gaz.max_key_len(), &morps(&["서울", "대학교", "에", "서울"]))
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].category, "OG");
        assert_eq!((found[0].begin, found[0].end), (0, 1));
        assert_eq!(found[1].category, "LC");
        assert_eq!((found[1].begin, found[1].end), (3, 3));
    }

    #[test]
    fn test_max_key_len_bounds_window() {
        let mut gaz = Gazette::new();
        gaz.insert("서울", "LC");
        gaz.insert("서울 대학교", "OG");

        let found = gaz.match_entities(1, &morps(&["서울", "대학교"])).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "LC");
    }

    #[test]
    fn test_config_cap_and_case() {
        let mut gaz = Gazette::with_config(GazetteConfig {
            lowercase: false,
            max_key_len: Some(1),
        });
        gaz.insert("New York", "LC");
        gaz.insert("john", "PS");

        let found = gaz.match_entities(5, &morps(&["New", "York", "John"])).unwrap();
        assert!(found.is_empty());

        let gaz_lower = {
            let mut g = Gazette::new();
            g.insert("john", "PS");
            g
        };
        let found = gaz_lower.match_entities(5, &morps(&["John"])).unwrap();
        assert_eq!(found[0].text.as_deref(), Some("John"));
    }

    #[test]
    fn test_match_text_keeps_sentence_lemmas() {
        let mut gaz = Gazette::new();
        gaz.insert("new york", "LC");
        let found = gaz.match_entities(2, &morps(&["New", "York"])).unwrap();
        assert_eq!(found[0].text.as_deref(), Some("New York"));
        assert_eq!(found[0].category, "LC");
    }

    #[test]
    fn test_lemma_with_whitespace_never_matches() {
        let mut gaz = Gazette::new();
        gaz.insert("서울 대학교", "OG");
        gaz.insert("서울", "LC");

        let found = gaz.match_entities(2, &morps(&["서울 대학교"])).unwrap();
        assert!(found.is_empty());

        // Os vizinhos continuam casando normalmente
        let found = gaz
            .match_entities(2, &morps(&["서울 대학교", "서울", "대학교"]))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "OG");
        assert_eq!((found[0].begin, found[0].end), (1, 2));
    }

    #[test]
    fn test_uses_morpheme_ids() {
        let mut gaz = Gazette::new();
        gaz.insert("홍길동", "PS");
        let sent = vec![Morpheme::new(10, "홍길동", "NNP"), Morpheme::new(11, "이", "JKS")];
        let found = gaz.match_entities(3, &sent).unwrap();
        assert_eq!((found[0].begin, found[0].end), (10, 10));
    }

    #[test]
    fn test_from_reader() {
        let data = "# comentário\n서울 대학교\tOG\n\n홍길동\tPS\n";
        let gaz = Gazette::from_reader(data.as_bytes()).unwrap();
        assert_eq!(gaz.len(), 2);
        assert_eq!(gaz.max_key_len(), 2);
        assert_eq!(gaz.get("서울  대학교"), Some("OG"));
        assert_eq!(gaz.get("홍길동"), Some("PS"));
    }

    #[test]
    fn test_from_reader_malformed_line() {
        let data = "홍길동\tPS\n서울 LC\n";
        let err = Gazette::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, GazetteError::MalformedLine { line: 2, .. }));

        let err = Gazette::from_reader("홍길동\t \n".as_bytes()).unwrap_err();
        assert!(matches!(err, GazetteError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_deterministic_output() {
        let mut gaz = Gazette::new();
        gaz.insert("a", "X");
        gaz.insert("b c", "Y");
        let sent = morps(&["a", "b", "c", "a"]);
        assert_eq!(
            gaz.match_entities(3, &sent).unwrap(),
            gaz.match_entities(3, &sent).unwrap()
        );
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let cfg: GazetteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GazetteConfig::default());
        let cfg: GazetteConfig = serde_json::from_str(r#"{"max_key_len": 4}"#).unwrap();
        assert!(cfg.lowercase);
        assert_eq!(cfg.max_key_len, Some(4));
    }
}

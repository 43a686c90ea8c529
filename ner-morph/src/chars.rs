//! # Classificador de Caracteres
//!
//! Reduz cada caractere de um lema a uma classe grosseira, usada para montar
//! a **forma lexical** do morfema (uma assinatura de "formato" para features).
//!
//! | Classe   | Faixa                                   | Glifo |
//! |----------|-----------------------------------------|-------|
//! | Hangul   | U+1100–U+11FF (Jamo), U+AC00–U+D7AF     | `가`  |
//! | Latin    | `a`–`z`, `A`–`Z` (apenas ASCII)          | `A`   |
//! | Digit    | `0`–`9` (apenas ASCII)                   | `0`   |
//! | Cjk      | U+4E00–U+9FFF (Ideogramas Unificados)   | `漢`  |
//! | Other    | qualquer outro                          | `.`   |
//!
//! ## Exemplo
//!
//! ```rust
//! use ner_morph::chars::{classify, lex_form, CharClass};
//!
//! assert_eq!(classify('가'), CharClass::Hangul);
//! assert_eq!(lex_form("A가1中!"), "A가0漢.");
//! ```

use serde::{Deserialize, Serialize};

/// Classe de um caractere para fins de forma lexical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    /// Jamo ou sílaba Hangul.
    Hangul,
    /// Letra latina ASCII.
    Latin,
    /// Dígito ASCII.
    Digit,
    /// Ideograma CJK unificado.
    Cjk,
    /// Qualquer outro caractere (pontuação, espaço, símbolos...).
    Other,
}

impl CharClass {
    /// Glifo representativo da classe na forma lexical.
    pub fn glyph(&self) -> char {
        match self {
            CharClass::Hangul => '가',
            CharClass::Latin => 'A',
            CharClass::Digit => '0',
            CharClass::Cjk => '漢',
            CharClass::Other => '.',
        }
    }
}

/// Classifica um caractere. Função total: nunca falha.
pub fn classify(c: char) -> CharClass {
    if is_hangul(c) {
        CharClass::Hangul
    } else if c.is_ascii_alphabetic() {
        CharClass::Latin
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if is_cjk(c) {
        CharClass::Cjk
    } else {
        CharClass::Other
    }
}

/// Verifica se o caractere é Hangul (Jamo ou sílaba)
pub fn is_hangul(c: char) -> bool {
    matches!(c as u32, 0x1100..=0x11FF | 0xAC00..=0xD7AF)
}

/// Verifica se o caractere é um ideograma CJK unificado
pub fn is_cjk(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FFF)
}

/// Gera a forma lexical de um texto: um glifo por caractere, na ordem original.
///
/// O resultado tem sempre o mesmo número de caracteres da entrada.
pub fn lex_form(text: &str) -> String {
    text.chars().map(|c| classify(c).glyph()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_class() {
        assert_eq!(classify('가'), CharClass::Hangul);
        assert_eq!(classify('A'), CharClass::Latin);
        assert_eq!(classify('z'), CharClass::Latin);
        assert_eq!(classify('5'), CharClass::Digit);
        assert_eq!(classify('中'), CharClass::Cjk);
        assert_eq!(classify('!'), CharClass::Other);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(classify('\u{1100}'), CharClass::Hangul);
        assert_eq!(classify('\u{11FF}'), CharClass::Hangul);
        assert_eq!(classify('\u{D7AF}'), CharClass::Hangul);
        assert_eq!(classify('\u{D7B0}'), CharClass::Other);
        assert_eq!(classify('\u{4E00}'), CharClass::Cjk);
        assert_eq!(classify('\u{9FFF}'), CharClass::Cjk);
        // Letras latinas fora do ASCII não contam como Latin
        assert_eq!(classify('é'), CharClass::Other);
        // Dígitos de largura total também não
        assert_eq!(classify('５'), CharClass::Other);
    }

    #[test]
    fn test_lex_form() {
        assert_eq!(lex_form("A가1中!"), "A가0漢.");
        assert_eq!(lex_form("서울2024"), "가가0000");
        assert_eq!(lex_form(""), "");
    }

    #[test]
    fn test_lex_form_preserves_length() {
        let text = "John은 漢字를 3번 읽었다.";
        assert_eq!(lex_form(text).chars().count(), text.chars().count());
    }
}

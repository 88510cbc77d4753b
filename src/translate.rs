//! Lexical word-by-word substitution between supported languages.
//!
//! This is a dictionary lookup, not translation: grammar, word order and
//! idioms are left alone, and unknown words pass through unchanged.
//! Capitalization and punctuation around each word are kept.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::templates::Language;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("word pattern is valid"));

/// Columns follow `Language::ALL`: pt, en, es, de, fr.
const DICTIONARY: &[[&str; 5]] = &[
    ["vida", "life", "vida", "leben", "vie"],
    ["tempo", "time", "tiempo", "zeit", "temps"],
    ["mundo", "world", "mundo", "welt", "monde"],
    ["dinheiro", "money", "dinero", "geld", "argent"],
    ["trabalho", "work", "trabajo", "arbeit", "travail"],
    ["casa", "house", "casa", "haus", "maison"],
    ["família", "family", "familia", "familie", "famille"],
    ["amigo", "friend", "amigo", "freund", "ami"],
    ["amigos", "friends", "amigos", "freunde", "amis"],
    ["pessoa", "person", "persona", "person", "personne"],
    ["pessoas", "people", "personas", "menschen", "gens"],
    ["dia", "day", "día", "tag", "jour"],
    ["noite", "night", "noche", "nacht", "nuit"],
    ["história", "story", "historia", "geschichte", "histoire"],
    ["sonho", "dream", "sueño", "traum", "rêve"],
    ["amor", "love", "amor", "liebe", "amour"],
    ["medo", "fear", "miedo", "angst", "peur"],
    ["sucesso", "success", "éxito", "erfolg", "succès"],
    ["saúde", "health", "salud", "gesundheit", "santé"],
    ["corpo", "body", "cuerpo", "körper", "corps"],
    ["mente", "mind", "mente", "geist", "esprit"],
    ["água", "water", "agua", "wasser", "eau"],
    ["comida", "food", "comida", "essen", "nourriture"],
    ["livro", "book", "libro", "buch", "livre"],
    ["cidade", "city", "ciudad", "stadt", "ville"],
    ["caminho", "path", "camino", "weg", "chemin"],
    ["problema", "problem", "problema", "problem", "problème"],
    ["solução", "solution", "solución", "lösung", "solution"],
    ["ideia", "idea", "idea", "idee", "idée"],
    ["segredo", "secret", "secreto", "geheimnis", "secret"],
    ["verdade", "truth", "verdad", "wahrheit", "vérité"],
    ["hoje", "today", "hoy", "heute", "aujourd'hui"],
    ["amanhã", "tomorrow", "mañana", "morgen", "demain"],
    ["sempre", "always", "siempre", "immer", "toujours"],
    ["nunca", "never", "nunca", "nie", "jamais"],
    ["agora", "now", "ahora", "jetzt", "maintenant"],
    ["muito", "very", "muy", "sehr", "très"],
    ["grande", "big", "grande", "groß", "grand"],
    ["pequeno", "small", "pequeño", "klein", "petit"],
    ["novo", "new", "nuevo", "neu", "nouveau"],
    ["velho", "old", "viejo", "alt", "vieux"],
    ["bom", "good", "bueno", "gut", "bon"],
    ["mau", "bad", "malo", "schlecht", "mauvais"],
    ["feliz", "happy", "feliz", "glücklich", "heureux"],
    ["triste", "sad", "triste", "traurig", "triste"],
    ["fácil", "easy", "fácil", "einfach", "facile"],
    ["difícil", "hard", "difícil", "schwer", "difficile"],
    ["primeiro", "first", "primero", "erste", "premier"],
    ["último", "last", "último", "letzte", "dernier"],
    ["e", "and", "y", "und", "et"],
    ["ou", "or", "o", "oder", "ou"],
    ["mas", "but", "pero", "aber", "mais"],
    ["com", "with", "con", "mit", "avec"],
    ["sem", "without", "sin", "ohne", "sans"],
    ["para", "for", "para", "für", "pour"],
    ["você", "you", "tú", "du", "tu"],
    ["eu", "i", "yo", "ich", "je"],
    ["nós", "we", "nosotros", "wir", "nous"],
    ["eles", "they", "ellos", "sie", "ils"],
    ["não", "not", "no", "nicht", "pas"],
    ["sim", "yes", "sí", "ja", "oui"],
    ["ser", "be", "ser", "sein", "être"],
    ["ter", "have", "tener", "haben", "avoir"],
    ["fazer", "do", "hacer", "machen", "faire"],
    ["saber", "know", "saber", "wissen", "savoir"],
    ["querer", "want", "querer", "wollen", "vouloir"],
    ["aprender", "learn", "aprender", "lernen", "apprendre"],
    ["mudar", "change", "cambiar", "ändern", "changer"],
    ["começar", "start", "empezar", "anfangen", "commencer"],
    ["viver", "live", "vivir", "leben", "vivre"],
];

/// language → lower-cased word → dictionary row.
static INDEX: LazyLock<HashMap<Language, HashMap<&'static str, usize>>> = LazyLock::new(|| {
    let mut index: HashMap<Language, HashMap<&'static str, usize>> = HashMap::new();
    for (row, words) in DICTIONARY.iter().enumerate() {
        for (column, language) in Language::ALL.into_iter().enumerate() {
            // first row wins for words shared by several entries
            index
                .entry(language)
                .or_default()
                .entry(words[column])
                .or_insert(row);
        }
    }
    index
});

fn column(language: Language) -> usize {
    Language::ALL
        .iter()
        .position(|&l| l == language)
        .unwrap_or_default()
}

/// Translates one word, or returns `None` when it is not in the dictionary.
pub fn translate_word(word: &str, from: Language, to: Language) -> Option<String> {
    let lowered = word.to_lowercase();
    let row = *INDEX.get(&from)?.get(lowered.as_str())?;
    let target = DICTIONARY[row][column(to)];
    Some(match_case(word, target))
}

/// Applies the casing pattern of `original` to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = original.chars();
    let Some(first) = chars.next() else {
        return replacement.to_string();
    };
    let rest_upper = chars.clone().any(char::is_alphabetic)
        && chars.filter(|c| c.is_alphabetic()).all(char::is_uppercase);
    if first.is_uppercase() && rest_upper {
        replacement.to_uppercase()
    } else if first.is_uppercase() {
        let mut out = String::with_capacity(replacement.len());
        let mut rep = replacement.chars();
        if let Some(c) = rep.next() {
            out.extend(c.to_uppercase());
        }
        out.extend(rep);
        out
    } else {
        replacement.to_string()
    }
}

/// Substitutes every known word of `text` from one language into another.
pub fn translate_text(text: &str, from: Language, to: Language) -> String {
    if from == to {
        return text.to_string();
    }
    WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        translate_word(word, from, to).unwrap_or_else(|| word.to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_word() {
        assert_eq!(translate_word("vida", Language::Pt, Language::En).as_deref(), Some("life"));
        assert_eq!(translate_word("Vida", Language::Pt, Language::Fr).as_deref(), Some("Vie"));
        assert_eq!(translate_word("AMOR", Language::Pt, Language::De).as_deref(), Some("LIEBE"));
        assert_eq!(translate_word("xyzzy", Language::Pt, Language::En), None);
    }

    #[test]
    fn test_translate_between_non_default_languages() {
        assert_eq!(translate_word("world", Language::En, Language::Es).as_deref(), Some("mundo"));
        assert_eq!(translate_word("Zeit", Language::De, Language::Pt).as_deref(), Some("Tempo"));
    }

    #[test]
    fn test_translate_text_keeps_punctuation_and_unknowns() {
        let out = translate_text("Hoje, o amor muda tudo!", Language::Pt, Language::En);
        assert_eq!(out, "Today, o love muda tudo!");
    }

    #[test]
    fn test_translate_text_same_language_is_identity() {
        let text = "Nada muda aqui.";
        assert_eq!(translate_text(text, Language::Pt, Language::Pt), text);
    }

    #[test]
    fn test_word_count_is_preserved() {
        let text = "A vida é um livro e o tempo é o caminho";
        let out = translate_text(text, Language::Pt, Language::De);
        assert_eq!(
            out.split_whitespace().count(),
            text.split_whitespace().count()
        );
    }
}

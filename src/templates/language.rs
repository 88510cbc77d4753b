//! Supported script languages and the single fallback rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ScriptError, ScriptResult};

/// A language with a complete template bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
    De,
    Fr,
}

impl Language {
    /// Language used whenever a requested code is not supported.
    pub const DEFAULT: Language = Language::Pt;

    /// Every language with a template bank.
    pub const ALL: [Language; 5] = [
        Language::Pt,
        Language::En,
        Language::Es,
        Language::De,
        Language::Fr,
    ];

    /// Resolves a language code, falling back to [`Language::DEFAULT`].
    ///
    /// This is the only place the fallback happens. Components receive a
    /// resolved `Language`, so a script can never mix banks.
    ///
    /// Accepts bare codes (`"en"`) and regional tags (`"en-US"`, `"pt_BR"`),
    /// case-insensitively.
    pub fn resolve(code: &str) -> Language {
        Self::parse_strict(code).unwrap_or(Self::DEFAULT)
    }

    /// Parses a language code without falling back.
    pub fn parse_strict(code: &str) -> ScriptResult<Language> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            _ => Err(ScriptError::unsupported_language(code)),
        }
    }

    /// Two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    /// Placeholder (domain, sub-domain, micro-sub-domain) used when no niche
    /// was identified for the source text.
    pub fn placeholder_niche(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Language::Pt => ("Conteúdo", "Conhecimento geral", "este tema"),
            Language::En => ("Content", "General knowledge", "this topic"),
            Language::Es => ("Contenido", "Conocimiento general", "este tema"),
            Language::De => ("Inhalt", "Allgemeinwissen", "dieses Thema"),
            Language::Fr => ("Contenu", "Culture générale", "ce sujet"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Lenient: unknown codes deserialize to the default language.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::resolve(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(Language::resolve("en"), Language::En);
        assert_eq!(Language::resolve("ES"), Language::Es);
        assert_eq!(Language::resolve("pt-BR"), Language::Pt);
        assert_eq!(Language::resolve("fr_CA"), Language::Fr);
        assert_eq!(Language::resolve(" de "), Language::De);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Language::resolve("xx"), Language::DEFAULT);
        assert_eq!(Language::resolve(""), Language::DEFAULT);
        assert_eq!(Language::resolve("klingon"), Language::Pt);
    }

    #[test]
    fn test_parse_strict_rejects_unknown() {
        assert!(Language::parse_strict("it").is_err());
        assert!("jp".parse::<Language>().is_err());
        assert_eq!("en-GB".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_serde_is_lenient() {
        let lang: Language = serde_json::from_str("\"zz\"").unwrap();
        assert_eq!(lang, Language::Pt);
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
    }
}

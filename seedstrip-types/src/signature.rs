use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one typed array declaration, e.g. `demoItems: Item`.
///
/// The pair is expected to match at most one declaration per file. A
/// signature that matches nothing is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignatureRepr")]
pub struct DeclarationSignature {
    pub name: String,
    pub element_type: String,
}

impl DeclarationSignature {
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_type: element_type.into(),
        }
    }

    /// Literal token sequence that opens the declaration, ending at the
    /// element list's opening bracket.
    pub fn anchor(&self) -> String {
        format!("{}: {}[] = [", self.name, self.element_type)
    }

    /// The declaration as it reads once its element list has been emptied.
    pub fn empty_declaration(&self) -> String {
        format!("{}: {}[] = [];", self.name, self.element_type)
    }

    /// Check that the signature can form an unambiguous anchor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::InvalidName {
                name: self.name.clone(),
                reason: "name is empty",
            });
        }
        if !is_identifier(&self.name) {
            return Err(ConfigError::InvalidName {
                name: self.name.clone(),
                reason: "name is not an identifier",
            });
        }

        let ty = self.element_type.as_str();
        if ty.trim().is_empty() {
            return Err(ConfigError::InvalidElementType {
                name: self.name.clone(),
                element_type: ty.to_string(),
                reason: "element type is empty",
            });
        }
        if ty != ty.trim() || ty.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidElementType {
                name: self.name.clone(),
                element_type: ty.to_string(),
                reason: "element type has surrounding or embedded line whitespace",
            });
        }
        if ty.contains(['[', ']', '=', ';']) {
            return Err(ConfigError::InvalidElementType {
                name: self.name.clone(),
                element_type: ty.to_string(),
                reason: "element type contains '[', ']', '=' or ';'",
            });
        }

        Ok(())
    }
}

impl fmt::Display for DeclarationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.element_type)
    }
}

/// Parses the `name: Type` shorthand.
impl FromStr for DeclarationSignature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedSignature {
            input: s.to_string(),
        };

        let (name, ty) = s.split_once(':').ok_or_else(malformed)?;
        let (name, ty) = (name.trim(), ty.trim());
        if name.is_empty() || ty.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(name, ty))
    }
}

/// Accepted on-disk spellings of a signature.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignatureRepr {
    Short(String),
    Full { name: String, element_type: String },
}

impl TryFrom<SignatureRepr> for DeclarationSignature {
    type Error = ConfigError;

    fn try_from(repr: SignatureRepr) -> Result<Self, Self::Error> {
        match repr {
            SignatureRepr::Short(s) => s.parse(),
            SignatureRepr::Full { name, element_type } => Ok(Self::new(name, element_type)),
        }
    }
}

/// True for characters that may continue an identifier in the rewritten
/// sources (`$` and `_` included).
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => chars.all(is_identifier_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_and_empty_declaration_share_prefix() {
        let sig = DeclarationSignature::new("demoItems", "Item");
        assert_eq!(sig.anchor(), "demoItems: Item[] = [");
        assert_eq!(sig.empty_declaration(), "demoItems: Item[] = [];");
        assert!(sig.empty_declaration().starts_with(&sig.anchor()));
    }

    #[test]
    fn parses_shorthand_with_loose_spacing() {
        let sig: DeclarationSignature = "demoTickets :SupportTicket".parse().unwrap();
        assert_eq!(sig, DeclarationSignature::new("demoTickets", "SupportTicket"));
        assert_eq!(sig.to_string(), "demoTickets: SupportTicket");
    }

    #[test]
    fn rejects_shorthand_without_colon() {
        let err = "demoTickets".parse::<DeclarationSignature>().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedSignature { .. }));
    }

    #[test]
    fn rejects_shorthand_with_empty_side() {
        assert!(": Item".parse::<DeclarationSignature>().is_err());
        assert!("demoItems:".parse::<DeclarationSignature>().is_err());
    }

    #[test]
    fn validate_accepts_generic_and_namespaced_types() {
        DeclarationSignature::new("$rows", "Record<string, number>")
            .validate()
            .unwrap();
        DeclarationSignature::new("_items", "api.Item")
            .validate()
            .unwrap();
    }

    #[test]
    fn validate_rejects_non_identifier_name() {
        let err = DeclarationSignature::new("demo-items", "Item")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("demo-items"));

        assert!(DeclarationSignature::new("1st", "Item").validate().is_err());
        assert!(DeclarationSignature::new("", "Item").validate().is_err());
    }

    #[test]
    fn validate_rejects_bracketed_or_multiline_type() {
        assert!(DeclarationSignature::new("demo", "Item[]").validate().is_err());
        assert!(DeclarationSignature::new("demo", "It\nem").validate().is_err());
        assert!(DeclarationSignature::new("demo", " Item").validate().is_err());
        assert!(DeclarationSignature::new("demo", "").validate().is_err());
    }
}

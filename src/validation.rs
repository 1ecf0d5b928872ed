//! Every rule runs on every submit so all violations show at once.

use std::fmt;

/// One named check over a candidate title.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn includes_vue(value: &str) -> bool {
    value.to_lowercase().contains("vue")
}

/// Full match of `[A-Za-z0-9 ]*`; the empty string passes.
pub fn no_symbols_included(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

pub static TITLE_RULES: [Rule; 3] = [
    Rule {
        name: "required",
        message: "Title is required",
        check: required,
    },
    Rule {
        name: "includesVue",
        message: "Title must include \"Vue\"",
        check: includes_vue,
    },
    Rule {
        name: "noSymbolsIncluded",
        message: "Title cannot contain symbols",
        check: no_symbols_included,
    },
];

/// The rules a title failed, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleErrors {
    failed: Vec<&'static Rule>,
}

impl TitleErrors {
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.failed.iter().map(|rule| rule.message)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.failed.iter().map(|rule| rule.name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.failed.iter().any(|rule| rule.name == name)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Rule {}

impl fmt::Display for TitleErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.messages().collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for TitleErrors {}

/// A title that satisfied every rule in [`TITLE_RULES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn parse(value: &str) -> Result<Self, TitleErrors> {
        let failed: Vec<&'static Rule> = TITLE_RULES
            .iter()
            .filter(|rule| !rule.passes(value))
            .collect();

        if failed.is_empty() {
            Ok(Self(value.to_string()))
        } else {
            Err(TitleErrors { failed })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

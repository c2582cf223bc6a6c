//! `__NAME__` placeholder substitution for compiled-in assets.

use std::marker::PhantomData;

/// Values for a template's placeholders.
pub trait TemplateVars {
    /// `(NAME, value)` pairs, `NAME` written without the surrounding `__`.
    fn values(&self) -> Vec<(&'static str, String)>;
}

/// Source text whose placeholders are filled from `V`.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    source: &'static str,
    _vars: PhantomData<fn(&V)>,
}

impl<V: TemplateVars> Template<V> {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            _vars: PhantomData,
        }
    }

    pub fn render(&self, vars: &V) -> String {
        vars.values()
            .into_iter()
            .fold(self.source.to_owned(), |text, (name, value)| {
                text.replace(&format!("__{name}__"), &value)
            })
    }
}

/// Placeholder names still present in `text`.
pub fn unfilled(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("__") {
        rest = &rest[open + 2..];
        let Some(close) = rest.find("__") else { break };
        let name = &rest[..close];
        if !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
        {
            names.push(name);
            rest = &rest[close + 2..];
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Colors;

    impl TemplateVars for Colors {
        fn values(&self) -> Vec<(&'static str, String)> {
            vec![("ACCENT", "#ff6b9d".into()), ("INK", "#333".into())]
        }
    }

    #[test]
    fn test_render_fills_every_occurrence() {
        let tpl: Template<Colors> = Template::new("a{color:__ACCENT__}b{color:__ACCENT__;border:__INK__}");
        assert_eq!(
            tpl.render(&Colors),
            "a{color:#ff6b9d}b{color:#ff6b9d;border:#333}"
        );
    }

    #[test]
    fn test_unfilled() {
        assert_eq!(unfilled("x = __SCROLL_THRESHOLD__; y = __OPEN__"), ["SCROLL_THRESHOLD", "OPEN"]);
        assert!(unfilled("obj.__proto__ and a__b").is_empty());
        assert!(unfilled("nothing here").is_empty());
    }
}

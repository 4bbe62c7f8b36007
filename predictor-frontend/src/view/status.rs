use std::collections::BTreeSet;

pub const CHECKING_TEXT: &str = "Checking API status...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndicatorClass {
    Online,
    Offline,
}

impl IndicatorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorClass::Online => "online",
            IndicatorClass::Offline => "offline",
        }
    }
}

/// The `status-indicator` dot and the `status-text` next to it.
///
/// Classes behave like a DOM class list: adding is idempotent and nothing is
/// ever removed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusIndicator {
    classes: BTreeSet<IndicatorClass>,
    text: String,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            classes: BTreeSet::new(),
            text: CHECKING_TEXT.to_string(),
        }
    }

    pub fn mark(&mut self, class: IndicatorClass) {
        self.classes.insert(class);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has(&self, class: IndicatorClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn is_online(&self) -> bool {
        self.has(IndicatorClass::Online)
    }

    pub fn is_offline(&self) -> bool {
        self.has(IndicatorClass::Offline)
    }

    /// `class` attribute for the `.dot` element.
    pub fn dot_class(&self) -> String {
        std::iter::once("dot")
            .chain(self.classes.iter().map(IndicatorClass::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}

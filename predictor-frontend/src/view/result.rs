/// The `result` container and its `prediction-value` display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    value: Option<String>,
    hidden: bool,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self {
            value: None,
            hidden: true,
        }
    }

    /// Write a prediction into the display and reveal the container.
    pub fn show(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
        self.hidden = false;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn css_class(&self) -> &'static str {
        if self.hidden { "result hidden" } else { "result" }
    }
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking user-facing alerts raised while handling a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertLog {
    messages: Vec<String>,
}

impl AlertLog {
    pub fn alert(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

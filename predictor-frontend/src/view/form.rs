use crate::models::PredictionForm;

pub const SUBMIT_LABEL: &str = "Predict Notification Time";
pub const PREDICTING_LABEL: &str = "Predicting...";

/// A range input and the text label that mirrors it.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBinding {
    id: &'static str,
    caption: &'static str,
    value: String,
    label: String,
}

impl SliderBinding {
    pub fn new(id: &'static str, caption: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id,
            caption,
            label: value.clone(),
            value,
        }
    }

    /// Apply an `input` event. The label always follows the value.
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.label.clone_from(&self.value);
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn caption(&self) -> &'static str {
        self.caption
    }

    /// Element id of the mirroring label (`<id>_value`).
    pub fn label_id(&self) -> String {
        format!("{}_value", self.id)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    label: String,
    busy_label: &'static str,
    disabled: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: PREDICTING_LABEL,
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label shown while a submission is in flight, both here and in the
    /// browser's `onsubmit` handler.
    pub fn busy_label(&self) -> &'static str {
        self.busy_label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable the button and show the busy label until the guard is dropped.
    pub fn engage(&mut self) -> SubmitGuard<'_> {
        let original_label = std::mem::replace(&mut self.label, self.busy_label.to_string());
        let was_disabled = std::mem::replace(&mut self.disabled, true);
        SubmitGuard {
            button: self,
            original_label,
            was_disabled,
        }
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

/// Restores the submit button's label and enabled state on drop.
pub struct SubmitGuard<'a> {
    button: &'a mut SubmitButton,
    original_label: String,
    was_disabled: bool,
}

impl SubmitGuard<'_> {
    pub fn button(&self) -> &SubmitButton {
        &*self.button
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.button.label = std::mem::take(&mut self.original_label);
        self.button.disabled = self.was_disabled;
    }
}

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DayOption {
    pub value: String,
    pub name: &'static str,
    pub selected: bool,
}

/// The `prediction-form` region: three number fields, two sliders, one button.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub day_of_week: String,
    pub hour_of_day: String,
    pub minute_of_hour: String,
    pub activity: SliderBinding,
    pub battery_level: SliderBinding,
    pub submit: SubmitButton,
}

impl FormView {
    pub fn from_form(form: &PredictionForm) -> Self {
        Self {
            day_of_week: form.day_of_week.clone(),
            hour_of_day: form.hour_of_day.clone(),
            minute_of_hour: form.minute_of_hour.clone(),
            activity: SliderBinding::new(
                "device_activity",
                "Device Activity",
                form.device_activity.clone(),
            ),
            battery_level: SliderBinding::new(
                "device_batteryLevel",
                "Battery Level",
                form.device_battery_level.clone(),
            ),
            submit: SubmitButton::default(),
        }
    }

    pub fn sliders(&self) -> [&SliderBinding; 2] {
        [&self.activity, &self.battery_level]
    }

    /// `dayOfWeek` choices, Monday first as 0.
    pub fn day_options(&self) -> Vec<DayOption> {
        DAY_NAMES
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                let value = index.to_string();
                DayOption {
                    selected: self.day_of_week.trim() == value,
                    value,
                    name,
                }
            })
            .collect()
    }

    /// Current field values, as a fresh form submission.
    pub fn snapshot(&self) -> PredictionForm {
        PredictionForm {
            day_of_week: self.day_of_week.clone(),
            hour_of_day: self.hour_of_day.clone(),
            minute_of_hour: self.minute_of_hour.clone(),
            device_activity: self.activity.value().to_string(),
            device_battery_level: self.battery_level.value().to_string(),
            last_prediction: None,
        }
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::from_form(&PredictionForm::default())
    }
}

//! Form state: an ordered list of fields with edit, serialize, populate,
//! and inline-error operations.
//!
//! A `FormState` is built when a modal form opens and dropped when the
//! modal closes; nothing here persists. Field names are not unique —
//! checkbox groups (e.g. `category_ids`) share one name and collapse into
//! a list on serialization.

use serde_json::{Map, Value};

/// Field kind, mirroring the input types the server's forms use.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Url,
    Number,
    Checkbox,
    Radio,
    Select { options: Vec<String> },
}

impl FieldKind {
    /// Whether this kind takes free text edits (cursor + typed characters).
    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldKind::Checkbox | FieldKind::Radio | FieldKind::Select { .. })
    }
}

/// One form field: definition plus current value and inline error.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    /// Display label; validation errors fall back to `name` when empty.
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Raw text value for editable kinds; selected option for Select.
    pub value: String,
    /// Checked state for Checkbox/Radio.
    pub checked: bool,
    /// Submit value for Radio and group Checkbox fields. A checkbox with a
    /// submit value serializes that value when checked (group semantics);
    /// without one it serializes as a boolean.
    pub submit_value: Option<String>,
    pub error: Option<String>,
    initial_value: String,
    initial_checked: bool,
}

impl Field {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            value: String::new(),
            checked: false,
            submit_value: None,
            error: None,
            initial_value: String::new(),
            initial_checked: false,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn url(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    /// A checkbox that is part of a same-named group, contributing
    /// `submit_value` when checked.
    pub fn group_checkbox(name: &str, label: &str, submit_value: &str) -> Self {
        let mut field = Self::new(name, label, FieldKind::Checkbox);
        field.submit_value = Some(submit_value.to_string());
        field
    }

    pub fn radio(name: &str, label: &str, submit_value: &str) -> Self {
        let mut field = Self::new(name, label, FieldKind::Radio);
        field.submit_value = Some(submit_value.to_string());
        field
    }

    pub fn select(name: &str, label: &str, options: Vec<String>) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.initial_value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.initial_checked = checked;
        self
    }

    /// Display label with raw-name fallback.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// Default submit-control label and its busy replacement.
const DEFAULT_SUBMIT_LABEL: &str = "Submit";
const BUSY_LABEL: &str = "Submitting...";

/// Live state of a modal form: fields in document order plus the submit
/// control's state and the in-flight guard.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<Field>,
    /// Index of the focused field; `fields.len()` focuses the submit control.
    pub focused: usize,
    /// Whether the focused field is in text-edit mode (captures typing).
    pub editing: bool,
    pub submit_label: String,
    saved_label: Option<String>,
    in_flight: bool,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focused: 0,
            editing: false,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            saved_label: None,
            in_flight: false,
        }
    }

    pub fn with_submit_label(mut self, label: &str) -> Self {
        self.submit_label = label.to_string();
        self
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Disable the submit control for the duration of a submit, swapping
    /// its label for a busy indicator. Fails when a submit is already
    /// pending.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.saved_label = Some(std::mem::replace(
            &mut self.submit_label,
            BUSY_LABEL.to_string(),
        ));
        true
    }

    /// Restore the submit control. Runs on every submit exit path.
    pub(crate) fn end_submit(&mut self) {
        self.in_flight = false;
        if let Some(label) = self.saved_label.take() {
            self.submit_label = label;
        }
    }

    /// Serialize with form-data semantics:
    ///
    /// - editable fields contribute their raw value
    /// - checked group checkboxes and radios contribute their submit value
    /// - repeated names collapse into an ordered list
    /// - every checkbox name absent from the output becomes an explicit
    ///   `false` (booleans are never omitted)
    pub fn serialize(&self) -> Map<String, Value> {
        let mut data = Map::new();

        for field in &self.fields {
            let value = match &field.kind {
                FieldKind::Checkbox => {
                    if !field.checked {
                        continue;
                    }
                    match &field.submit_value {
                        Some(v) => Value::String(v.clone()),
                        None => Value::Bool(true),
                    }
                }
                FieldKind::Radio => {
                    if !field.checked {
                        continue;
                    }
                    Value::String(field.submit_value.clone().unwrap_or_default())
                }
                FieldKind::Number => number_value(&field.value),
                _ => Value::String(field.value.clone()),
            };
            insert_collapsing(&mut data, &field.name, value);
        }

        // Checkboxes never go missing: unchecked groups and plain boxes
        // serialize as false.
        for field in &self.fields {
            if field.kind == FieldKind::Checkbox && !data.contains_key(&field.name) {
                data.insert(field.name.clone(), Value::Bool(false));
            }
        }

        data
    }

    /// Inverse of serialize for initial population: checkboxes from
    /// truthiness (group members from list membership), radios by string
    /// equality, everything else from the value or empty string. Keys not
    /// present in `data` leave their fields untouched.
    pub fn populate(&mut self, data: &Map<String, Value>) {
        for field in &mut self.fields {
            let Some(value) = data.get(&field.name) else {
                continue;
            };

            match &field.kind {
                FieldKind::Checkbox => {
                    field.checked = match (&field.submit_value, value) {
                        (Some(sv), Value::Array(items)) => {
                            items.iter().any(|item| value_as_string(item) == *sv)
                        }
                        _ => json_truthy(value),
                    };
                }
                FieldKind::Radio => {
                    field.checked =
                        field.submit_value.as_deref() == Some(value_as_string(value).as_str());
                }
                _ => {
                    field.value = value_as_string(value);
                }
            }
        }
    }

    /// Restore every field to its initial state and drop all inline errors.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.initial_value.clone();
            field.checked = field.initial_checked;
            field.error = None;
        }
    }

    /// Attach an inline error to the first field named `name`. Idempotent:
    /// re-setting replaces the message.
    pub fn set_field_error(&mut self, name: &str, message: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.error = Some(message.to_string());
        }
    }

    /// Remove the inline error from the first field named `name`; no-op
    /// when there is none.
    pub fn clear_field_error(&mut self, name: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.error = None;
        }
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focused)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.focused)
    }

    /// True when the submit control (rather than a field) has focus.
    pub fn submit_focused(&self) -> bool {
        self.focused >= self.fields.len()
    }

    pub fn focus_down(&mut self) {
        if self.focused < self.fields.len() {
            self.focused += 1;
        } else {
            self.focused = 0;
        }
        self.editing = false;
    }

    /// Type a character into the focused editable field. Editing a field
    /// drops its inline error.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.kind.is_editable() {
                field.value.push(c);
                field.error = None;
            }
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.kind.is_editable() {
                field.value.pop();
                field.error = None;
            }
        }
    }

    /// Toggle or cycle the focused non-editable field: checkboxes flip,
    /// radios check exclusively within their name group, selects advance
    /// to the next option.
    pub fn toggle_focused(&mut self) {
        if self.focused >= self.fields.len() {
            return;
        }
        match self.fields[self.focused].kind.clone() {
            FieldKind::Checkbox => {
                let field = &mut self.fields[self.focused];
                field.checked = !field.checked;
                field.error = None;
            }
            FieldKind::Radio => {
                let name = self.fields[self.focused].name.clone();
                for field in &mut self.fields {
                    if field.kind == FieldKind::Radio && field.name == name {
                        field.checked = false;
                    }
                }
                self.fields[self.focused].checked = true;
            }
            FieldKind::Select { options } => {
                if options.is_empty() {
                    return;
                }
                let field = &mut self.fields[self.focused];
                let next = match options.iter().position(|o| *o == field.value) {
                    Some(pos) => (pos + 1) % options.len(),
                    None => 0,
                };
                field.value = options[next].clone();
            }
            _ => {}
        }
    }

    pub fn focus_up(&mut self) {
        if self.focused == 0 {
            self.focused = self.fields.len();
        } else {
            self.focused -= 1;
        }
        self.editing = false;
    }
}

/// Collapse repeated names into an ordered list, form-data style.
fn insert_collapsing(data: &mut Map<String, Value>, name: &str, value: Value) {
    match data.get_mut(name) {
        None => {
            data.insert(name.to_string(), value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// Number fields serialize as a float, or null when empty or unparsable.
fn number_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number),
        Err(_) => Value::Null,
    }
}

pub(crate) fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON scalar the way a text input would hold it.
pub(crate) fn value_as_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; surrounding whitespace is dropped on collection.
    Text,
    /// Secret text, collected verbatim.
    Password,
    /// Floating point number.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    Required,
    Length { min: usize, max: usize },
    MinLength(usize),
    Email,
    Phone,
    Positive,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
            rules: Vec::new(),
        }
    }

    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Password,
            ..Self::text(name, label)
        }
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(name, label)
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Key of the element that receives this field's message.
    #[must_use]
    pub fn error_id(&self) -> String {
        format!("{}Error", self.name)
    }
}

use crate::StoreError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Number => value.is_number(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn text<S: Into<String>>(name: S) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number<S: Into<String>>(name: S) -> Self {
        Self::new(name, FieldKind::Number)
    }

    fn new<S: Into<String>>(name: S, kind: FieldKind) -> Self {
        Field {
            name: name.into(),
            kind,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// An ordered single-column index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    pub column: String,
}

impl Index {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, column: C) -> Self {
        Index {
            name: name.into(),
            column: column.into(),
        }
    }

    pub fn to_sql(&self, table: &str) -> String {
        format!(
            "CREATE INDEX `{}` ON `{}` (`{}`)",
            self.name, table, self.column
        )
    }
}

/// Per-operation access rules. `None` locks the operation to admins,
/// an empty rule lets anyone through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRules {
    pub list: Option<String>,
    pub view: Option<String>,
    pub create: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
}

impl AccessRules {
    pub fn open() -> Self {
        let open = Some(String::new());
        AccessRules {
            list: open.clone(),
            view: open.clone(),
            create: open.clone(),
            update: open.clone(),
            delete: open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub rules: AccessRules,
    pub fields: Vec<Field>,
    pub indexes: Vec<Index>,
}

impl Collection {
    pub fn base<S: Into<String>>(name: S) -> Self {
        Collection {
            name: name.into(),
            rules: AccessRules::default(),
            fields: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: AccessRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn add_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn remove_field(&mut self, name: &str) {
        self.fields.retain(|f| f.name != name);
    }

    pub fn index_statements(&self) -> Vec<String> {
        self.indexes.iter().map(|i| i.to_sql(&self.name)).collect()
    }

    /// Checks that every required field is present and that every known
    /// field holds a value of its kind.
    pub fn validate(&self, data: &Map<String, Value>) -> Result<(), StoreError> {
        for field in &self.fields {
            match data.get(&field.name) {
                Some(value) if !field.kind.accepts(value) => {
                    return Err(StoreError::InvalidField {
                        collection: self.name.clone(),
                        field: field.name.clone(),
                    })
                }
                None if field.required => {
                    return Err(StoreError::MissingField {
                        collection: self.name.clone(),
                        field: field.name.clone(),
                    })
                }
                _ => {}
            }
        }

        Ok(())
    }
}

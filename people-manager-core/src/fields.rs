//! Person field table
//!
//! Every property of [`Person`] is listed once, in declaration order, with
//! the accessors the edit flow needs. Only text and nullable integer fields
//! carry accessors; the rest are listed so they can be shown and refused.

use people_manager_provider::Person;

use crate::error::{CoreError, CoreResult};

/// How a field can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, read with a text prompt
    Text,
    /// Optional integer, read with a number prompt
    NullableInt,
    /// Collections, enums and nested records
    Unsupported,
}

/// A value read from, or written to, an editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::NullableInt,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Copy)]
enum Accessor {
    Text {
        get: fn(&Person) -> Option<&str>,
        set: fn(&mut Person, String),
    },
    NullableInt {
        get: fn(&Person) -> Option<i64>,
        set: fn(&mut Person, Option<i64>),
    },
    ReadOnly,
}

/// A named, typed accessor pair over [`Person`].
#[derive(Clone, Copy)]
pub struct PersonField {
    name: &'static str,
    accessor: Accessor,
}

impl std::fmt::Debug for PersonField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonField")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl PartialEq for PersonField {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PersonField {}

impl PersonField {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        match self.accessor {
            Accessor::Text { .. } => FieldKind::Text,
            Accessor::NullableInt { .. } => FieldKind::NullableInt,
            Accessor::ReadOnly => FieldKind::Unsupported,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.kind() != FieldKind::Unsupported
    }

    /// Current value; `None` when the field is unset or not editable
    pub fn get(&self, person: &Person) -> Option<FieldValue> {
        match self.accessor {
            Accessor::Text { get, .. } => get(person).map(|s| FieldValue::Text(s.to_string())),
            Accessor::NullableInt { get, .. } => get(person).map(FieldValue::Integer),
            Accessor::ReadOnly => None,
        }
    }

    /// Write `value` into `person`.
    ///
    /// Fails with [`CoreError::UnsupportedField`] for read-only fields and
    /// [`CoreError::ValidationError`] when the value kind does not match.
    pub fn set(&self, person: &mut Person, value: FieldValue) -> CoreResult<()> {
        match (self.accessor, value) {
            (Accessor::Text { set, .. }, FieldValue::Text(text)) => {
                set(person, text);
                Ok(())
            }
            (Accessor::NullableInt { set, .. }, FieldValue::Integer(n)) => {
                set(person, Some(n));
                Ok(())
            }
            (Accessor::ReadOnly, _) => Err(CoreError::UnsupportedField(self.name.to_string())),
            (_, value) => Err(CoreError::ValidationError(format!(
                "{} expects {:?}, got {:?}",
                self.name,
                self.kind(),
                value.kind()
            ))),
        }
    }
}

fn user_name(p: &Person) -> Option<&str> {
    Some(&p.user_name)
}
fn set_user_name(p: &mut Person, v: String) {
    p.user_name = v;
}
fn first_name(p: &Person) -> Option<&str> {
    p.first_name.as_deref()
}
fn set_first_name(p: &mut Person, v: String) {
    p.first_name = Some(v);
}
fn last_name(p: &Person) -> Option<&str> {
    p.last_name.as_deref()
}
fn set_last_name(p: &mut Person, v: String) {
    p.last_name = Some(v);
}
fn middle_name(p: &Person) -> Option<&str> {
    p.middle_name.as_deref()
}
fn set_middle_name(p: &mut Person, v: String) {
    p.middle_name = Some(v);
}
fn age(p: &Person) -> Option<i64> {
    p.age
}
fn set_age(p: &mut Person, v: Option<i64>) {
    p.age = v;
}

const fn text(
    name: &'static str,
    get: fn(&Person) -> Option<&str>,
    set: fn(&mut Person, String),
) -> PersonField {
    PersonField {
        name,
        accessor: Accessor::Text { get, set },
    }
}

const fn read_only(name: &'static str) -> PersonField {
    PersonField {
        name,
        accessor: Accessor::ReadOnly,
    }
}

/// All person fields, in declaration order. The computed full name is not a field.
pub static PERSON_FIELDS: [PersonField; 14] = [
    text("UserName", user_name, set_user_name),
    text("FirstName", first_name, set_first_name),
    text("LastName", last_name, set_last_name),
    text("MiddleName", middle_name, set_middle_name),
    read_only("Gender"),
    PersonField {
        name: "Age",
        accessor: Accessor::NullableInt {
            get: age,
            set: set_age,
        },
    },
    read_only("Emails"),
    read_only("AddressInfo"),
    read_only("HomeAddress"),
    read_only("FavoriteFeature"),
    read_only("Features"),
    read_only("Friends"),
    read_only("BestFriend"),
    read_only("Trips"),
];

/// Look a field up by its exact name
pub fn find_field(name: &str) -> Option<&'static PersonField> {
    PERSON_FIELDS.iter().find(|field| field.name == name)
}

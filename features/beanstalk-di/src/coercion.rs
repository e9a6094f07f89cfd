use std::{fmt::Display, str::FromStr};

use crate::{errors::CoercionError, types::BeanRef};

/// Declared type of an injectable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    Bool,
    String,
    /// Holds another bean
    Bean,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::I8 => "i8",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::Char => "char",
            FieldType::Bool => "bool",
            FieldType::String => "String",
            FieldType::Bean => "bean",
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value ready to be assigned to a field
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    Bool(bool),
    String(String),
    Bean(BeanRef),
}

impl Value {
    /// The field type this value fits into
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::I8(_) => FieldType::I8,
            Value::I16(_) => FieldType::I16,
            Value::I32(_) => FieldType::I32,
            Value::I64(_) => FieldType::I64,
            Value::F32(_) => FieldType::F32,
            Value::F64(_) => FieldType::F64,
            Value::Char(_) => FieldType::Char,
            Value::Bool(_) => FieldType::Bool,
            Value::String(_) => FieldType::String,
            Value::Bean(_) => FieldType::Bean,
        }
    }
}

/// Converts a literal into a value of the given field type
///
/// Numbers use Rust's [FromStr] rules, so surrounding whitespace, overflow and
/// malformed digits are all errors. Booleans accept `true`/`false` in any case.
/// Chars take the first character of the literal.
pub fn coerce(field_type: FieldType, literal: &str) -> Result<Value, CoercionError> {
    let value = match field_type {
        FieldType::I8 => Value::I8(parse(field_type, literal)?),
        FieldType::I16 => Value::I16(parse(field_type, literal)?),
        FieldType::I32 => Value::I32(parse(field_type, literal)?),
        FieldType::I64 => Value::I64(parse(field_type, literal)?),
        FieldType::F32 => Value::F32(parse(field_type, literal)?),
        FieldType::F64 => Value::F64(parse(field_type, literal)?),
        FieldType::Char => Value::Char(literal.chars().next().ok_or(CoercionError::EmptyChar)?),
        FieldType::Bool => Value::Bool(parse_bool(literal)?),
        FieldType::String => Value::String(literal.to_string()),
        FieldType::Bean => return Err(CoercionError::Unsupported(field_type)),
    };

    Ok(value)
}

fn parse<T>(field_type: FieldType, literal: &str) -> Result<T, CoercionError>
where
    T: FromStr,
    T::Err: Display,
{
    literal
        .parse::<T>()
        .map_err(|e| CoercionError::Malformed {
            field_type,
            literal: literal.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(literal: &str) -> Result<bool, CoercionError> {
    if literal.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoercionError::Malformed {
            field_type: FieldType::Bool,
            literal: literal.to_string(),
            reason: "expected `true` or `false` - other text is rejected, not read as false"
                .to_string(),
        })
    }
}

/// Rust types which can be the target of an injected field
pub trait FieldValue: Sized {
    /// Declared type of fields holding this type
    const FIELD_TYPE: FieldType;

    /// Unwraps the value, handing it back if it is of another kind
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_field_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const FIELD_TYPE: FieldType = FieldType::$variant;

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_field_value! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    char => Char,
    bool => Bool,
    String => String,
    BeanRef => Bean,
}

// Reference fields usually start out empty
impl FieldValue for Option<BeanRef> {
    const FIELD_TYPE: FieldType = FieldType::Bean;

    fn from_value(value: Value) -> Result<Self, Value> {
        BeanRef::from_value(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_of_every_width() {
        assert_eq!(coerce(FieldType::I8, "-128"), Ok(Value::I8(-128)));
        assert_eq!(coerce(FieldType::I16, "1024"), Ok(Value::I16(1024)));
        assert_eq!(coerce(FieldType::I32, "42"), Ok(Value::I32(42)));
        assert_eq!(
            coerce(FieldType::I64, "9000000000"),
            Ok(Value::I64(9_000_000_000))
        );
    }

    #[test]
    fn out_of_range_is_malformed() {
        let err = coerce(FieldType::I32, "99999999999999999999").unwrap_err();
        assert!(matches!(
            err,
            CoercionError::Malformed {
                field_type: FieldType::I32,
                ..
            }
        ));

        assert!(coerce(FieldType::I8, "128").is_err());
        assert!(coerce(FieldType::I32, "4x").is_err());
        assert!(coerce(FieldType::I32, " 42").is_err());
    }

    #[test]
    fn floats() {
        assert_eq!(coerce(FieldType::F32, "1.5"), Ok(Value::F32(1.5)));
        assert_eq!(coerce(FieldType::F64, "-0.25"), Ok(Value::F64(-0.25)));
        assert!(coerce(FieldType::F64, "one").is_err());
    }

    #[test]
    fn booleans_ignore_case() {
        assert_eq!(coerce(FieldType::Bool, "true"), Ok(Value::Bool(true)));
        assert_eq!(coerce(FieldType::Bool, "TRUE"), Ok(Value::Bool(true)));
        assert_eq!(coerce(FieldType::Bool, "False"), Ok(Value::Bool(false)));
        let err = coerce(FieldType::Bool, "yes").unwrap_err();
        assert!(err.to_string().contains("not read as false"), "{err}");
    }

    #[test]
    fn chars_take_the_first_character() {
        assert_eq!(coerce(FieldType::Char, "x"), Ok(Value::Char('x')));
        assert_eq!(coerce(FieldType::Char, "xyz"), Ok(Value::Char('x')));
        assert_eq!(coerce(FieldType::Char, ""), Err(CoercionError::EmptyChar));
    }

    #[test]
    fn strings_are_identity() {
        assert_eq!(
            coerce(FieldType::String, " spaced "),
            Ok(Value::String(" spaced ".to_string()))
        );
    }

    #[test]
    fn bean_fields_cannot_take_literals() {
        assert_eq!(
            coerce(FieldType::Bean, "peopleA"),
            Err(CoercionError::Unsupported(FieldType::Bean))
        );
    }

    #[test]
    fn field_value_rejects_other_kinds() {
        assert_eq!(i32::from_value(Value::I32(3)), Ok(3));
        assert_eq!(i32::from_value(Value::I64(3)), Err(Value::I64(3)));
        assert_eq!(<Option<BeanRef>>::FIELD_TYPE, FieldType::Bean);
    }
}

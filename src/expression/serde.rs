use std::{fmt, marker::PhantomData};

use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use crate::{data_type::DataType, parser, printer, Expr};

impl<T: DataType> Serialize for Expr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(printer::print(self).as_str())
    }
}

impl<'de, T: DataType> Deserialize<'de> for Expr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ExprVisitor {
            dummy: PhantomData,
        })
    }
}

#[derive(Debug)]
struct ExprVisitor<T> {
    dummy: PhantomData<T>,
}

impl<'de, T: DataType> Visitor<'de> for ExprVisitor<T> {
    type Value = Expr<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string that can be parsed by the `calcex` crate")
    }

    fn visit_str<E>(self, unparsed: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parser::parse(unparsed).map_err(|e| E::custom(format!("Parse error - {}", e)))
    }
}

#[cfg(test)]
use serde_test::Token;

#[test]
fn test_ser_de() {
    let test = |s: &str, printed: &'static str| {
        let expr = parser::parse::<f64>(s).unwrap();
        serde_test::assert_ser_tokens(&expr, &[Token::Str(printed)]);
        serde_test::assert_de_tokens(&expr, &[Token::Str(printed)]);
        let serialized = serde_json::to_string(&expr).unwrap();
        let deserialized = serde_json::from_str::<Expr<f64>>(serialized.as_str()).unwrap();
        assert_eq!(deserialized, expr);
        assert_eq!(printed, format!("{}", deserialized));
    };

    test("x+y*2.0", "(x + (y * 2))");
    test("-(a - b) % 3", "((-(a - b)) % 3)");
    test("2^3^2", "((2 ^ 3) ^ 2)");
    test("  .5 ", "0.5");
}

#[test]
fn test_de_error() {
    let res = serde_json::from_str::<Expr<f64>>("\"(1 + 2\"");
    let msg = res.unwrap_err().to_string();
    assert!(msg.contains("Parse error"));
    assert!(msg.contains("Unbalanced Paren"));
    assert!(serde_json::from_str::<Expr<f64>>("12").is_err());
}

//! # Constructor Argument Coercion
//!
//! Turns raw text input into typed constructor arguments for a contract's
//! declared parameter list, and validates required/format constraints before
//! submission. One coercion function feeds both the per-keystroke stored
//! value and the final positional argument list, so the two sites cannot
//! diverge.
use crate::{error::DeployHelperError, registry::ConstructorInput};
use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, I256, U256},
};
use std::{collections::HashMap, fmt, str::FromStr};

/// A coerced constructor argument value.
///
/// `Unset` is a distinct sentinel for "nothing entered yet" and is never
/// conflated with zero or `false`. Array-typed parameters stay sequences of
/// raw strings end to end; numeric/bool element coercion is not performed
/// (known limitation, preserved deliberately).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Unset,
    Text(String),
    Bool(bool),
    Uint(U256),
    Int(I256),
    List(Vec<String>),
}

impl ArgValue {
    /// True when the value still counts as "not provided" for validation:
    /// the unset sentinel itself, or empty pass-through text.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Unset => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Text(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Uint(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// Coerces one raw text input according to its Solidity type tag.
///
/// Rules:
/// - array tags (`T[]`): comma-split, trimmed, empty elements dropped;
/// - integer tags (`uint*`/`int*`): base-10 parse, empty input is `Unset`;
/// - `bool`: only the literals `"true"`/`"false"` coerce, anything else is `Unset`;
/// - `address` and every other tag: passed through as text.
pub fn coerce(solidity_type: &str, raw: &str) -> Result<ArgValue, DeployHelperError> {
    if solidity_type.ends_with("[]") {
        let items = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        return Ok(ArgValue::List(items));
    }

    // "uint" tags also contain "int", so they must be matched first.
    if solidity_type.contains("uint") {
        if raw.is_empty() {
            return Ok(ArgValue::Unset);
        }
        let value = U256::from_str_radix(raw, 10).map_err(|e| {
            DeployHelperError::InvalidArgument(format!(
                "expected a base-10 integer for type {}: {}",
                solidity_type, e
            ))
        })?;
        return Ok(ArgValue::Uint(value));
    }

    if solidity_type.contains("int") {
        if raw.is_empty() {
            return Ok(ArgValue::Unset);
        }
        let value = I256::from_dec_str(raw).map_err(|e| {
            DeployHelperError::InvalidArgument(format!(
                "expected a base-10 integer for type {}: {}",
                solidity_type, e
            ))
        })?;
        return Ok(ArgValue::Int(value));
    }

    if solidity_type == "bool" {
        return Ok(match raw {
            "true" => ArgValue::Bool(true),
            "false" => ArgValue::Bool(false),
            _ => ArgValue::Unset,
        });
    }

    Ok(ArgValue::Text(raw.to_string()))
}

/// Checks the fixed address pattern: literal `0x` followed by exactly 40
/// hexadecimal characters, case-insensitive.
pub fn is_address_format(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex_part) => hex_part.len() == 40 && hex_part.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Validates all constructor inputs in declaration order, stopping at the
/// first failure.
pub fn validate_constructor_args(
    inputs: &[ConstructorInput],
    values: &HashMap<String, ArgValue>,
) -> Result<(), DeployHelperError> {
    for input in inputs {
        let value = values.get(&input.name);
        match value {
            None => return Err(DeployHelperError::MissingParameter(input.name.clone())),
            Some(v) if v.is_unset() => {
                return Err(DeployHelperError::MissingParameter(input.name.clone()))
            }
            Some(v) => {
                if input.solidity_type == "address" {
                    let ok = matches!(v, ArgValue::Text(s) if is_address_format(s));
                    if !ok {
                        return Err(DeployHelperError::InvalidAddressFormat(input.name.clone()));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Builds the ordered positional argument sequence for the deployment call
/// from the stored values. Callers are expected to have run
/// [`validate_constructor_args`] first; an unset value still fails here.
pub fn constructor_call_values(
    inputs: &[ConstructorInput],
    values: &HashMap<String, ArgValue>,
) -> Result<Vec<DynSolValue>, DeployHelperError> {
    inputs
        .iter()
        .map(|input| {
            let value = values
                .get(&input.name)
                .ok_or_else(|| DeployHelperError::MissingParameter(input.name.clone()))?;
            to_sol_value(input, value)
        })
        .collect()
}

fn to_sol_value(
    input: &ConstructorInput,
    value: &ArgValue,
) -> Result<DynSolValue, DeployHelperError> {
    match value {
        ArgValue::Unset => Err(DeployHelperError::MissingParameter(input.name.clone())),
        ArgValue::Uint(v) => Ok(DynSolValue::Uint(*v, int_bits(&input.solidity_type))),
        ArgValue::Int(v) => Ok(DynSolValue::Int(*v, int_bits(&input.solidity_type))),
        ArgValue::Bool(b) => Ok(DynSolValue::Bool(*b)),
        // Array elements stay ABI strings (see ArgValue docs).
        ArgValue::List(items) => Ok(DynSolValue::Array(
            items.iter().cloned().map(DynSolValue::String).collect(),
        )),
        ArgValue::Text(s) if input.solidity_type == "address" => Address::from_str(s)
            .map(DynSolValue::Address)
            .map_err(|_| DeployHelperError::InvalidAddressFormat(input.name.clone())),
        ArgValue::Text(s) => Ok(DynSolValue::String(s.clone())),
    }
}

/// Bit width carried by an integer type tag, defaulting to 256.
fn int_bits(solidity_type: &str) -> usize {
    solidity_type
        .trim_start_matches("uint")
        .trim_start_matches("int")
        .parse::<usize>()
        .ok()
        .filter(|bits| *bits > 0 && *bits <= 256 && bits % 8 == 0)
        .unwrap_or(256)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, ty: &str) -> ConstructorInput {
        ConstructorInput {
            name: name.to_string(),
            solidity_type: ty.to_string(),
        }
    }

    #[test]
    fn test_uint_round_trip() {
        for raw in ["0", "1", "42", "115792089237316195423570985008687907853269984665640564039457584007913129639935"] {
            let value = coerce("uint256", raw).unwrap();
            assert_eq!(value.to_string(), *raw);
        }
    }

    #[test]
    fn test_empty_integer_is_unset_not_zero() {
        assert_eq!(coerce("uint256", "").unwrap(), ArgValue::Unset);
        assert_eq!(coerce("int128", "").unwrap(), ArgValue::Unset);
        assert_ne!(coerce("uint256", "0").unwrap(), ArgValue::Unset);
    }

    #[test]
    fn test_signed_integer() {
        let value = coerce("int256", "-42").unwrap();
        assert_eq!(value, ArgValue::Int(I256::from_dec_str("-42").unwrap()));
        assert_eq!(value.to_string(), "-42");
    }

    #[test]
    fn test_integer_rejects_garbage() {
        assert!(coerce("uint256", "12x").is_err());
        assert!(coerce("uint256", "-1").is_err());
        assert!(coerce("int256", "four").is_err());
    }

    #[test]
    fn test_bool_literals() {
        assert_eq!(coerce("bool", "true").unwrap(), ArgValue::Bool(true));
        assert_eq!(coerce("bool", "false").unwrap(), ArgValue::Bool(false));
        // Anything else means "not chosen yet", including the empty string.
        assert_eq!(coerce("bool", "").unwrap(), ArgValue::Unset);
        assert_eq!(coerce("bool", "yes").unwrap(), ArgValue::Unset);
    }

    #[test]
    fn test_address_passes_through_as_text() {
        let value = coerce("address", "0x123").unwrap();
        assert_eq!(value, ArgValue::Text("0x123".to_string()));
    }

    #[test]
    fn test_array_splits_trims_and_drops_empties() {
        let value = coerce("uint256[]", "1, 2, 3").unwrap();
        assert_eq!(
            value,
            ArgValue::List(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );

        let value = coerce("string[]", " a ,, b , ").unwrap();
        assert_eq!(value, ArgValue::List(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_other_tags_pass_through() {
        let value = coerce("bytes32", "0xdeadbeef").unwrap();
        assert_eq!(value, ArgValue::Text("0xdeadbeef".to_string()));
        let value = coerce("string", "hello").unwrap();
        assert_eq!(value, ArgValue::Text("hello".to_string()));
    }

    #[test]
    fn test_address_format_pattern() {
        assert!(is_address_format(
            "0xABCDEF0123456789ABCDEF0123456789ABCDEF01"
        ));
        assert!(is_address_format(
            "0xabcdef0123456789abcdef0123456789abcdef01"
        ));
        for bad in [
            "0x123",
            "",
            "ABCDEF0123456789ABCDEF0123456789ABCDEF01",
            "0xABCDEF0123456789ABCDEF0123456789ABCDEF0",
            "0xABCDEF0123456789ABCDEF0123456789ABCDEF012",
            "0xZZCDEF0123456789ABCDEF0123456789ABCDEF01",
        ] {
            assert!(!is_address_format(bad), "expected {:?} to fail", bad);
        }
    }

    #[test]
    fn test_validation_missing_parameter() {
        let inputs = vec![input("count", "uint256")];
        let values = HashMap::new();

        let err = validate_constructor_args(&inputs, &values).unwrap_err();
        assert_eq!(err, DeployHelperError::MissingParameter("count".to_string()));
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_validation_unset_and_empty_text_are_missing() {
        let inputs = vec![input("count", "uint256")];
        let mut values = HashMap::new();
        values.insert("count".to_string(), ArgValue::Unset);
        assert!(matches!(
            validate_constructor_args(&inputs, &values),
            Err(DeployHelperError::MissingParameter(_))
        ));

        let inputs = vec![input("label", "string")];
        let mut values = HashMap::new();
        values.insert("label".to_string(), ArgValue::Text(String::new()));
        assert!(matches!(
            validate_constructor_args(&inputs, &values),
            Err(DeployHelperError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_validation_address_format() {
        let inputs = vec![input("owner", "address")];

        let mut values = HashMap::new();
        values.insert(
            "owner".to_string(),
            ArgValue::Text("0xABCDEF0123456789ABCDEF0123456789ABCDEF01".to_string()),
        );
        assert!(validate_constructor_args(&inputs, &values).is_ok());

        values.insert("owner".to_string(), ArgValue::Text("0x123".to_string()));
        let err = validate_constructor_args(&inputs, &values).unwrap_err();
        assert_eq!(
            err,
            DeployHelperError::InvalidAddressFormat("owner".to_string())
        );
    }

    #[test]
    fn test_validation_short_circuits_in_declaration_order() {
        let inputs = vec![input("first", "uint256"), input("second", "address")];
        // Both parameters are invalid; the first one must win.
        let mut values = HashMap::new();
        values.insert("second".to_string(), ArgValue::Text("0x123".to_string()));

        let err = validate_constructor_args(&inputs, &values).unwrap_err();
        assert_eq!(err, DeployHelperError::MissingParameter("first".to_string()));
    }

    #[test]
    fn test_call_values_positional_order() {
        let inputs = vec![
            input("count", "uint256"),
            input("enabled", "bool"),
            input("owner", "address"),
        ];
        let mut values = HashMap::new();
        values.insert("count".to_string(), coerce("uint256", "7").unwrap());
        values.insert("enabled".to_string(), coerce("bool", "true").unwrap());
        values.insert(
            "owner".to_string(),
            coerce("address", "0xABCDEF0123456789ABCDEF0123456789ABCDEF01").unwrap(),
        );

        let args = constructor_call_values(&inputs, &values).unwrap();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], DynSolValue::Uint(U256::from(7), 256));
        assert_eq!(args[1], DynSolValue::Bool(true));
        assert!(matches!(args[2], DynSolValue::Address(_)));
    }

    #[test]
    fn test_call_values_array_elements_stay_strings() {
        let inputs = vec![input("ids", "uint256[]")];
        let mut values = HashMap::new();
        values.insert("ids".to_string(), coerce("uint256[]", "1, 2, 3").unwrap());

        let args = constructor_call_values(&inputs, &values).unwrap();
        match &args[0] {
            DynSolValue::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], DynSolValue::String("1".to_string()));
            }
            other => panic!("expected an array value, got {:?}", other),
        }
    }

    #[test]
    fn test_call_values_respect_bit_width() {
        let inputs = vec![input("small", "uint8")];
        let mut values = HashMap::new();
        values.insert("small".to_string(), coerce("uint8", "255").unwrap());

        let args = constructor_call_values(&inputs, &values).unwrap();
        assert_eq!(args[0], DynSolValue::Uint(U256::from(255), 8));
    }

    #[test]
    fn test_int_bits_parsing() {
        assert_eq!(int_bits("uint256"), 256);
        assert_eq!(int_bits("uint8"), 8);
        assert_eq!(int_bits("int128"), 128);
        assert_eq!(int_bits("uint"), 256);
        assert_eq!(int_bits("uint7"), 256);
    }
}

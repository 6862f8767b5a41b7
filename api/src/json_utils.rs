use {
    noderpc_shared::primitives::{B256, ParseHashError},
    serde_json::Value,
    thiserror::Error,
};

/// The reason a positional parameter could not be read as the type a handler needs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("Missing parameter at index {0}")]
    Missing(usize),
    #[error("Parameter {index} must be {expected}")]
    Type { index: usize, expected: &'static str },
    #[error("Parameter {index} must be an unsigned integer that fits in {expected}")]
    Range { index: usize, expected: &'static str },
    #[error("Parameter {index} is not a valid hash: {source}")]
    Hash {
        index: usize,
        #[source]
        source: ParseHashError,
    },
}

pub fn get_field<'a>(x: &'a Value, name: &str) -> Option<&'a Value> {
    x.as_object().and_then(|o| o.get(name))
}

pub fn get_method(request: &Value) -> Option<&str> {
    get_field(request, "method").and_then(Value::as_str)
}

pub fn get_params_list(request: &Value) -> Option<&[Value]> {
    get_field(request, "params")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

/// Decodes a hex payload, with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}

/// Typed read access to the positional parameters of one request.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a>(&'a [Value]);

impl<'a> Params<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&'a Value, ParamError> {
        self.0.get(index).ok_or(ParamError::Missing(index))
    }

    /// Returns `None` when the parameter is absent or explicitly null.
    pub fn optional(&self, index: usize) -> Option<&'a Value> {
        self.0.get(index).filter(|v| !v.is_null())
    }

    pub fn str(&self, index: usize) -> Result<&'a str, ParamError> {
        self.get(index)?.as_str().ok_or(ParamError::Type {
            index,
            expected: "a string",
        })
    }

    pub fn hash(&self, index: usize) -> Result<B256, ParamError> {
        self.str(index)?
            .parse()
            .map_err(|source| ParamError::Hash { index, source })
    }

    pub fn u32(&self, index: usize) -> Result<u32, ParamError> {
        let n = self.unsigned(index, "u32")?;
        u32::try_from(n).map_err(|_| ParamError::Range {
            index,
            expected: "u32",
        })
    }

    pub fn u16(&self, index: usize) -> Result<u16, ParamError> {
        let n = self.unsigned(index, "u16")?;
        u16::try_from(n).map_err(|_| ParamError::Range {
            index,
            expected: "u16",
        })
    }

    /// Reads an optional boolean flag that defaults to `false`.
    pub fn flag(&self, index: usize) -> Result<bool, ParamError> {
        match self.optional(index) {
            None => Ok(false),
            Some(v) => v.as_bool().ok_or(ParamError::Type {
                index,
                expected: "a boolean",
            }),
        }
    }

    fn unsigned(&self, index: usize, expected: &'static str) -> Result<u64, ParamError> {
        let value = self.get(index)?;
        if !value.is_number() {
            return Err(ParamError::Type {
                index,
                expected: "a number",
            });
        }
        value.as_u64().ok_or(ParamError::Range { index, expected })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json, test_case::test_case};

    #[test_case(json!([]), ParamError::Missing(0); "missing")]
    #[test_case(json!(["1"]), ParamError::Type { index: 0, expected: "a number" }; "string")]
    #[test_case(json!([-1]), ParamError::Range { index: 0, expected: "u32" }; "negative")]
    #[test_case(json!([1.5]), ParamError::Range { index: 0, expected: "u32" }; "fractional")]
    #[test_case(json!([4294967296u64]), ParamError::Range { index: 0, expected: "u32" }; "too large")]
    fn test_u32_rejects(params: Value, expected: ParamError) {
        let params = params.as_array().unwrap();

        assert_eq!(Params::new(params).u32(0).unwrap_err(), expected);
    }

    #[test]
    fn test_u16_accepts_upper_bound() {
        let params = [json!(65535)];

        assert_eq!(Params::new(&params).u16(0).unwrap(), u16::MAX);
    }

    #[test_case(json!([]), false; "absent")]
    #[test_case(json!([null]), false; "null")]
    #[test_case(json!([true]), true; "true")]
    fn test_flag_defaults_to_false(params: Value, expected: bool) {
        let params = params.as_array().unwrap();

        assert_eq!(Params::new(params).flag(0).unwrap(), expected);
    }

    #[test]
    fn test_flag_rejects_non_boolean() {
        let params = [json!(1)];

        assert_eq!(
            Params::new(&params).flag(0).unwrap_err(),
            ParamError::Type {
                index: 0,
                expected: "a boolean"
            }
        );
    }

    #[test]
    fn test_hash_reports_parse_failure() {
        let params = [json!("0x1234")];

        let err = Params::new(&params).hash(0).unwrap_err();

        assert!(matches!(err, ParamError::Hash { index: 0, .. }));
    }

    #[test]
    fn test_params_list_requires_array() {
        assert!(get_params_list(&json!({ "params": {} })).is_none());
        assert!(get_params_list(&json!({})).is_none());
        assert_eq!(get_params_list(&json!({ "params": [1] })), Some(&[json!(1)][..]));
    }
}

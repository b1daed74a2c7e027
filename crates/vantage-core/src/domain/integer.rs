use crate::ParseError;

/// Parse an integer wire value where `"None"` stands for zero.
pub fn parse_int64ish(input: &str) -> Result<i64, ParseError> {
    if input == "None" {
        return Ok(0);
    }

    input.parse::<i64>().map_err(|_| ParseError::Integer {
        value: input.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_values_and_none() {
        let cases = [
            ("None", 0),
            ("0", 0),
            ("-1", -1),
            ("1", 1),
            ("152186000000", 152_186_000_000),
            ("-152186000000", -152_186_000_000),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_int64ish(input).expect("must parse"), expected);
        }
    }

    #[test]
    fn rejects_non_numeric_values() {
        for input in ["fourty two", "wow!", "-", "", "1.5"] {
            let err = parse_int64ish(input).expect_err("must fail");
            assert!(matches!(err, ParseError::Integer { .. }), "input {input:?}");
        }
    }
}

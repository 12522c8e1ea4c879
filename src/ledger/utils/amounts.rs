use super::{Amount, LedgerError};

// Parse an amount. Reads a string, returns the value in the smallest denomination.
// Sign and size are not checked, only that the text is a number.
pub fn parse_amount(text: &str, decimal_places: u32) -> Result<Amount, LedgerError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LedgerError::EmptyAmount);
    }

    let invalid = || LedgerError::InvalidAmount(text.to_string());
    let factor = scale_factor(decimal_places).ok_or_else(invalid)?;
    match text.parse::<i64>() {
        Ok(val) => val.checked_mul(factor).ok_or_else(invalid),
        Err(_) => match text.parse::<f64>() {
            Ok(val) if val.is_finite() => {
                let scaled = (val * factor as f64).round();
                // i64::MAX as f64 rounds up to 2^63, which itself does not fit.
                if scaled >= Amount::MIN as f64 && scaled < Amount::MAX as f64 {
                    Ok(scaled as Amount)
                } else {
                    Err(invalid())
                }
            }
            _ => Err(invalid()),
        },
    }
}

// Number of minor units in one whole unit, None when it does not fit an Amount.
pub fn scale_factor(decimal_places: u32) -> Option<Amount> {
    10_i64.checked_pow(decimal_places)
}

// Parses form input into a value or the "not yet valid" sentinel.
pub fn parse_input(text: &str, decimal_places: u32) -> Option<Amount> {
    match parse_amount(text, decimal_places) {
        Ok(amount) => Some(amount),
        Err(err) => {
            log::debug!("Amount input {:?} not usable yet: {}", text, err);
            None
        }
    }
}

// An amount counts as filled in only when it is set and non-zero.
pub fn is_filled(amount: Option<Amount>) -> bool {
    matches!(amount, Some(val) if val != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!(parse_amount("100", 2).unwrap(), 10000);
        assert_eq!(parse_amount("12.5", 2).unwrap(), 1250);
        assert_eq!(parse_amount(" 7 ", 0).unwrap(), 7);
        assert_eq!(parse_amount("0.25", 2).unwrap(), 25);
    }

    #[test]
    fn test_parse_keeps_negative_amounts() {
        assert_eq!(parse_amount("-5", 2).unwrap(), -500);
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!(matches!(parse_amount("", 2), Err(LedgerError::EmptyAmount)));
        assert!(matches!(parse_amount("   ", 2), Err(LedgerError::EmptyAmount)));
        assert!(matches!(
            parse_amount("abc", 2),
            Err(LedgerError::InvalidAmount(text)) if text == "abc"
        ));
        assert!(parse_amount("NaN", 2).is_err());
        assert!(parse_amount("inf", 2).is_err());
    }

    #[test]
    fn test_parse_rejects_values_out_of_range() {
        assert!(matches!(
            parse_amount("1e30", 2),
            Err(LedgerError::InvalidAmount(text)) if text == "1e30"
        ));
        assert!(parse_amount("-1e30", 2).is_err());
        assert!(parse_amount("9223372036854775807", 2).is_err());
        assert_eq!(parse_amount("9223372036854775807", 0).unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_with_too_many_decimal_places() {
        assert!(matches!(
            parse_amount("1", 19),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(scale_factor(18), Some(1_000_000_000_000_000_000));
        assert_eq!(scale_factor(19), None);
    }

    #[test]
    fn test_parse_input_sentinel() {
        assert_eq!(parse_input("20", 0), Some(20));
        assert_eq!(parse_input("twenty", 0), None);
        assert_eq!(parse_input("", 0), None);
    }

    #[test]
    fn test_is_filled() {
        assert!(is_filled(Some(1)));
        assert!(is_filled(Some(-1)));
        assert!(!is_filled(Some(0)));
        assert!(!is_filled(None));
    }
}

//! Tests for the fixed density bucket table

#[cfg(test)]
mod tests {
    use drawablegen::DrawableError;
    use drawablegen::density::{Density, factor_for};
    use drawablegen::io::configuration::DENSITY_IDENTIFIERS;

    // Tests every factor times four equals the bucket's reference multiplier
    // Verified by changing the hdpi numerator
    #[test]
    fn test_factors_match_reference_multipliers() {
        let expected = [
            ("mdpi", 1.0),
            ("hdpi", 1.5),
            ("xhdpi", 2.0),
            ("xxhdpi", 3.0),
            ("xxxhdpi", 4.0),
        ];

        for (identifier, multiplier) in expected {
            let factor = factor_for(identifier).unwrap();
            assert!(
                (factor.value() * 4.0 - multiplier).abs() < f64::EPSILON,
                "{identifier} should scale by {multiplier}/4, got {}",
                factor.value()
            );
        }
    }

    // Tests the base bucket is exactly 1.0 and all others lie strictly inside (0, 1)
    // Verified by setting xxhdpi to eight eighths
    #[test]
    fn test_base_factor_is_one_and_others_below() {
        assert!((factor_for("xxxhdpi").unwrap().value() - 1.0).abs() < f64::EPSILON);
        assert_eq!(Density::BASE, Density::Xxxhdpi);

        for density in Density::ALL {
            let value = density.factor().value();
            if density == Density::BASE {
                continue;
            }
            assert!(value > 0.0 && value < 1.0, "{density} factor {value} out of range");
        }
    }

    // Tests factors increase from mdpi to xxxhdpi
    // Verified by swapping two table entries
    #[test]
    fn test_factors_strictly_increase() {
        let values: Vec<u32> = Density::ALL.iter().map(|d| d.factor().eighths()).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Tests unknown and wrongly cased identifiers are rejected
    // Verified by making the lookup case-insensitive
    #[test]
    fn test_unknown_identifiers_rejected() {
        for identifier in ["ldpi", "tvdpi", "MDPI", "", " mdpi"] {
            match factor_for(identifier) {
                Err(DrawableError::UnknownDensity { identifier: got }) => {
                    assert_eq!(got, identifier);
                }
                other => unreachable!("Expected UnknownDensity for '{identifier}', got {other:?}"),
            }
        }
    }

    // Tests identifiers parse back to the same bucket and match the configured order
    // Verified by misspelling an identifier
    #[test]
    fn test_identifier_round_trip() {
        for (density, identifier) in Density::ALL.iter().zip(DENSITY_IDENTIFIERS) {
            assert_eq!(density.identifier(), identifier);
            assert_eq!(density.to_string(), identifier);
            assert_eq!(identifier.parse::<Density>().unwrap(), *density);
            assert_eq!(factor_for(identifier).unwrap().density(), *density);
            assert_eq!(factor_for(identifier).unwrap().identifier(), identifier);
        }
    }
}

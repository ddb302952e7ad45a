use super::*;

fn filled_form() -> PredictionForm {
    let mut form = PredictionForm::new();
    form.load_demo(DemoPreset::Normal);
    form
}

#[test]
fn empty_form_reports_one_required_error_per_field() {
    let mut form = PredictionForm::new();
    let errors = form.submit().expect_err("empty form must not submit");

    assert_eq!(errors.len(), FeatureField::ALL.len());
    for field in FeatureField::ALL {
        assert_eq!(errors.get(field), Some(FieldError::Required), "{field}");
        assert_eq!(
            errors.message(field).as_deref(),
            Some("This field is required")
        );
    }
}

#[test]
fn each_empty_field_is_reported_alone() {
    for field in FeatureField::ALL {
        let mut form = filled_form();
        form.set_value(field, "   ");

        let errors = form.submit().expect_err("blank field must block submit");
        assert_eq!(errors.len(), 1, "{field}");
        assert_eq!(errors.get(field), Some(FieldError::Required));
    }
}

#[test]
fn boundaries_are_inclusive_and_one_unit_beyond_is_rejected() {
    for field in FeatureField::ALL {
        let range = field.range();

        for accepted in [range.min, range.max] {
            assert_eq!(
                parse_field(field, &accepted.to_string()),
                Ok(accepted),
                "{field} should accept {accepted}"
            );
        }

        for rejected in [range.min - 1.0, range.max + 1.0] {
            assert_eq!(
                parse_field(field, &rejected.to_string()),
                Err(FieldError::OutOfRange(range)),
                "{field} should reject {rejected}"
            );
        }
    }
}

#[test]
fn zero_is_a_value_not_an_empty_field() {
    for field in FeatureField::ALL {
        assert_eq!(parse_field(field, "0"), Ok(0.0));
    }
}

#[test]
fn non_numeric_and_non_finite_text_is_rejected() {
    for text in ["abc", "12abc", "NaN", "inf", "1,5"] {
        assert_eq!(
            parse_field(FeatureField::Glucose, text),
            Err(FieldError::NotANumber),
            "{text}"
        );
    }
    assert_eq!(parse_field(FeatureField::Bmi, " 24.5 "), Ok(24.5));
}

#[test]
fn out_of_range_message_names_the_bounds() {
    let err = parse_field(FeatureField::DiabetesPedigreeFunction, "5.5").expect_err("too high");
    assert_eq!(err.to_string(), "Must be between 0 and 5");

    let err = parse_field(FeatureField::Glucose, "501").expect_err("too high");
    assert_eq!(err.to_string(), "Must be between 0 and 500");
}

#[test]
fn all_errors_are_reported_together() {
    let mut form = filled_form();
    form.set_value(FeatureField::Glucose, "");
    form.set_value(FeatureField::Bmi, "heavy");
    form.set_value(FeatureField::Age, "151");

    let errors = form.submit().expect_err("invalid");
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(FeatureField::Glucose), Some(FieldError::Required));
    assert_eq!(errors.get(FeatureField::Bmi), Some(FieldError::NotANumber));
    assert!(matches!(
        errors.get(FeatureField::Age),
        Some(FieldError::OutOfRange(_))
    ));
    assert_eq!(form.errors(), &errors);
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = PredictionForm::new();
    form.validate();
    assert_eq!(form.errors().len(), 8);

    form.set_value(FeatureField::Glucose, "x");
    assert_eq!(form.errors().get(FeatureField::Glucose), None);
    assert_eq!(form.errors().len(), 7);
    assert_eq!(
        form.errors().get(FeatureField::Age),
        Some(FieldError::Required)
    );
}

#[test]
fn valid_form_submits_parsed_numbers() {
    let mut form = filled_form();
    let features = form.submit().expect("valid");

    assert_eq!(features.pregnancies, 1.0);
    assert_eq!(features.glucose, 85.0);
    assert_eq!(features.bmi, 24.5);
    assert_eq!(features.diabetes_pedigree_function, 0.35);
    assert_eq!(features.age, 30.0);
    assert!(form.errors().is_empty());
}

#[test]
fn loading_demo_clears_errors_and_overwrites_every_field() {
    let mut form = PredictionForm::new();
    form.set_value(FeatureField::Insulin, "999999");
    form.validate();
    assert!(!form.errors().is_empty());

    form.load_demo(DemoPreset::AboveNormal);
    assert!(form.errors().is_empty());
    assert_eq!(form.value(FeatureField::Insulin), "200");
    assert_eq!(form.value(FeatureField::Glucose), "155");
}

#[test]
fn repeated_demo_loads_cycle_through_presets() {
    let mut form = PredictionForm::new();
    form.load_demo(DemoPreset::Normal);
    let first = form.value(FeatureField::Glucose).to_string();
    form.load_demo(DemoPreset::Normal);
    let second = form.value(FeatureField::Glucose).to_string();
    assert_ne!(first, second);

    for _ in 2..DemoPreset::Normal.samples().len() {
        form.load_demo(DemoPreset::Normal);
    }
    assert_eq!(form.demo_position(DemoPreset::Normal), (1, 5));
    form.load_demo(DemoPreset::Normal);
    assert_eq!(form.value(FeatureField::Glucose), first);
}

#[test]
fn every_demo_sample_passes_validation() {
    for preset in [DemoPreset::Normal, DemoPreset::AboveNormal] {
        let mut form = PredictionForm::new();
        for _ in 0..preset.samples().len() {
            form.load_demo(preset);
            assert!(form.submit().is_ok(), "{preset} sample failed validation");
        }
    }
}

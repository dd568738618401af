use approx::assert_relative_eq;
use laju::comparison::{compare, ComparisonCfg, ComparisonError};
use laju::estimator::Region;
use laju::interpolation::errors::InterpolationError;
use laju::series::{DataPoint, SeriesError};

type LajuResult = Result<(), ComparisonError>;

fn points(raw: &[(i32, f64)]) -> Vec<DataPoint> {
    raw.iter().map(|&(year, count)| DataPoint::new(year, count)).collect()
}

#[test]
fn methods_agree_on_collinear_data() -> LajuResult {
    // counts on count = 2 * year + 1: the trend line and the polynomial
    // are the same function
    let pts: Vec<DataPoint> = (2016..2020)
        .map(|year| DataPoint::new(year, 2.0 * f64::from(year) + 1.0))
        .collect();
    let x_eval = [2017.5, 2019.0, 2024.0];

    let cfg = ComparisonCfg::new().set_points(&pts)?.set_x_eval(&x_eval)?;
    let rep = compare(cfg)?;

    for (&r, &n) in rep.regression.iter().zip(rep.newton.iter()) {
        assert_relative_eq!(r, n, max_relative = 1e-9);
    }
    assert_relative_eq!(rep.newton[2], 2.0 * 2024.0 + 1.0, max_relative = 1e-9);
    Ok(())
}

#[test]
fn report_labels_and_region_flags() -> LajuResult {
    let pts = points(&[(2018, 100.0), (2019, 130.0), (2020, 135.0)]);
    let x_eval = [2018.5, 2022.0];

    let cfg = ComparisonCfg::new().set_points(&pts)?.set_x_eval(&x_eval)?;
    let rep = compare(cfg)?;

    assert_eq!(rep.method_names, ["linear_regression", "newton"]);
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_eq!(rep.span.x_min, 2018.0);
    assert_eq!(rep.span.x_max, 2020.0);
    assert_eq!(rep.regions, vec![Region::Interpolation, Region::Extrapolation]);
    Ok(())
}

#[test]
fn duplicate_year_fails_the_polynomial_side() {
    let pts = points(&[(2018, 100.0), (2018, 110.0), (2020, 135.0)]);
    let cfg = ComparisonCfg::new().set_points(&pts).unwrap();

    let err = compare(cfg).unwrap_err();
    assert!(matches!(
        err,
        ComparisonError::Interpolation(InterpolationError::DuplicateYear { year: 2018 })
    ));
}

#[test]
fn insufficient_points_error() {
    let pts = points(&[(2020, 10.0)]);
    let err = ComparisonCfg::new().set_points(&pts).unwrap_err();
    assert!(matches!(err, SeriesError::InsufficientPoints { got: 1 }));
}

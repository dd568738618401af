use approx::{assert_abs_diff_eq, assert_relative_eq};
use laju::estimator::{Estimator, Region};
use laju::interpolation::errors::InterpolationError;
use laju::interpolation::newton::{build, interpolate, interpolate_at, NewtonCfg};
use laju::series::{DataPoint, SeriesError};

type LajuResult = Result<(), InterpolationError>;

fn points(raw: &[(i32, f64)]) -> Vec<DataPoint> {
    raw.iter().map(|&(year, count)| DataPoint::new(year, count)).collect()
}

#[test]
fn quadratic_global_match() -> LajuResult {
    // counts on count = year^2
    let pts = points(&[(0, 0.0), (1, 1.0), (2, 4.0)]);
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new().set_points(&pts)?.set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_abs_diff_eq!(rep.evaluated[0], 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.evaluated[1], 2.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn exact_hits_at_six_nodes() -> LajuResult {
    let pts = points(&[
        (2015, 3.0),
        (2016, -1.5),
        (2017, 4.0),
        (2018, 9.25),
        (2019, 2.0),
        (2020, 7.5),
    ]);

    let poly = build(NewtonCfg::new().set_points(&pts)?)?;
    for p in &pts {
        assert_abs_diff_eq!(poly.eval(p.x()), p.count, epsilon = 1e-8);
    }
    Ok(())
}

#[test]
fn two_points_match_closed_form_linear_interpolation() -> LajuResult {
    let pts = points(&[(2, 5.0), (7, 9.0)]);
    let target = 4.3;

    // count1 + (count2 - count1) / (year2 - year1) * (target - year1)
    let expected = 5.0 + (9.0 - 5.0) / (7.0 - 2.0) * (target - 2.0);
    assert_relative_eq!(interpolate_at(&pts, target)?, expected, max_relative = 1e-12);
    Ok(())
}

#[test]
fn umkm_two_point_scenario() -> LajuResult {
    let pts = points(&[(2015, 120_000.0), (2020, 150_000.0)]);
    assert_relative_eq!(
        interpolate_at(&pts, 2017.0)?,
        132_000.0,
        max_relative = 1e-12
    );
    Ok(())
}

#[test]
fn input_order_does_not_change_result() -> LajuResult {
    let sorted = points(&[(2015, 12.0), (2016, 15.0), (2018, 11.0), (2020, 19.0)]);
    let shuffled = points(&[(2018, 11.0), (2020, 19.0), (2015, 12.0), (2016, 15.0)]);
    let x_eval = [2015.5, 2017.0, 2019.25, 2023.0];

    let a = interpolate(NewtonCfg::new().set_points(&sorted)?.set_x_eval(&x_eval)?)?;
    let b = interpolate(NewtonCfg::new().set_points(&shuffled)?.set_x_eval(&x_eval)?)?;

    // the internal sort normalizes order, so the runs are identical
    assert_eq!(a.evaluated, b.evaluated);
    assert_eq!(a.coefficients, b.coefficients);
    Ok(())
}

#[test]
fn extrapolation_is_evaluated_and_flagged() -> LajuResult {
    // counts on count = year^2, so extrapolated values are known exactly
    let pts = points(&[(0, 0.0), (1, 1.0), (2, 4.0)]);
    let x_eval = [-1.0, 0.0, 1.0, 3.0];

    let cfg = NewtonCfg::new().set_points(&pts)?.set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_abs_diff_eq!(rep.evaluated[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.evaluated[3], 9.0, epsilon = 1e-12);

    assert_eq!(rep.regions[0], Region::Extrapolation);
    // endpoints count as extrapolation under the engine's region policy
    assert_eq!(rep.regions[1], Region::Extrapolation);
    assert_eq!(rep.regions[2], Region::Interpolation);
    assert_eq!(rep.regions[3], Region::Extrapolation);
    Ok(())
}

#[test]
fn report_exposes_span_and_coefficients() -> LajuResult {
    let pts = points(&[(2020, 150_000.0), (2015, 120_000.0)]);

    let cfg = NewtonCfg::new().set_points(&pts)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.method_name, "newton");
    assert_eq!(rep.span.x_min, 2015.0);
    assert_eq!(rep.span.x_max, 2020.0);

    // order 0 is the first sorted count, order 1 the first divided difference
    assert_abs_diff_eq!(rep.coefficients[0], 120_000.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.coefficients[1], 6_000.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> LajuResult {
    let pts = points(&[(2019, 10.0), (2020, 12.0)]);

    let rep = interpolate(NewtonCfg::new().set_points(&pts)?)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn duplicate_year_error() {
    let pts = points(&[(2018, 10.0), (2020, 14.0), (2018, 11.0)]);
    let cfg = NewtonCfg::new().set_points(&pts).unwrap();

    let err = build(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateYear { year: 2018 }));
}

#[test]
fn insufficient_points_error() {
    let pts = points(&[(2020, 10.0)]);
    let err = NewtonCfg::new().set_points(&pts).unwrap_err();
    assert!(matches!(err, SeriesError::InsufficientPoints { got: 1 }));
}

#[test]
fn non_finite_count_rejected() {
    let pts = points(&[(2019, f64::INFINITY), (2020, 12.0)]);
    let err = NewtonCfg::new().set_points(&pts).unwrap_err();
    assert!(matches!(err, SeriesError::NonFiniteCount { year: 2019, .. }));
}

#[test]
fn non_finite_eval_rejected() {
    let pts = points(&[(2019, 10.0), (2020, 12.0)]);
    let err = NewtonCfg::new()
        .set_points(&pts)
        .unwrap()
        .set_x_eval(&[2021.0, f64::NAN])
        .unwrap_err();
    assert!(matches!(err, SeriesError::NonFiniteEval { idx: 1 }));
}

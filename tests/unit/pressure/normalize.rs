use super::*;
use crate::foundation::core::Dims;

fn field_and_mask(values: &[f32], inside: &[bool]) -> (PressureField, FootMask) {
    let dims = Dims::new(values.len() as u32, 1);
    (
        PressureField::from_values(dims, values.to_vec()).unwrap(),
        FootMask::from_cells(dims, inside.to_vec()).unwrap(),
    )
}

#[test]
fn range_ignores_background_and_zero_pressure() {
    let (field, mask) = field_and_mask(&[0.9, 0.0, 0.2, 0.6], &[false, true, true, true]);
    assert_eq!(
        pressure_range(&field, &mask),
        PressureRange::Spread { min: 0.2, max: 0.6 }
    );
}

#[test]
fn spread_is_rescaled_then_contrast_curved() {
    let (field, mask) = field_and_mask(&[0.2, 0.4, 0.6, 0.5], &[true, true, true, false]);
    let (out, range) = normalize(field, &mask, 0.8, &CancelToken::new()).unwrap();
    assert_eq!(range, PressureRange::Spread { min: 0.2, max: 0.6 });

    let v = out.values();
    assert_eq!(v[0], 0.0);
    assert_eq!(v[2], 1.0);
    let mid_rescaled = (f64::from(0.4f32) - f64::from(0.2f32)) / (f64::from(0.6f32) - f64::from(0.2f32));
    assert_eq!(v[1], mid_rescaled.powf(0.8) as f32);
    assert!(v[1] > 0.5);
    // Background pixels are untouched.
    assert_eq!(v[3], 0.5);
}

#[test]
fn results_stay_within_unit_interval() {
    let values: Vec<f32> = (1..=50).map(|i| i as f32 / 53.0).collect();
    let inside = vec![true; values.len()];
    let (field, mask) = field_and_mask(&values, &inside);
    let (out, _) = normalize(field, &mask, 0.8, &CancelToken::new()).unwrap();
    assert!(out.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn flat_range_skips_rescaling() {
    let (field, mask) = field_and_mask(&[0.9975, 0.9975, 0.0], &[true, true, false]);
    let (out, range) = normalize(field.clone(), &mask, 0.8, &CancelToken::new()).unwrap();
    assert_eq!(range, PressureRange::Flat(0.9975));
    assert_eq!(out, field);
}

#[test]
fn empty_range_skips_rescaling() {
    let (field, mask) = field_and_mask(&[0.0, 0.4], &[true, false]);
    let (out, range) = normalize(field.clone(), &mask, 0.8, &CancelToken::new()).unwrap();
    assert_eq!(range, PressureRange::Empty);
    assert_eq!(out, field);
}

#[test]
fn unit_exponent_is_linear() {
    let (field, mask) = field_and_mask(&[0.25, 0.5, 0.75], &[true, true, true]);
    let (out, _) = normalize(field, &mask, 1.0, &CancelToken::new()).unwrap();
    assert_eq!(out.values(), &[0.0, 0.5, 1.0]);
}

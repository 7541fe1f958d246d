use super::*;
use crate::foundation::core::Dims;

fn single_pixel(dims: Dims, x: u32, y: u32) -> FootMask {
    let mut mask = FootMask::empty(dims);
    mask.set(x, y, true);
    mask
}

fn chebyshev(ax: u32, ay: u32, bx: u32, by: u32) -> u32 {
    ax.abs_diff(bx).max(ay.abs_diff(by))
}

/// Direct square-window dilation, used as the reference.
fn brute_force(mask: &FootMask, radius: u32) -> FootMask {
    let dims = mask.dims();
    let r = radius as i64;
    let mut out = FootMask::empty(dims);
    for y in 0..dims.height as i64 {
        for x in 0..dims.width as i64 {
            let mut hit = false;
            for dy in -r..=r {
                for dx in -r..=r {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= dims.width as i64 || ny >= dims.height as i64 {
                        continue;
                    }
                    hit |= mask.get(nx as u32, ny as u32);
                }
            }
            out.set(x as u32, y as u32, hit);
        }
    }
    out
}

#[test]
fn isolated_pixel_grows_to_11x11_block() {
    let dims = Dims::new(100, 100);
    let out = dilate(&single_pixel(dims, 50, 40), 5, &CancelToken::new()).unwrap();
    assert_eq!(out.count(), 121);
    for y in 0..100 {
        for x in 0..100 {
            assert_eq!(out.get(x, y), chebyshev(x, y, 50, 40) <= 5, "({x},{y})");
        }
    }
}

#[test]
fn window_is_clipped_at_the_corner() {
    let dims = Dims::new(100, 100);
    let out = dilate(&single_pixel(dims, 0, 0), 5, &CancelToken::new()).unwrap();
    assert_eq!(out.count(), 36);
    assert!(out.get(5, 5));
    assert!(!out.get(6, 0));
    assert!(!out.get(0, 6));
}

#[test]
fn single_pass_is_not_iterated() {
    let dims = Dims::new(40, 1);
    let out = dilate(&single_pixel(dims, 20, 0), 5, &CancelToken::new()).unwrap();
    assert_eq!(out.count(), 11);
}

#[test]
fn matches_square_window_reference() {
    let dims = Dims::new(23, 17);
    let mut mask = FootMask::empty(dims);
    for &(x, y) in &[(0, 0), (3, 9), (12, 4), (22, 16), (15, 15), (8, 8), (9, 8)] {
        mask.set(x, y, true);
    }
    for radius in [1, 2, 5] {
        let fast = dilate(&mask, radius, &CancelToken::new()).unwrap();
        assert_eq!(fast, brute_force(&mask, radius), "radius {radius}");
    }
}

#[test]
fn holes_inside_the_silhouette_close() {
    let dims = Dims::new(15, 15);
    let mut mask = FootMask::empty(dims);
    for y in 2..13 {
        for x in 2..13 {
            if (x, y) != (7, 7) {
                mask.set(x, y, true);
            }
        }
    }
    let out = dilate(&mask, 1, &CancelToken::new()).unwrap();
    assert!(out.get(7, 7));
}

#[test]
fn zero_radius_is_identity_and_empty_stays_empty() {
    let dims = Dims::new(8, 8);
    let mask = single_pixel(dims, 3, 3);
    assert_eq!(dilate(&mask, 0, &CancelToken::new()).unwrap(), mask);

    let empty = FootMask::empty(dims);
    assert!(dilate(&empty, 5, &CancelToken::new()).unwrap().is_empty());
}

#[test]
fn cancelled_token_stops_both_passes() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let src = vec![true; 6 * 4];
    let mut dst = vec![false; 6 * 4];
    let err = vertical_pass(&src, &mut dst, 6, 4, 1, &cancel).unwrap_err();
    assert!(matches!(err, crate::FootprintError::Cancelled));
    assert!(dst.iter().all(|&c| !c));

    let mask = single_pixel(Dims::new(6, 4), 2, 2);
    let err = dilate(&mask, 1, &cancel).unwrap_err();
    assert!(matches!(err, crate::FootprintError::Cancelled));
}

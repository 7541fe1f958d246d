use crate::foundation::{cancel::CancelToken, core::FootMask, error::FootprintResult};

/// Grow the mask by `radius` pixels in Chebyshev distance.
///
/// A pixel becomes foot when any foot pixel lies in the `(2r+1)²` square around it. The
/// window is clipped at the image border. The square test is separable, so it runs as a
/// horizontal then a vertical sliding-window pass.
pub fn dilate(mask: &FootMask, radius: u32, cancel: &CancelToken) -> FootprintResult<FootMask> {
    if radius == 0 {
        return Ok(mask.clone());
    }

    let dims = mask.dims();
    let (w, h) = (dims.width as usize, dims.height as usize);
    let r = radius as usize;

    let mut tmp = FootMask::empty(dims);
    horizontal_pass(mask.cells(), tmp.cells_mut(), w, h, r, cancel)?;

    let mut out = FootMask::empty(dims);
    vertical_pass(tmp.cells(), out.cells_mut(), w, h, r, cancel)?;
    Ok(out)
}

fn horizontal_pass(
    src: &[bool],
    dst: &mut [bool],
    w: usize,
    h: usize,
    r: usize,
    cancel: &CancelToken,
) -> FootprintResult<()> {
    let mut prefix = vec![0u32; w + 1];
    for y in 0..h {
        cancel.check()?;
        let row = &src[y * w..(y + 1) * w];
        for (x, &cell) in row.iter().enumerate() {
            prefix[x + 1] = prefix[x] + u32::from(cell);
        }
        for x in 0..w {
            let lo = x.saturating_sub(r);
            let hi = (x + r + 1).min(w);
            dst[y * w + x] = prefix[hi] > prefix[lo];
        }
    }
    Ok(())
}

fn vertical_pass(
    src: &[bool],
    dst: &mut [bool],
    w: usize,
    h: usize,
    r: usize,
    cancel: &CancelToken,
) -> FootprintResult<()> {
    // Column-wise prefix counts, one row of counters per image row.
    let mut prefix = vec![0u32; (h + 1) * w];
    for y in 0..h {
        cancel.check()?;
        for x in 0..w {
            prefix[(y + 1) * w + x] = prefix[y * w + x] + u32::from(src[y * w + x]);
        }
    }
    for y in 0..h {
        cancel.check()?;
        let lo = y.saturating_sub(r);
        let hi = (y + r + 1).min(h);
        for x in 0..w {
            dst[y * w + x] = prefix[hi * w + x] > prefix[lo * w + x];
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pressure/dilate.rs"]
mod tests;

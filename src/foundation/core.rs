use crate::foundation::error::{FootprintError, FootprintResult};

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA8 pixel with the given alpha.
    pub const fn to_rgba(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Row-major, straight-alpha RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    /// Wrap an RGBA8 buffer. The buffer must hold exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> FootprintResult<Self> {
        if width == 0 || height == 0 {
            return Err(FootprintError::input_unavailable(format!(
                "bitmap has no pixels ({width}x{height})"
            )));
        }
        let expected_len = pixel_count(width, height)?
            .checked_mul(4)
            .ok_or_else(|| FootprintError::validation("bitmap buffer size overflow"))?;
        if rgba.len() != expected_len {
            return Err(FootprintError::validation(format!(
                "bitmap buffer is {} bytes, expected {expected_len} for {width}x{height} RGBA8",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Bitmap filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, px: [u8; 4]) -> FootprintResult<Self> {
        let n = pixel_count(width, height)?;
        Self::new(width, height, px.repeat(n))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.width, self.height)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.rgba
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.rgba
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.rgba
    }

    /// RGBA of pixel `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Width/height pair shared by every per-pixel grid of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    pub width: u32,
    pub height: u32,
}

impl Dims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub(crate) fn ensure_matches(self, other: Dims, what: &str) -> FootprintResult<()> {
        if self != other {
            return Err(FootprintError::validation(format!(
                "{what} is {}x{}, expected {}x{}",
                other.width, other.height, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Per-pixel "part of the foot" classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootMask {
    dims: Dims,
    cells: Vec<bool>,
}

impl FootMask {
    /// All-background mask.
    pub fn empty(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![false; dims.len()],
        }
    }

    pub fn from_cells(dims: Dims, cells: Vec<bool>) -> FootprintResult<Self> {
        if cells.len() != dims.len() {
            return Err(FootprintError::validation(format!(
                "mask has {} cells, expected {}",
                cells.len(),
                dims.len()
            )));
        }
        Ok(Self { dims, cells })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.dims.width || y >= self.dims.height {
            return false;
        }
        self.cells[y as usize * self.dims.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.dims.width && y < self.dims.height {
            self.cells[y as usize * self.dims.width as usize + x as usize] = value;
        }
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }
}

/// Per-pixel pressure estimate. Background pixels hold 0.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureField {
    dims: Dims,
    values: Vec<f32>,
}

impl PressureField {
    pub fn zeros(dims: Dims) -> Self {
        Self {
            dims,
            values: vec![0.0; dims.len()],
        }
    }

    pub fn from_values(dims: Dims, values: Vec<f32>) -> FootprintResult<Self> {
        if values.len() != dims.len() {
            return Err(FootprintError::validation(format!(
                "pressure field has {} values, expected {}",
                values.len(),
                dims.len()
            )));
        }
        Ok(Self { dims, values })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x >= self.dims.width || y >= self.dims.height {
            return 0.0;
        }
        self.values[y as usize * self.dims.width as usize + x as usize]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }
}

fn pixel_count(width: u32, height: u32) -> FootprintResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| FootprintError::validation("bitmap size overflow"))
}

use crate::{
    foundation::error::{GifAnimError, GifAnimResult},
    render::frame::Frame,
};

/// One straight-alpha RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Masked paste of one pixel, mask = source alpha.
///
/// Every band is blended linearly, alpha included: `out = src * m + dst * (1 - m)`. Onto a
/// transparent pixel this yields alpha `a * a / 255`, so semi-transparent sources lose opacity.
pub fn mask_blend(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let m = u32::from(src[3]);
    if m == 0 {
        return dst;
    }
    if m == 255 {
        return src;
    }

    let inv = 255 - m;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = (mul_div255(u32::from(src[i]), m) + mul_div255(u32::from(dst[i]), inv)).min(255)
            as u8;
    }
    out
}

/// Paste `src` onto `dst` with its top-left corner at `(dx, dy)`, using the source alpha as
/// the mask (see [`mask_blend`]). Pixels falling outside `dst` are clipped.
pub fn paste_over(dst: &mut Frame, src: &Frame, dx: i64, dy: i64) -> GifAnimResult<()> {
    if let Some(defect) = dst.defect().or_else(|| src.defect()) {
        return Err(GifAnimError::encode(format!("paste_over: {defect}")));
    }

    let (dw, dh) = (i64::from(dst.width), i64::from(dst.height));
    let (sw, sh) = (i64::from(src.width), i64::from(src.height));

    // Past this check the offsets lie within (-size, canvas) so row math cannot overflow.
    let x0 = dx.max(0);
    let x1 = dx.saturating_add(sw).min(dw);
    let y0 = dy.max(0);
    let y1 = dy.saturating_add(sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let run = ((x1 - x0) * 4) as usize;
    for y in y0..y1 {
        let d_start = ((y * dw + x0) * 4) as usize;
        let s_start = (((y - dy) * sw + (x0 - dx)) * 4) as usize;
        let d_row = &mut dst.data[d_start..d_start + run];
        let s_row = &src.data[s_start..s_start + run];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = mask_blend([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Flatten straight-alpha RGBA8 over an opaque background into packed RGB8.
pub fn flatten_to_rgb8(src: &[u8], bg_rgb: [u8; 3]) -> GifAnimResult<Vec<u8>> {
    if !src.len().is_multiple_of(4) {
        return Err(GifAnimError::encode(
            "flatten_to_rgb8 expects an rgba8 buffer",
        ));
    }

    let mut out = Vec::with_capacity(src.len() / 4 * 3);
    for s in src.chunks_exact(4) {
        let a = u32::from(s[3]);
        let inv = 255 - a;
        for i in 0..3 {
            let v = mul_div255(u32::from(s[i]), a) + mul_div255(u32::from(bg_rgb[i]), inv);
            out.push(v.min(255) as u8);
        }
    }
    Ok(out)
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

//! Pixel format conversion helpers for presentation adapters.

/// Writes `rgb` as an opaque RGBA pixel.
pub fn write_rgba(dst: &mut [u8], rgb: [u8; 3]) {
    dst[0] = rgb[0];
    dst[1] = rgb[1];
    dst[2] = rgb[2];
    dst[3] = 255;
}

/// Copies RGBA pixel data to RGB, dropping alpha.
///
/// # Panics
/// Panics if `src` is not a multiple of 4 or `dst.len()` is not
/// `src.len() / 4 * 3`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    let expected_dst_len = (src.len() / 4) * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 10, // green, translucent
            0, 0, 255, 255, // blue
        ];
        let mut dst = vec![0; 9];

        copy_rgba_to_rgb(&src, &mut dst);

        assert_eq!(dst, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn copy_rgba_to_rgb_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_rgba_to_rgb(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn copy_rgba_to_rgb_size_mismatch_panics() {
        let mut dst = vec![0; 4];

        copy_rgba_to_rgb(&[1, 2, 3, 4], &mut dst);
    }

    #[test]
    fn write_rgba_sets_opaque_alpha() {
        let mut dst = [0u8; 4];

        write_rgba(&mut dst, [1, 2, 3]);

        assert_eq!(dst, [1, 2, 3, 255]);
    }
}

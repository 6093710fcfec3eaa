//! 3x3 integer convolution with reflect-101 borders (`gfedcb|abcdefgh|gfedcba`).

/// Maps an out-of-range coordinate back into `0..len` by mirroring around the
/// edge pixel without repeating it.
pub(crate) fn reflect_101(pos: i64, len: u32) -> u32 {
    let len = len as i64;
    if len <= 1 {
        return 0;
    }

    let mut pos = pos;
    loop {
        if pos < 0 {
            pos = -pos;
        } else if pos >= len {
            pos = 2 * len - 2 - pos;
        } else {
            return pos as u32;
        }
    }
}

/// Response of `kernel` centred on `(x, y)`. `sample` reads one channel value.
pub(crate) fn apply_at<F>(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    kernel: &[i32; 9],
    sample: F,
) -> i32
where
    F: Fn(u32, u32) -> i32,
{
    let mut sum = 0i32;

    for ky in -1i64..=1 {
        for kx in -1i64..=1 {
            let weight = kernel[((ky + 1) * 3 + (kx + 1)) as usize];
            if weight == 0 {
                continue;
            }

            let px = reflect_101(x as i64 + kx, width);
            let py = reflect_101(y as i64 + ky, height);
            sum += weight * sample(px, py);
        }
    }

    sum
}

use crate::core::data::point::Point;
use crate::core::tiling::errors::KernelSizeError;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Largest kernel the generator accepts. The raw subdivision grows roughly
/// eightfold per doubling of the kernel.
pub const MAX_KERNEL_SIZE: u32 = 64;

/// One progressive pass: render every pixel whose phase within the kernel
/// equals `offset`, drawing each as a block of `scale` pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TilePattern {
    pub offset: Point,
    pub scale: Point,
}

impl TilePattern {
    #[must_use]
    pub fn area(&self) -> i64 {
        self.scale.area()
    }
}

/// Recursively halves a `size` rectangle at `offset`, emitting the rectangle
/// itself before its halves. The result contains duplicate offsets.
#[must_use]
pub fn subdivide(size: Point, offset: Point) -> Vec<TilePattern> {
    let mut out = Vec::new();
    subdivide_into(size, offset, &mut out);
    out
}

fn subdivide_into(size: Point, offset: Point, out: &mut Vec<TilePattern>) {
    out.push(TilePattern {
        offset,
        scale: size,
    });

    if size.x > 1 && size.x >= size.y {
        let half = Point::new(size.x / 2, size.y);
        subdivide_into(half, offset, out);
        subdivide_into(half, offset + Point::new(size.x / 2, 0), out);
    }

    if size.y > 1 && size.y >= size.x {
        let half = Point::new(size.x, size.y / 2);
        subdivide_into(half, offset, out);
        subdivide_into(half, offset + Point::new(0, size.y / 2), out);
    }
}

/// Stable sort, largest blocks first.
pub fn sort_by_area(patterns: &mut [TilePattern]) {
    patterns.sort_by_key(|pattern| Reverse(pattern.area()));
}

/// Keeps the first occurrence of every offset.
#[must_use]
pub fn remove_duplicate_offsets(patterns: Vec<TilePattern>) -> Vec<TilePattern> {
    let mut seen = HashSet::with_capacity(patterns.len());
    patterns
        .into_iter()
        .filter(|pattern| seen.insert(pattern.offset))
        .collect()
}

/// Ordered, duplicate-free passes for a `kernel_size`² kernel.
///
/// For a power-of-two kernel the result has exactly `kernel_size²` entries,
/// one per pixel phase, and replaying them in order converges on a fully
/// resolved image.
pub fn generate_tile_patterns(kernel_size: u32) -> Result<Vec<TilePattern>, KernelSizeError> {
    generate_tile_patterns_at(kernel_size, Point::default())
}

/// Like [`generate_tile_patterns`] with every offset shifted by `base_offset`.
pub fn generate_tile_patterns_at(
    kernel_size: u32,
    base_offset: Point,
) -> Result<Vec<TilePattern>, KernelSizeError> {
    if kernel_size == 0 {
        return Err(KernelSizeError::ZeroKernelSize);
    }
    if kernel_size > MAX_KERNEL_SIZE {
        return Err(KernelSizeError::TooLarge { kernel_size });
    }

    let mut patterns = subdivide(Point::splat(kernel_size as i32), base_offset);
    sort_by_area(&mut patterns);

    Ok(remove_duplicate_offsets(patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(offset: (i32, i32), scale: (i32, i32)) -> TilePattern {
        TilePattern {
            offset: Point::new(offset.0, offset.1),
            scale: Point::new(scale.0, scale.1),
        }
    }

    #[test]
    fn zero_kernel_is_rejected() {
        assert_eq!(generate_tile_patterns(0), Err(KernelSizeError::ZeroKernelSize));
        assert_eq!(
            generate_tile_patterns(MAX_KERNEL_SIZE * 2),
            Err(KernelSizeError::TooLarge {
                kernel_size: MAX_KERNEL_SIZE * 2
            })
        );
    }

    #[test]
    fn unit_kernel_is_a_single_full_pass() {
        assert_eq!(generate_tile_patterns(1), Ok(vec![pattern((0, 0), (1, 1))]));
    }

    #[test]
    fn two_by_two_kernel_order() {
        let patterns = generate_tile_patterns(2).unwrap();

        assert_eq!(
            patterns,
            vec![
                pattern((0, 0), (2, 2)),
                pattern((1, 0), (1, 2)),
                pattern((0, 1), (2, 1)),
                pattern((1, 1), (1, 1)),
            ]
        );
    }

    #[test]
    fn subdivide_emits_parent_before_children_and_duplicates() {
        let raw = subdivide(Point::splat(2), Point::default());

        assert_eq!(raw[0], pattern((0, 0), (2, 2)));
        assert_eq!(raw.len(), 13);
        assert!(raw.iter().filter(|p| p.offset == Point::new(0, 0)).count() > 1);
    }

    #[test]
    fn sort_by_area_is_stable_and_descending() {
        let mut patterns = vec![
            pattern((0, 0), (1, 1)),
            pattern((1, 0), (1, 2)),
            pattern((0, 1), (2, 1)),
            pattern((0, 0), (2, 2)),
        ];

        sort_by_area(&mut patterns);

        assert_eq!(
            patterns,
            vec![
                pattern((0, 0), (2, 2)),
                pattern((1, 0), (1, 2)),
                pattern((0, 1), (2, 1)),
                pattern((0, 0), (1, 1)),
            ]
        );
    }

    #[test]
    fn remove_duplicate_offsets_keeps_first_occurrence() {
        let patterns = vec![
            pattern((0, 0), (2, 2)),
            pattern((0, 0), (1, 2)),
            pattern((1, 0), (1, 2)),
            pattern((1, 0), (1, 1)),
        ];

        assert_eq!(
            remove_duplicate_offsets(patterns),
            vec![pattern((0, 0), (2, 2)), pattern((1, 0), (1, 2))]
        );
    }

    #[test]
    fn power_of_two_kernels_have_one_entry_per_phase() {
        for kernel_size in [1, 2, 4, 8, 16] {
            let patterns = generate_tile_patterns(kernel_size).unwrap();
            let offsets: HashSet<Point> = patterns.iter().map(|p| p.offset).collect();

            assert_eq!(patterns.len(), (kernel_size * kernel_size) as usize);
            assert_eq!(offsets.len(), patterns.len());
            for y in 0..kernel_size as i32 {
                for x in 0..kernel_size as i32 {
                    assert!(offsets.contains(&Point::new(x, y)), "missing phase ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn replayed_coverage_grows_by_one_phase_per_entry() {
        let patterns = generate_tile_patterns(16).unwrap();
        let mut covered = HashSet::new();

        for (index, p) in patterns.iter().enumerate() {
            assert!(covered.insert(p.offset));
            assert_eq!(covered.len(), index + 1);
            assert_eq!(covered.len() == 256, index == patterns.len() - 1);
        }
    }

    #[test]
    fn blocks_stay_aligned_inside_the_kernel() {
        let patterns = generate_tile_patterns(16).unwrap();

        for p in &patterns {
            assert!(p.offset.x + p.scale.x <= 16 && p.offset.y + p.scale.y <= 16);
            assert_eq!(p.offset.x % p.scale.x, 0);
            assert_eq!(p.offset.y % p.scale.y, 0);
        }
        for pair in patterns.windows(2) {
            assert!(pair[0].area() >= pair[1].area());
        }
    }

    #[test]
    fn every_pixel_ends_up_drawn_from_its_own_phase() {
        let kernel = 16;
        let patterns = generate_tile_patterns(kernel as u32).unwrap();
        let mut owner = vec![None; (kernel * kernel) as usize];

        for p in &patterns {
            for y in p.offset.y..p.offset.y + p.scale.y {
                for x in p.offset.x..p.offset.x + p.scale.x {
                    owner[(y * kernel + x) as usize] = Some(p.offset);
                }
            }
        }

        for y in 0..kernel {
            for x in 0..kernel {
                assert_eq!(owner[(y * kernel + x) as usize], Some(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn base_offset_shifts_every_entry() {
        let base = Point::new(3, 5);
        let shifted = generate_tile_patterns_at(4, base).unwrap();
        let plain = generate_tile_patterns(4).unwrap();

        assert_eq!(shifted.len(), plain.len());
        for (s, p) in shifted.iter().zip(&plain) {
            assert_eq!(s.offset, p.offset + base);
            assert_eq!(s.scale, p.scale);
        }
    }
}

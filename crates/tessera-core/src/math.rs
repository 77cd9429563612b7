use crate::constants::{BLOCK_COLOR_MAX, BLOCK_COLOR_MIN};
use glam::{IVec3, Vec3};

/// 32-bit avalanche finalizer.
fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

/// Colour shared by every cell of one placed block.
///
/// Derived from the anchor cell and a salt (the rotation index), so the same
/// placement always gets the same colour. Channels stay within
/// [BLOCK_COLOR_MIN, BLOCK_COLOR_MAX].
pub fn block_color(anchor: IVec3, salt: u32) -> Vec3 {
    let seed = anchor
        .to_array()
        .into_iter()
        .fold(avalanche(salt), |acc, c| avalanche(acc ^ c as u32));
    let span = BLOCK_COLOR_MAX - BLOCK_COLOR_MIN;
    let channel = |i: u32| {
        let bits = avalanche(seed.wrapping_add(i.wrapping_mul(0x9E37_79B9)));
        // Top 24 bits as a fraction in [0, 1).
        let unit = (bits >> 8) as f32 / (1u32 << 24) as f32;
        BLOCK_COLOR_MIN + unit * span
    };
    Vec3::new(channel(0), channel(1), channel(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_color_in_range() {
        for x in 0..50 {
            let c = block_color(IVec3::new(x, x * 2, -x), x as u32);
            for ch in c.to_array() {
                assert!(
                    (BLOCK_COLOR_MIN..=BLOCK_COLOR_MAX).contains(&ch),
                    "channel {ch} out of range"
                );
            }
        }
    }

    #[test]
    fn test_block_color_stable_per_placement() {
        let anchor = IVec3::new(4, 0, 9);
        assert_eq!(block_color(anchor, 3), block_color(anchor, 3));
        assert_ne!(block_color(anchor, 3), block_color(anchor, 4));
    }

    #[test]
    fn test_neighbouring_anchors_get_different_colors() {
        let base = block_color(IVec3::new(10, 0, 10), 0);
        for step in [IVec3::X, IVec3::Y, IVec3::Z] {
            assert_ne!(block_color(IVec3::new(10, 0, 10) + step, 0), base);
        }
    }

    #[test]
    fn test_channels_are_not_identical() {
        let c = block_color(IVec3::new(7, 3, 1), 5);
        assert!(c.x != c.y || c.y != c.z, "grey colour {c}");
    }
}

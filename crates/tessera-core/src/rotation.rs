//! The 24 proper rotations of a cube.
//!
//! A rotation is stored as a signed axis permutation: component `i` of a
//! rotated vector is `signs[i] * v[axes[i]]`. Only permutations with
//! determinant +1 exist in [`CubeRotation::ALL`], so mirrored layouts can
//! never be produced and every rotated index stays integral.

use crate::constants::ROTATION_COUNT;
use crate::direction::{Axis, Direction};
use glam::{IVec3, Mat3, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeRotation {
    axes: [u8; 3],
    signs: [i8; 3],
}

const EVEN_PERMUTATIONS: [[u8; 3]; 3] = [[0, 1, 2], [1, 2, 0], [2, 0, 1]];
const ODD_PERMUTATIONS: [[u8; 3]; 3] = [[0, 2, 1], [1, 0, 2], [2, 1, 0]];
const POSITIVE_SIGNS: [[i8; 3]; 4] = [[1, 1, 1], [1, -1, -1], [-1, 1, -1], [-1, -1, 1]];
const NEGATIVE_SIGNS: [[i8; 3]; 4] = [[-1, -1, -1], [-1, 1, 1], [1, -1, 1], [1, 1, -1]];

const fn build_all() -> [CubeRotation; ROTATION_COUNT] {
    let mut out = [CubeRotation::IDENTITY; ROTATION_COUNT];
    let mut p = 0;
    while p < 3 {
        let mut s = 0;
        while s < 4 {
            // det = sign(permutation) * product(signs)
            out[p * 4 + s] = CubeRotation {
                axes: EVEN_PERMUTATIONS[p],
                signs: POSITIVE_SIGNS[s],
            };
            out[12 + p * 4 + s] = CubeRotation {
                axes: ODD_PERMUTATIONS[p],
                signs: NEGATIVE_SIGNS[s],
            };
            s += 1;
        }
        p += 1;
    }
    out
}

impl Default for CubeRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CubeRotation {
    pub const IDENTITY: CubeRotation = CubeRotation {
        axes: [0, 1, 2],
        signs: [1, 1, 1],
    };

    /// Every cube rotation, identity first.
    pub const ALL: [CubeRotation; ROTATION_COUNT] = build_all();

    const QUARTER_X: CubeRotation = CubeRotation {
        axes: [0, 2, 1],
        signs: [1, -1, 1],
    };
    const QUARTER_Y: CubeRotation = CubeRotation {
        axes: [2, 1, 0],
        signs: [1, 1, -1],
    };
    const QUARTER_Z: CubeRotation = CubeRotation {
        axes: [1, 0, 2],
        signs: [-1, 1, 1],
    };

    /// Right-handed rotation of `quarter_turns` * 90 degrees about +X.
    pub fn about_x(quarter_turns: i32) -> Self {
        Self::IDENTITY.repeat(Self::QUARTER_X, quarter_turns)
    }

    /// Right-handed rotation of `quarter_turns` * 90 degrees about +Y.
    pub fn about_y(quarter_turns: i32) -> Self {
        Self::IDENTITY.repeat(Self::QUARTER_Y, quarter_turns)
    }

    /// Right-handed rotation of `quarter_turns` * 90 degrees about +Z.
    pub fn about_z(quarter_turns: i32) -> Self {
        Self::IDENTITY.repeat(Self::QUARTER_Z, quarter_turns)
    }

    fn repeat(self, step: CubeRotation, quarter_turns: i32) -> Self {
        (0..quarter_turns.rem_euclid(4)).fold(self, |acc, _| acc.then(step))
    }

    /// Position of this rotation in [`CubeRotation::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Like [`CubeRotation::rotate`], but None when negating a component overflows.
    pub fn checked_rotate(self, v: IVec3) -> Option<IVec3> {
        let c = v.to_array();
        let component = |i: usize| {
            let value = c[self.axes[i] as usize];
            if self.signs[i] < 0 {
                value.checked_neg()
            } else {
                Some(value)
            }
        };
        Some(IVec3::new(component(0)?, component(1)?, component(2)?))
    }

    /// Rotate an integer vector. Exact for every component above `i32::MIN`.
    pub fn rotate(self, v: IVec3) -> IVec3 {
        let c = v.to_array();
        IVec3::new(
            self.signs[0] as i32 * c[self.axes[0] as usize],
            self.signs[1] as i32 * c[self.axes[1] as usize],
            self.signs[2] as i32 * c[self.axes[2] as usize],
        )
    }

    /// Rotate a face direction. The result is always another face direction.
    pub fn rotate_direction(self, direction: Direction) -> Direction {
        let target = Axis::ALL[self.inverse().axes[direction.axis().index()] as usize];
        let positive = (self.signs[target.index()] > 0) == direction.is_positive();
        Direction::from_axis(target, positive)
    }

    /// Rotation equivalent to applying `self` first, then `next`.
    pub fn then(self, next: CubeRotation) -> Self {
        let mut axes = [0u8; 3];
        let mut signs = [1i8; 3];
        for i in 0..3 {
            let k = next.axes[i] as usize;
            axes[i] = self.axes[k];
            signs[i] = next.signs[i] * self.signs[k];
        }
        Self { axes, signs }
    }

    pub fn inverse(self) -> Self {
        let mut axes = [0u8; 3];
        let mut signs = [1i8; 3];
        for i in 0..3 {
            let a = self.axes[i] as usize;
            axes[a] = i as u8;
            signs[a] = self.signs[i];
        }
        Self { axes, signs }
    }

    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_cols(
            self.rotate(IVec3::X).as_vec3(),
            self.rotate(IVec3::Y).as_vec3(),
            self.rotate(IVec3::Z).as_vec3(),
        )
    }

    /// Quaternion form, for handing the rotation to presentation code.
    pub fn to_quat(self) -> Quat {
        Quat::from_mat3(&self.to_mat3())
    }

    /// Snap an arbitrary quaternion to the closest cube rotation.
    pub fn from_quat(rotation: Quat) -> Self {
        let images = [
            rotation * Vec3::X,
            rotation * Vec3::Y,
            rotation * Vec3::Z,
        ];
        let score = |r: &CubeRotation| -> f32 {
            let m = r.to_mat3();
            images[0].dot(m.x_axis) + images[1].dot(m.y_axis) + images[2].dot(m.z_axis)
        };
        Self::ALL
            .iter()
            .copied()
            .max_by(|a, b| score(a).total_cmp(&score(b)))
            .unwrap_or(Self::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ALL_DIRECTIONS;
    use std::collections::HashSet;
    use std::f32::consts::FRAC_PI_2;

    fn determinant(r: CubeRotation) -> i32 {
        let m = [r.rotate(IVec3::X), r.rotate(IVec3::Y), r.rotate(IVec3::Z)];
        m[0].dot(m[1].cross(m[2]))
    }

    #[test]
    fn test_all_rotations_distinct() {
        let unique: HashSet<CubeRotation> = CubeRotation::ALL.iter().copied().collect();
        assert_eq!(unique.len(), ROTATION_COUNT);
    }

    #[test]
    fn test_all_rotations_proper() {
        for r in CubeRotation::ALL {
            assert_eq!(determinant(r), 1, "{r:?} is a reflection");
        }
    }

    #[test]
    fn test_identity_first() {
        assert_eq!(CubeRotation::ALL[0], CubeRotation::IDENTITY);
        assert_eq!(CubeRotation::IDENTITY.index(), 0);
        let v = IVec3::new(3, -4, 7);
        assert_eq!(CubeRotation::IDENTITY.rotate(v), v);
    }

    #[test]
    fn test_quarter_turns_match_right_hand_rule() {
        assert_eq!(CubeRotation::about_y(1).rotate(IVec3::X), IVec3::NEG_Z);
        assert_eq!(CubeRotation::about_x(1).rotate(IVec3::Y), IVec3::Z);
        assert_eq!(CubeRotation::about_z(1).rotate(IVec3::X), IVec3::Y);
    }

    #[test]
    fn test_four_quarter_turns_is_identity() {
        assert_eq!(CubeRotation::about_y(4), CubeRotation::IDENTITY);
        assert_eq!(CubeRotation::about_x(-1), CubeRotation::about_x(3));
        assert_eq!(CubeRotation::about_z(2).then(CubeRotation::about_z(2)), CubeRotation::IDENTITY);
    }

    #[test]
    fn test_then_applies_in_order() {
        let a = CubeRotation::about_x(1);
        let b = CubeRotation::about_y(1);
        let v = IVec3::new(1, 2, 3);
        assert_eq!(a.then(b).rotate(v), b.rotate(a.rotate(v)));
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let v = IVec3::new(1, 2, 3);
        for r in CubeRotation::ALL {
            assert_eq!(r.inverse().rotate(r.rotate(v)), v);
            assert_eq!(r.then(r.inverse()), CubeRotation::IDENTITY);
        }
    }

    #[test]
    fn test_rotate_direction_matches_vector_rotation() {
        for r in CubeRotation::ALL {
            for dir in ALL_DIRECTIONS {
                assert_eq!(
                    r.rotate_direction(dir).offset(),
                    r.rotate(dir.offset()),
                    "{r:?} rotating {dir:?}"
                );
            }
        }
    }

    #[test]
    fn test_index_matches_table_position() {
        for (i, r) in CubeRotation::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }

    #[test]
    fn test_checked_rotate() {
        let v = IVec3::new(3, -4, 7);
        for r in CubeRotation::ALL {
            assert_eq!(r.checked_rotate(v), Some(r.rotate(v)));
        }
        let extreme = IVec3::new(i32::MIN, 0, 0);
        assert_eq!(CubeRotation::IDENTITY.checked_rotate(extreme), Some(extreme));
        assert_eq!(CubeRotation::about_y(2).checked_rotate(extreme), None);
    }

    #[test]
    fn test_quat_matches_integer_rotation() {
        let v = IVec3::new(2, -1, 5);
        for r in CubeRotation::ALL {
            let rotated = r.to_quat() * v.as_vec3();
            let expected = r.rotate(v).as_vec3();
            assert!(
                (rotated - expected).length() < 1e-4,
                "{r:?}: {rotated} != {expected}"
            );
        }
    }

    #[test]
    fn test_from_quat_roundtrip() {
        for r in CubeRotation::ALL {
            assert_eq!(CubeRotation::from_quat(r.to_quat()), r);
        }
    }

    #[test]
    fn test_from_quat_snaps_near_rotation() {
        let q = Quat::from_rotation_y(FRAC_PI_2 + 0.1);
        assert_eq!(CubeRotation::from_quat(q), CubeRotation::about_y(1));
    }
}

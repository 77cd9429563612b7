use crate::config::GridConfig;
use crate::error::ConfigError;
use crate::space::VoxelSpace;
use crate::voxel::Voxel;
use glam::{IVec3, UVec3, Vec3};
use tessera_core::{VoxelIndex, VoxelStatus};

/// Dense box of voxels. The single owner of every cell it contains.
pub struct VoxelGrid {
    size: UVec3,
    voxel_size: f32,
    origin: Vec3,
    /// Flat storage, x fastest, then y, then z.
    voxels: Vec<Voxel>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        let config = GridConfig::default();
        Self::from_parts(config.size(), config.voxel_size, config.origin())
    }
}

impl VoxelGrid {
    /// Build a grid from a validated config.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            config.size(),
            config.voxel_size,
            config.origin(),
        ))
    }

    /// Build a unit-voxel grid of the given size at the origin.
    pub fn with_size(x: u32, y: u32, z: u32) -> Result<Self, ConfigError> {
        Self::new(&GridConfig {
            size: (x, y, z),
            voxel_size: 1.0,
            origin: (0.0, 0.0, 0.0),
        })
    }

    fn from_parts(size: UVec3, voxel_size: f32, origin: Vec3) -> Self {
        let mut voxels = Vec::with_capacity(size.x as usize * size.y as usize * size.z as usize);
        for z in 0..size.z as i32 {
            for y in 0..size.y as i32 {
                for x in 0..size.x as i32 {
                    let index = IVec3::new(x, y, z);
                    voxels.push(Voxel::new(index, origin + index.as_vec3() * voxel_size));
                }
            }
        }
        log::debug!(
            "Created voxel grid {}x{}x{} ({} cells)",
            size.x,
            size.y,
            size.z,
            voxels.len()
        );
        Self {
            size,
            voxel_size,
            origin,
            voxels,
        }
    }

    pub fn size(&self) -> UVec3 {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    fn flat_index(&self, index: VoxelIndex) -> Option<usize> {
        if !self.in_bounds(index) {
            return None;
        }
        let (sx, sy) = (self.size.x as usize, self.size.y as usize);
        Some(index.x as usize + sx * (index.y as usize + sy * index.z as usize))
    }

    /// Cells currently in `status`, in storage order.
    pub fn voxels_with_status(&self, status: VoxelStatus) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter().filter(move |v| v.status == status)
    }

    pub fn count_status(&self, status: VoxelStatus) -> usize {
        self.voxels_with_status(status).count()
    }

    /// Set the status of one cell. Returns false if `index` is outside the grid.
    pub fn set_status(&mut self, index: VoxelIndex, status: VoxelStatus) -> bool {
        match self.voxel_mut(index) {
            Some(voxel) => {
                voxel.status = status;
                true
            }
            None => false,
        }
    }
}

impl VoxelSpace for VoxelGrid {
    fn in_bounds(&self, index: VoxelIndex) -> bool {
        index.x >= 0
            && index.x < self.size.x as i32
            && index.y >= 0
            && index.y < self.size.y as i32
            && index.z >= 0
            && index.z < self.size.z as i32
    }

    fn voxel(&self, index: VoxelIndex) -> Option<&Voxel> {
        self.flat_index(index).and_then(|i| self.voxels.get(i))
    }

    fn voxel_mut(&mut self, index: VoxelIndex) -> Option<&mut Voxel> {
        self.flat_index(index).and_then(|i| self.voxels.get_mut(i))
    }

    fn centre(&self, index: VoxelIndex) -> Vec3 {
        self.origin + index.as_vec3() * self.voxel_size
    }
}

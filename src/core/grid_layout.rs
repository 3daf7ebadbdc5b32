use glam::{Vec2, Vec3};

use crate::core::wallet::CoinWallet;
use crate::error::EconomyError;
use crate::traits::{KeyValueStore, Spawner};

/// Row-major placement grid laid over a rectangular plane (XZ)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGrid {
    origin: Vec3,
    cell: Vec2,
    per_row: usize,
    target_scale: Vec3,
}

impl CropGrid {
    /// `crop_mesh_size` is the prefab's world footprint at `prefab_scale`.
    /// Spawned crops take `target_scale`, cells grow by `padding` on each axis.
    pub fn new(
        plane_center: Vec3,
        plane_size: Vec2,
        crop_mesh_size: Vec2,
        prefab_scale: Vec2,
        target_scale: Vec3,
        padding: f32,
    ) -> Self {
        let unscale = |size: f32, scale: f32| if scale != 0.0 { size / scale } else { size };
        let cell = Vec2::new(
            unscale(crop_mesh_size.x, prefab_scale.x) * target_scale.x + padding,
            unscale(crop_mesh_size.y, prefab_scale.y) * target_scale.z + padding,
        );

        let origin = plane_center - Vec3::new(plane_size.x / 2.0, 0.0, plane_size.y / 2.0)
            + Vec3::new(cell.x / 2.0, 0.0, cell.y / 2.0);

        let per_row = if cell.x > 0.0 {
            (plane_size.x / cell.x).floor().max(0.0) as usize
        } else {
            0
        };

        Self {
            origin: Vec3::new(origin.x, plane_center.y, origin.z),
            cell,
            per_row,
            target_scale,
        }
    }

    pub fn per_row(&self) -> usize {
        self.per_row
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell
    }

    pub fn target_scale(&self) -> Vec3 {
        self.target_scale
    }

    /// Position of the `index`th crop. Rows continue past the plane's far edge.
    pub fn slot(&self, index: usize) -> Option<Vec3> {
        if self.per_row == 0 {
            return None;
        }
        let row = index / self.per_row;
        let col = index % self.per_row;
        Some(self.origin + Vec3::new(col as f32 * self.cell.x, 0.0, row as f32 * self.cell.y))
    }
}

/// Buys crops with coins and places them on the grid
#[derive(Debug)]
pub struct CropPlanter<S, P> {
    wallet: CoinWallet<S>,
    grid: CropGrid,
    spawner: P,
    cost_per_crop: i64,
    planted: usize,
}

impl<S: KeyValueStore, P: Spawner> CropPlanter<S, P> {
    pub fn new(wallet: CoinWallet<S>, grid: CropGrid, spawner: P, cost_per_crop: i64) -> Self {
        Self {
            wallet,
            grid,
            spawner,
            cost_per_crop,
            planted: 0,
        }
    }

    pub fn wallet(&self) -> &CoinWallet<S> {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut CoinWallet<S> {
        &mut self.wallet
    }

    pub fn spawner(&self) -> &P {
        &self.spawner
    }

    pub fn planted(&self) -> usize {
        self.planted
    }

    /// Spend one crop's cost and spawn it in the next slot.
    /// Nothing is spent when the grid has no slot or coins are short.
    pub fn try_plant(&mut self) -> Result<Vec3, EconomyError> {
        let position = self.grid.slot(self.planted).ok_or(EconomyError::GridFull)?;
        let remaining = self.wallet.try_spend(self.cost_per_crop)?;

        self.spawner.spawn(position, self.grid.target_scale());
        self.planted += 1;
        log::info!("Crop planted at {}, coins remaining: {}", position, remaining);
        Ok(position)
    }
}

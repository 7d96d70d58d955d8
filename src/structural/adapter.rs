// Adapter: old targeting code expects single-precision angles under short
// names; the new target type is wrapped to look like the old one.

// Target interface the legacy targeting computer expects
pub trait OlderDeathStarSuperLaserAiming {
    fn angle_v(&self) -> f32;
    fn angle_h(&self) -> f32;
}

// Adaptee
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathStarSuperlaserTarget {
    pub angle_horizontal: f64,
    pub angle_vertical: f64,
}

impl DeathStarSuperlaserTarget {
    pub fn new(angle_horizontal: f64, angle_vertical: f64) -> Self {
        Self {
            angle_horizontal,
            angle_vertical,
        }
    }
}

// Adapter
pub struct OldDeathStarSuperlaserTarget {
    target: DeathStarSuperlaserTarget,
}

impl OldDeathStarSuperlaserTarget {
    pub fn new(target: DeathStarSuperlaserTarget) -> Self {
        Self { target }
    }
}

impl OlderDeathStarSuperLaserAiming for OldDeathStarSuperlaserTarget {
    fn angle_v(&self) -> f32 {
        self.target.angle_vertical as f32
    }

    fn angle_h(&self) -> f32 {
        self.target.angle_horizontal as f32
    }
}

/// Legacy call site, written against the old interface only.
pub fn aim(aiming: &dyn OlderDeathStarSuperLaserAiming) -> String {
    format!("Aiming at H:{} V:{}", aiming.angle_h(), aiming.angle_v())
}

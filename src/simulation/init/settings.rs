use crate::domain::materials::Material;

use super::perf_stats::StepStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> StepStats {
    world.perf_stats.clone()
}

pub(super) fn set_tick_ms(world: &mut WorldCore, tick_ms: f64) -> Result<(), String> {
    if !(tick_ms.is_finite() && tick_ms > 0.0) {
        return Err(format!("tick duration must be a positive number, got {}", tick_ms));
    }
    world.config.tick_ms = tick_ms;
    world.clock.set_tick_ms(tick_ms);
    Ok(())
}

pub(super) fn set_material_enabled(world: &mut WorldCore, material: Material, enabled: bool) -> Result<(), String> {
    if material == Material::Empty {
        return Err("empty is not a paintable material".to_string());
    }
    let list = &mut world.config.enabled_materials;
    if enabled {
        if !list.contains(&material) {
            list.push(material);
        }
    } else {
        list.retain(|m| *m != material);
    }
    Ok(())
}

use grainfall_engine::{mat_sand, mat_water, World};

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128);
    world.enable_perf_metrics(true);
    for row in 0..32 {
        for col in 0..128 {
            let id = if col % 2 == 0 { mat_sand() } else { mat_water() };
            assert_eq!(world.paint(row, col, id), 0);
        }
    }
    world.step();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.occupied_cells(), 32 * 128);
    assert_eq!(stats.frame(), 1);
    assert!(stats.particles_moved() > 0);
    assert!(stats.particles_processed() >= stats.particles_moved() + stats.particles_swapped());
}

#[test]
fn perf_disabled_reports_zeros() {
    let mut world = World::new(16);
    assert_eq!(world.paint(0, 0, mat_sand()), 0);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.particles_processed(), 0);
    assert_eq!(stats.frame(), 0);
}

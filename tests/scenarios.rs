//! End-to-end scenarios through the JS-facing `World` handle.

use grainfall_engine::{mat_empty, mat_sand, mat_water, mat_wood, Material, World, WorldCore};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn sand_column_settles_into_a_pile() {
    init_logger();
    let mut world = World::new(9);
    for row in 0..4 {
        assert_eq!(world.paint(row, 4, mat_sand()), 0);
    }
    for _ in 0..20 {
        world.step();
    }

    assert_eq!(world.particle_count(), 4);
    // Nothing floats: every grain rests on the floor or on another grain
    let core = world.core();
    for cell in core.occupied_cells() {
        let below = core.get(cell.row as i64 + 1, cell.col as i64);
        assert!(below.map_or(true, |c| c.material != Material::Empty));
    }
    assert_eq!(world.move_count(), 0);
}

#[test]
fn water_levels_out_in_a_basin() {
    init_logger();
    let mut world = World::new(6);
    // The perimeter is the basin wall
    for col in 0..6 {
        assert_eq!(world.paint(0, col, mat_water()), 0);
    }
    for _ in 0..30 {
        world.step();
    }
    for col in 0..6 {
        assert_eq!(world.material_at(5, col), mat_water());
        assert_eq!(world.material_at(4, col), mat_empty());
    }
}

#[test]
fn sand_ends_up_below_water() {
    init_logger();
    let mut world = WorldCore::new(4);
    for col in 0..4 {
        world.paint(0, col, Material::Sand).expect("sand");
        world.paint(1, col, Material::Sand).expect("sand");
        world.paint(2, col, Material::Water).expect("water");
        world.paint(3, col, Material::Water).expect("water");
    }
    for _ in 0..20 {
        world.step();
    }
    for col in 0..4 {
        assert_eq!(world.get(3, col).map(|c| c.material), Some(Material::Sand));
        assert_eq!(world.get(2, col).map(|c| c.material), Some(Material::Sand));
        assert_eq!(world.get(1, col).map(|c| c.material), Some(Material::Water));
        assert_eq!(world.get(0, col).map(|c| c.material), Some(Material::Water));
    }
}

#[test]
fn wood_shelf_holds_its_load() {
    let mut world = World::new(5);
    for col in 0..5 {
        assert_eq!(world.paint(2, col, mat_wood()), 0);
    }
    world.paint_radius(0, 2, 1, mat_sand());
    for _ in 0..10 {
        world.step();
    }
    for col in 0..5 {
        assert_eq!(world.material_at(2, col), mat_wood());
        assert_eq!(world.material_at(3, col), mat_empty());
        assert_eq!(world.material_at(4, col), mat_empty());
    }
}

#[test]
fn facade_reports_paint_rejections_as_codes() {
    let mut world = World::new(3);
    assert_eq!(world.paint(0, 0, mat_sand()), 0);
    assert_eq!(world.paint(0, 0, mat_water()), 2);
    assert_eq!(world.paint(3, 0, mat_water()), 1);
    assert_eq!(world.paint(0, -1, mat_water()), 1);
    assert_eq!(world.paint(1, 1, mat_empty()), 3);
    assert_eq!(world.paint(1, 1, 200), 3);
    assert_eq!(world.material_at(0, 0), mat_sand());
}

#[test]
fn render_buffer_tracks_the_world() {
    let mut world = World::new(8);
    world.paint_radius(3, 3, 2, mat_water());
    let count = world.extract_render_buffer();

    assert_eq!(count as u32, world.particle_count());
    assert_eq!(world.render_buffer_len(), count * 4);

    let json = world.occupied_cells_json();
    let cells: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(cells.as_array().map(|a| a.len()), Some(count));
    assert_eq!(cells[0]["material"], "water");
}

#[test]
fn advance_drives_ticks_from_elapsed_time() {
    let mut world = World::new(4);
    world.core_mut().set_tick_ms(10.0).expect("valid tick");
    assert_eq!(world.paint(0, 0, mat_sand()), 0);
    assert_eq!(world.advance(25.0), 2);
    assert_eq!(world.frame(), 2);
    assert_eq!(world.material_at(2, 0), mat_sand());
}

mod cell_ops;
mod material_color;
mod updated;

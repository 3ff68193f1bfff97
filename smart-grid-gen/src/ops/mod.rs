pub mod smart_grid_generate;

mod ct_mask;
mod render;
mod shading;
mod shapes;

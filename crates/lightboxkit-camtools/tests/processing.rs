#[path = "processing/assembly.rs"]
mod assembly;
#[path = "processing/night_light_box.rs"]
mod night_light_box;
#[path = "processing/validation.rs"]
mod validation;

pub mod image_handler;

pub use image_handler::{
    __path_get_image, __path_list_images, __path_submit_image, get_image, list_images, submit_image,
};
